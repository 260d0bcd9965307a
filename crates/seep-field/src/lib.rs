//! Influence-field relaxation over tile grids.
//!
//! An [`InfluenceField`] is a named scalar value grid seeded at designated
//! source tiles and advanced one relaxation step at a time by
//! [`recalculate`](InfluenceField::recalculate): sources are re-seeded to a
//! configured strength, every tile pulls toward its dominant decayed
//! cardinal-neighbour value, and the result is committed into a carry buffer
//! for the next step. An optional shared [`ObstacleMask`](seep_grid::ObstacleMask)
//! walls off propagation.
//!
//! Constructed via the builder pattern: [`InfluenceField::builder`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;

pub use field::{InfluenceField, InfluenceFieldBuilder};
