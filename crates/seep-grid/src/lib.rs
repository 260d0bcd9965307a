//! Tile-grid topology and obstacle storage for Seep influence fields.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! [`ObstacleMask`] — a fixed-size boolean tile grid recording which tiles
//! block influence propagation — along with the flat-index and neighbour
//! helpers shared by field relaxation code.
//!
//! # Coordinate convention
//!
//! Tiles are addressed as `(x, y)` with `0 <= x < width` and
//! `0 <= y < height`, stored row-major at flat index `y * width + x`.
//! Mutators take `i32` coordinates and silently ignore out-of-range tiles,
//! so callers driven by unclamped pointer arithmetic never need to
//! pre-validate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod helpers;
pub mod mask;

pub use error::GridError;
pub use mask::{ObstacleMask, SharedMask};
