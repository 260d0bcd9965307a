//! Seep: grid-based influence-map diffusion for game AI and spatial visualization.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! Seep sub-crates. For most users, adding `seep` as a single dependency is
//! sufficient.
//!
//! An influence map is a scalar field over a tile grid, seeded at source
//! tiles and relaxed one step at a time: each tile pulls toward its strongest
//! decayed cardinal neighbour, so pressure (threat, attraction, smell, ...)
//! spreads outward from sources and fades with distance. An optional shared
//! obstacle mask walls off propagation. The library owns only the numeric
//! core — editors map pointer input to tile coordinates and renderers map
//! tiles to screen rectangles on their own.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // One obstacle mask, shared by every field on the map.
//! let mask = ObstacleMask::new_shared(16, 16).unwrap();
//! mask.borrow_mut().set_blocked(8, 8, true);
//!
//! let mut threat = InfluenceField::builder()
//!     .name("threat")
//!     .mask(std::rc::Rc::clone(&mask))
//!     .strength(10.0)
//!     .decay(0.5)
//!     .momentum(0.3)
//!     .collision(true)
//!     .build()
//!     .unwrap();
//!
//! // Editor layer: place a source (duplicate and out-of-range edits are no-ops).
//! threat.add_influence(4, 4);
//! threat.add_influence(4, 4);
//! assert_eq!(threat.source_count(), 1);
//!
//! // Periodic trigger: advance the field one relaxation step at a time.
//! for _ in 0..8 {
//!     threat.recalculate();
//! }
//!
//! // Visualization layer: read the published values without copying.
//! assert_eq!(threat.values().len(), 256);
//! assert!(threat.values().iter().any(|&v| v > 0.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `seep-grid` | Obstacle mask, grid errors, index/neighbour helpers |
//! | [`field`] | `seep-field` | Influence field and its relaxation algorithm |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tile-grid topology and obstacle storage (`seep-grid`).
pub use seep_grid as grid;

/// Influence fields and relaxation (`seep-field`).
pub use seep_field as field;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use seep_field::{InfluenceField, InfluenceFieldBuilder};
    pub use seep_grid::{GridError, ObstacleMask, SharedMask};
}
