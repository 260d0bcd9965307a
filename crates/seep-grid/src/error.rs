//! Error types for grid construction.

use std::fmt;

/// Errors arising from tile-grid construction.
///
/// Out-of-range tile *access* is never an error anywhere in this crate —
/// mutators treat it as a silent no-op. Only construction can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero tiles on some axis.
    EmptyGrid,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one tile on each axis"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum dimension {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
