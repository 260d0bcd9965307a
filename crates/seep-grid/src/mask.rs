//! The obstacle mask: a fixed-size boolean tile grid.

use crate::error::GridError;
use crate::helpers::{flat_index, in_bounds};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an [`ObstacleMask`].
///
/// Multiple influence fields may reference the same mask; the mask is owned
/// collectively and may outlive any individual field. Fields take a shared
/// borrow during relaxation; the editor layer takes an exclusive borrow to
/// toggle tiles. There is no locking primitive — the handle is
/// single-threaded by construction (`Rc` is not `Send`), matching the
/// library's synchronous execution model.
pub type SharedMask = Rc<RefCell<ObstacleMask>>;

/// A fixed-size boolean grid recording which tiles block propagation.
///
/// Pure storage with bounds-checked mutation: no recalculation, no derived
/// state. All tiles default to unblocked. Dimensions are fixed at
/// construction and the backing grid always has exactly `width * height`
/// entries.
///
/// # Examples
///
/// ```
/// use seep_grid::ObstacleMask;
///
/// let mut mask = ObstacleMask::new(8, 8).unwrap();
/// mask.set_blocked(3, 4, true);
/// assert!(mask.is_blocked(3, 4));
///
/// // Out-of-range edits are a deliberate no-op, not a failure.
/// mask.set_blocked(-1, 100, true);
/// assert!(!mask.is_blocked(-1, 100));
/// ```
#[derive(Debug, Clone)]
pub struct ObstacleMask {
    width: u32,
    height: u32,
    tiles: Vec<bool>,
}

impl ObstacleMask {
    /// Maximum dimension size: tile coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a mask of `width * height` unblocked tiles.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            tiles: vec![false; width as usize * height as usize],
        })
    }

    /// Create a mask and wrap it in a [`SharedMask`] handle for use by
    /// multiple influence fields.
    pub fn new_shared(width: u32, height: u32) -> Result<SharedMask, GridError> {
        Ok(Rc::new(RefCell::new(Self::new(width, height)?)))
    }

    /// Number of tiles per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total tile count (`width * height`).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always returns `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Mark a tile blocked or unblocked.
    ///
    /// Out-of-range coordinates are silently ignored: no error, no effect.
    pub fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        if in_bounds(x, y, self.width, self.height) {
            self.tiles[flat_index(x, y, self.width)] = blocked;
        }
    }

    /// Whether a tile blocks propagation. Out-of-range tiles read as
    /// unblocked, consistent with the permissive mutator policy.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        in_bounds(x, y, self.width, self.height) && self.tiles[flat_index(x, y, self.width)]
    }

    /// The full grid, row-major, for bulk consumption (relaxation passes,
    /// visualization) without copying.
    pub fn tiles(&self) -> &[bool] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(ObstacleMask::new(0, 5), Err(GridError::EmptyGrid)));
        assert!(matches!(ObstacleMask::new(5, 0), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn new_mask_is_all_unblocked() {
        let mask = ObstacleMask::new(4, 3).unwrap();
        assert_eq!(mask.len(), 12);
        assert!(mask.tiles().iter().all(|&b| !b));
    }

    #[test]
    fn set_and_clear_blocked() {
        let mut mask = ObstacleMask::new(4, 4).unwrap();
        mask.set_blocked(2, 1, true);
        assert!(mask.is_blocked(2, 1));
        assert!(mask.tiles()[6]); // flat index y*width + x = 1*4 + 2

        mask.set_blocked(2, 1, false);
        assert!(!mask.is_blocked(2, 1));
    }

    #[test]
    fn out_of_range_edits_are_no_ops() {
        let mut mask = ObstacleMask::new(3, 3).unwrap();
        let before = mask.tiles().to_vec();

        mask.set_blocked(-1, 0, true);
        mask.set_blocked(0, -1, true);
        mask.set_blocked(3, 0, true);
        mask.set_blocked(0, 3, true);
        mask.set_blocked(i32::MIN, i32::MAX, true);

        assert_eq!(mask.tiles(), before.as_slice());
    }

    #[test]
    fn shared_handle_allows_edit_then_read() {
        let shared = ObstacleMask::new_shared(3, 3).unwrap();
        let reader = Rc::clone(&shared);

        shared.borrow_mut().set_blocked(1, 1, true);
        assert!(reader.borrow().is_blocked(1, 1));
    }

    proptest! {
        #[test]
        fn out_of_range_never_observable(x in i32::MIN..i32::MAX, y in i32::MIN..i32::MAX) {
            let mut mask = ObstacleMask::new(8, 8).unwrap();
            prop_assume!(!crate::helpers::in_bounds(x, y, 8, 8));

            mask.set_blocked(x, y, true);
            prop_assert!(mask.tiles().iter().all(|&b| !b));
            prop_assert!(!mask.is_blocked(x, y));
        }

        #[test]
        fn in_range_edits_round_trip(x in 0i32..8, y in 0i32..8, blocked: bool) {
            let mut mask = ObstacleMask::new(8, 8).unwrap();
            mask.set_blocked(x, y, blocked);
            prop_assert_eq!(mask.is_blocked(x, y), blocked);
        }
    }
}
