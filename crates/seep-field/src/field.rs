//! The [`InfluenceField`] and its per-step relaxation algorithm.

use indexmap::IndexSet;
use seep_grid::helpers::{flat_index, in_bounds, neighbours_flat};
use seep_grid::SharedMask;

/// A named influence field over a fixed tile grid.
///
/// Holds two parallel row-major grids: the **current field** (the values
/// last published by [`recalculate`](Self::recalculate), read by
/// visualization) and the **carry buffer** (the working values fed into the
/// next relaxation step). Both start at zero and always have length
/// `width * height`.
///
/// Each relaxation step:
/// ```text
/// coefficient = exp(-decay)
/// dominant    = strongest decayed cardinal neighbour (by magnitude, from the buffer)
/// value_new   = value_old + momentum * (dominant - value_old)
/// ```
/// with every source tile pinned to `strength` in the buffer before the pass,
/// acting as a fixed boundary condition. Momentum near 0 makes the field
/// resist change; momentum near 1 snaps it to the neighbour-derived estimate
/// each step. Repeated application converges to a fixed point once sources
/// and the mask stop changing.
///
/// If collision is enabled and a shared [`ObstacleMask`](seep_grid::ObstacleMask)
/// is attached, blocked tiles act as hard sinks: they present a zero face to
/// their neighbours and never carry computed influence.
///
/// # Construction
///
/// Use the builder pattern:
///
/// ```
/// use seep_field::InfluenceField;
///
/// let field = InfluenceField::builder()
///     .name("threat")
///     .dimensions(16, 16)
///     .strength(10.0)
///     .decay(0.5)
///     .momentum(0.3)
///     .build()
///     .unwrap();
/// assert_eq!(field.values().len(), 256);
/// ```
#[derive(Debug)]
pub struct InfluenceField {
    name: String,
    width: u32,
    height: u32,
    strength: f32,
    decay: f32,
    momentum: f32,
    collision: bool,
    mask: Option<SharedMask>,
    sources: IndexSet<(i32, i32)>,
    values: Vec<f32>,
    buffer: Vec<f32>,
}

/// Builder for [`InfluenceField`].
///
/// The grid size must come from exactly one place: either an attached
/// [`SharedMask`] (the usual case — the field's dimensions are derived from
/// the mask and fixed for its lifetime) or explicit [`dimensions`]
/// (the standalone, maskless variant). All other settings have defaults:
/// empty name, zero strength/decay/momentum, collision disabled.
///
/// [`dimensions`]: InfluenceFieldBuilder::dimensions
pub struct InfluenceFieldBuilder {
    name: String,
    dimensions: Option<(u32, u32)>,
    mask: Option<SharedMask>,
    strength: f32,
    decay: f32,
    momentum: f32,
    collision: bool,
}

impl InfluenceField {
    /// Create a new builder for configuring an `InfluenceField`.
    pub fn builder() -> InfluenceFieldBuilder {
        InfluenceFieldBuilder {
            name: String::new(),
            dimensions: None,
            mask: None,
            strength: 0.0,
            decay: 0.0,
            momentum: 0.0,
            collision: false,
        }
    }

    /// Display name. Free-form and not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tiles per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Target magnitude written to source tiles each step.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Per-step falloff rate (`>= 0`).
    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Blend fraction toward the dominant neighbour estimate.
    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Whether the attached obstacle mask currently affects relaxation.
    pub fn collision_enabled(&self) -> bool {
        self.collision
    }

    /// The current field, row-major, for consumption by a rendering layer.
    ///
    /// The caller maps each tile to screen space with its own tile size and
    /// camera offset; this crate deals only in tile coordinates.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Whether `(x, y)` is an active source tile.
    pub fn has_source(&self, x: i32, y: i32) -> bool {
        self.sources.contains(&(x, y))
    }

    /// Number of active source tiles.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Iterate the active source coordinates in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.sources.iter().copied()
    }

    /// Set the source strength. Takes effect on the next
    /// [`recalculate`](Self::recalculate); never touches grid state.
    pub fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
    }

    /// Set the decay rate. Takes effect on the next
    /// [`recalculate`](Self::recalculate).
    pub fn set_decay(&mut self, decay: f32) {
        self.decay = decay;
    }

    /// Set the momentum blend fraction. Takes effect on the next
    /// [`recalculate`](Self::recalculate).
    pub fn set_momentum(&mut self, momentum: f32) {
        self.momentum = momentum;
    }

    /// Toggle whether the attached obstacle mask affects relaxation.
    ///
    /// Does not reset field values: tiles that stop being blocked keep
    /// whatever published value they held until the next pass writes them.
    pub fn set_collision(&mut self, enabled: bool) {
        self.collision = enabled;
    }

    /// Register a source at `(x, y)`.
    ///
    /// Sources are a set keyed by coordinate: adding an already-occupied
    /// coordinate is a no-op, never an accumulated multiplicity.
    /// Out-of-range coordinates are silently ignored.
    pub fn add_influence(&mut self, x: i32, y: i32) {
        if in_bounds(x, y, self.width, self.height) {
            self.sources.insert((x, y));
        }
    }

    /// Remove the source at `(x, y)`, if one exists.
    ///
    /// Out-of-range coordinates are silently ignored.
    pub fn remove_influence(&mut self, x: i32, y: i32) {
        if in_bounds(x, y, self.width, self.height) {
            self.sources.shift_remove(&(x, y));
        }
    }

    /// Advance the field by exactly one relaxation step.
    ///
    /// Seeds every source tile in the carry buffer with `strength`, then
    /// visits every tile in row-major order reading only buffer values and
    /// writing the current field, then commits the current field back over
    /// the buffer. Always completes in one full grid pass; never fails.
    ///
    /// Blocked tiles (collision enabled, mask attached, tile blocked) zero
    /// their buffer entry when visited and leave their published value
    /// untouched: they absorb anything that spread into them and present a
    /// zero face to tiles visited later in the same pass.
    pub fn recalculate(&mut self) {
        for &(x, y) in &self.sources {
            self.buffer[flat_index(x, y, self.width)] = self.strength;
        }

        // Cardinal neighbours only, so the distance is always one tile.
        let coefficient = (-self.decay).exp();

        let mask = match (self.collision, &self.mask) {
            (true, Some(mask)) => Some(mask.borrow()),
            _ => None,
        };

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let i = flat_index(x, y, self.width);

                if let Some(mask) = &mask {
                    if mask.is_blocked(x, y) {
                        self.buffer[i] = 0.0;
                        continue;
                    }
                }

                let mut max_influence = 0.0f32;
                let mut min_influence = 0.0f32;
                for n in neighbours_flat(x, y, self.width, self.height) {
                    let influence = self.buffer[n] * coefficient;
                    max_influence = max_influence.max(influence);
                    min_influence = min_influence.min(influence);
                }

                // A stronger negative pull wins; ties and the all-zero
                // neighbourhood fall to the non-negative side.
                let dominant = if min_influence.abs() > max_influence {
                    min_influence
                } else {
                    max_influence
                };

                let value = self.buffer[i];
                self.values[i] = value + self.momentum * (dominant - value);
            }
        }

        self.buffer.copy_from_slice(&self.values);
    }
}

impl InfluenceFieldBuilder {
    /// Set the display name (default empty).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Derive the grid size from a shared obstacle mask and attach it.
    ///
    /// Mutually exclusive with [`dimensions`](Self::dimensions). The mask is
    /// read once at [`build`](Self::build) to fix the field's size; the field
    /// never resizes independently of it.
    pub fn mask(mut self, mask: SharedMask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set an explicit grid size for the standalone (maskless) variant.
    ///
    /// Mutually exclusive with [`mask`](Self::mask).
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Set the source strength (default 0.0). Must be finite.
    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Set the per-step decay rate (default 0.0). Must be finite and `>= 0`.
    pub fn decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    /// Set the momentum blend fraction (default 0.0). Must be finite;
    /// intended use keeps it in `[0, 1]` but this is not enforced.
    pub fn momentum(mut self, momentum: f32) -> Self {
        self.momentum = momentum;
        self
    }

    /// Set whether the mask affects relaxation from the start (default false).
    pub fn collision(mut self, enabled: bool) -> Self {
        self.collision = enabled;
        self
    }

    /// Build the field, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - neither or both of `mask` and `dimensions` are set
    /// - either explicit dimension is 0
    /// - `decay` is negative or non-finite
    /// - `strength` or `momentum` is non-finite
    pub fn build(self) -> Result<InfluenceField, String> {
        let (width, height) = match (&self.mask, self.dimensions) {
            (Some(mask), None) => {
                let mask = mask.borrow();
                (mask.width(), mask.height())
            }
            (None, Some((w, h))) => {
                if w == 0 || h == 0 {
                    return Err(format!("dimensions must be non-zero, got {w}x{h}"));
                }
                (w, h)
            }
            (None, None) => {
                return Err("either mask or dimensions is required".to_string());
            }
            (Some(_), Some(_)) => {
                return Err("mask and dimensions are mutually exclusive".to_string());
            }
        };

        if !(self.decay >= 0.0) || !self.decay.is_finite() {
            return Err(format!("decay must be finite and >= 0, got {}", self.decay));
        }
        if !self.strength.is_finite() {
            return Err(format!("strength must be finite, got {}", self.strength));
        }
        if !self.momentum.is_finite() {
            return Err(format!("momentum must be finite, got {}", self.momentum));
        }

        let len = width as usize * height as usize;
        Ok(InfluenceField {
            name: self.name,
            width,
            height,
            strength: self.strength,
            decay: self.decay,
            momentum: self.momentum,
            collision: self.collision,
            mask: self.mask,
            sources: IndexSet::new(),
            values: vec![0.0; len],
            buffer: vec![0.0; len],
        })
    }
}
