use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

pub const MIN_RESOLUTION: u32 = 10;
pub const MAX_RESOLUTION: u32 = 1000;

/// Inclusive range of accepted grid resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for ResolutionBounds {
    fn default() -> Self {
        Self {
            min: MIN_RESOLUTION,
            max: MAX_RESOLUTION,
        }
    }
}

impl ResolutionBounds {
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 || self.min > self.max {
            return Err(GraphError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, resolution: u32) -> bool {
        (self.min..=self.max).contains(&resolution)
    }
}

/// A `resolution × resolution` grid of cells, addressed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub resolution: u32,
}

impl GridSpec {
    /// Build a grid checked against the default bounds.
    pub fn new(resolution: u32) -> Result<Self> {
        let spec = Self { resolution };
        spec.validate(&ResolutionBounds::default())?;
        Ok(spec)
    }

    pub fn validate(&self, bounds: &ResolutionBounds) -> Result<()> {
        if !bounds.contains(self.resolution) {
            return Err(GraphError::InvalidResolution {
                resolution: self.resolution,
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        let r = self.resolution as usize;
        r * r
    }

    pub fn step(&self) -> f32 {
        step(self.resolution)
    }
}

// Edge length of one cell in domain units
#[inline]
pub fn step(resolution: u32) -> f32 {
    2.0 / resolution as f32
}

/// Edge of the cube that bounds every catalog surface at this resolution,
/// with half a cell of slack on each side.
pub fn bounds_extent(resolution: u32) -> f32 {
    2.0 + step(resolution)
}

// Row-major integer coordinates (x, z) of a cell
#[inline]
pub fn cell_coords(index: usize, resolution: u32) -> (usize, usize) {
    let r = resolution as usize;
    (index % r, index / r)
}

/// Centre of cell `index` in domain coordinates.
///
/// Only meaningful for `index < resolution²`.
#[inline]
pub fn cell_to_uv(index: usize, resolution: u32) -> Vec2 {
    let (x, z) = cell_coords(index, resolution);
    let step = step(resolution);
    Vec2::new(
        (x as f32 + 0.5) * step - 1.0,
        (z as f32 + 0.5) * step - 1.0,
    )
}

/// The cell whose area contains `(u, v)`, or `None` outside `[-1, 1)²`.
pub fn uv_to_cell(u: f32, v: f32, resolution: u32) -> Option<usize> {
    if !(-1.0..1.0).contains(&u) || !(-1.0..1.0).contains(&v) {
        return None;
    }
    let r = resolution as usize;
    let step = step(resolution);
    // min() guards against rounding right at the upper edge
    let x = (((u + 1.0) / step).floor() as usize).min(r - 1);
    let z = (((v + 1.0) / step).floor() as usize).min(r - 1);
    Some(z * r + x)
}
