//! Grid and controller configuration.

use pathgrid_core::{Coord, GridError};

/// Smallest allowed width or height.
pub const MIN_SIDE: i32 = 2;
/// Largest allowed wall fraction.
pub const MAX_WALL_FRACTION: f64 = 0.5;
/// Regeneration attempts a controller makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Shape and obstacle density of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    /// Fraction of all cells turned into walls, in `[0, 0.5]`.
    pub wall_fraction: f64,
    /// Draw start and goal uniformly instead of using the given positions.
    pub randomize_start_and_goal: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            wall_fraction: 0.3,
            randomize_start_and_goal: false,
        }
    }
}

impl GridConfig {
    /// Create a configuration with fixed start and goal placement.
    pub fn new(width: i32, height: i32, wall_fraction: f64) -> Self {
        Self {
            width,
            height,
            wall_fraction,
            randomize_start_and_goal: false,
        }
    }

    /// Check sizes and wall fraction. NaN fractions are rejected.
    pub fn validate(&self) -> Result<(), GridError> {
        let fraction_ok = (0.0..=MAX_WALL_FRACTION).contains(&self.wall_fraction);
        if self.width < MIN_SIDE || self.height < MIN_SIDE || !fraction_ok {
            return Err(GridError::InvalidConfig {
                width: self.width,
                height: self.height,
                wall_fraction: self.wall_fraction,
            });
        }
        Ok(())
    }

    /// Number of walls a scatter pass places: `floor(fraction * w * h)`.
    pub fn wall_count(&self) -> usize {
        let cells = f64::from(self.width.max(0)) * f64::from(self.height.max(0));
        (self.wall_fraction * cells).floor().max(0.0) as usize
    }

    /// Default start position: the origin corner.
    pub fn default_start(&self) -> Coord {
        Coord::ZERO
    }

    /// Default goal position: the corner opposite the origin.
    pub fn default_goal(&self) -> Coord {
        Coord::new(self.width - 1, self.height - 1)
    }
}

/// Settings for a [`GridController`](crate::GridController).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    pub grid: GridConfig,
    /// Upper bound on build/search rounds in one regeneration request.
    pub max_attempts: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
