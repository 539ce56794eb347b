//! Run configuration, read from a RON file.
//!
//! ```ron
//! (
//!     dimension: 48,
//!     start: (x: 2, y: 2),
//!     end: (x: 45, y: 40),
//!     seed: 7,
//!     tie_break: FirstInserted,
//! )
//! ```
//!
//! Absent fields keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use gridpath_core::Point;
use gridpath_gen::{DEFAULT_SCALE, DEFAULT_THRESHOLD};
use gridpath_search::TieBreak;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Where the grid comes from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Thresholded Perlin noise, sized by `dimension`.
    #[default]
    Noise,
    /// An image file; endpoints are the green and red pixels.
    Image { path: PathBuf },
    /// A text map; endpoints are the `S` and `E` cells.
    Ascii { path: PathBuf },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Side length of a noise grid.
    pub dimension: i32,
    /// Route start for a noise grid.
    pub start: Point,
    /// Route end for a noise grid.
    pub end: Point,
    /// Noise samples at or above this are open.
    pub threshold: f64,
    pub seed: u64,
    /// Noise units per cell.
    pub scale: f64,
    pub mode: Mode,
    pub tie_break: TieBreak,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: 32,
            start: Point::new(0, 0),
            end: Point::new(31, 31),
            threshold: DEFAULT_THRESHOLD,
            seed: 0,
            scale: DEFAULT_SCALE,
            mode: Mode::Noise,
            tie_break: TieBreak::LastInserted,
        }
    }
}

impl Config {
    /// Parse and validate a configuration from RON text.
    pub fn from_ron(s: &str) -> Result<Self, AppError> {
        let config: Self = ron::from_str(s).map_err(|e| AppError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?;
        Self::from_ron(&content)
    }

    /// Reject values no grid source can work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dimension <= 0 {
            return Err(AppError::Invalid(format!(
                "dimension must be positive, got {}",
                self.dimension
            )));
        }
        if !self.threshold.is_finite() {
            return Err(AppError::Invalid(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(AppError::Invalid(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
