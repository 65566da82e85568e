//! Logarithmic color range policy
//!
//! Generated field minima are frequently exactly zero (harmonics vanish on
//! nodal lines), which is undefined under a logarithmic color scale. The
//! policy here fixes the upper bound to the observed maximum and floors
//! the lower bound at `vmax / floor_ratio`; values below the floor are
//! compressed into the bottom of the color scale by the renderer rather
//! than dropped from the data.

use crate::error::VizError;
use serde::{Deserialize, Serialize};

/// Default ratio between the upper bound and the lower-bound floor.
///
/// A presentation heuristic (five decades of dynamic range), not a
/// derived quantity; override [`LogScale::floor_ratio`] to taste.
pub const DEFAULT_FLOOR_RATIO: f64 = 1e5;

/// Explicit (vmin, vmax) bounds for a logarithmic color mapping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogRange {
    /// Lower color bound, always > 0
    pub vmin: f64,
    /// Upper color bound, always > vmin
    pub vmax: f64,
}

/// Bound-selection policy for logarithmic color scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    /// vmax / vmin ratio used when the data minimum sits below the floor
    pub floor_ratio: f64,
}

impl Default for LogScale {
    fn default() -> Self {
        Self {
            floor_ratio: DEFAULT_FLOOR_RATIO,
        }
    }
}

impl LogScale {
    /// Compute bounds for one array of values.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidRenderRange`] when the maximum is not a
    /// positive finite number (e.g. an all-zero field) or the resulting
    /// bounds are degenerate (`vmin >= vmax`).
    pub fn range_of(&self, values: &[f64]) -> Result<LogRange, VizError> {
        self.shared_range(&[values])
    }

    /// Compute one shared set of bounds across several value arrays.
    ///
    /// Used by the multi-axis viewer so side-by-side panels stay visually
    /// comparable.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LogScale::range_of`].
    pub fn shared_range(&self, arrays: &[&[f64]]) -> Result<LogRange, VizError> {
        let mut vmax = f64::NEG_INFINITY;
        let mut data_min = f64::INFINITY;
        for values in arrays {
            for &v in *values {
                vmax = vmax.max(v);
                data_min = data_min.min(v);
            }
        }

        if !vmax.is_finite() || vmax <= 0.0 {
            return Err(VizError::InvalidRenderRange { vmin: 0.0, vmax });
        }

        let floor = vmax / self.floor_ratio;
        let vmin = if data_min > floor { data_min } else { floor };
        if vmin >= vmax {
            return Err(VizError::InvalidRenderRange { vmin, vmax });
        }

        Ok(LogRange { vmin, vmax })
    }
}
