//! Error types for dataset lookup and render-range validation

/// Errors that can occur when rendering a view of the field collection
#[derive(Debug, Clone, PartialEq)]
pub enum VizError {
    /// Requested dataset name is not present in the field collection
    InvalidDataset(String),
    /// Logarithmic color bounds are degenerate (vmin >= vmax, or an
    /// all-zero / non-finite field)
    InvalidRenderRange {
        /// Lower bound that was computed (or 0.0 when none exists)
        vmin: f64,
        /// Upper bound that was computed
        vmax: f64,
    },
    /// Slice index is outside the grid
    InvalidSliceIndex {
        /// Requested index along the slicing axis
        index: usize,
        /// Grid edge length
        n: usize,
    },
}

impl std::fmt::Display for VizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VizError::InvalidDataset(name) => {
                write!(f, "Dataset '{name}' not found in field collection")
            }
            VizError::InvalidRenderRange { vmin, vmax } => {
                write!(
                    f,
                    "Degenerate logarithmic render range: vmin={vmin}, vmax={vmax}"
                )
            }
            VizError::InvalidSliceIndex { index, n } => {
                write!(f, "Slice index {index} out of range for grid of edge {n}")
            }
        }
    }
}

impl std::error::Error for VizError {}
