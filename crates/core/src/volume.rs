//! Isosurface figure construction for an external 3D renderer
//!
//! Flattens a field and the grid's coordinate arrays into four parallel
//! 1D sequences (one entry per grid cell) and fills in the isosurface
//! configuration an interactive 3D surface expects: levels from zero up
//! to the field maximum, a small fixed surface count, caps off.

use crate::error::VizError;
use crate::field::FieldCollection;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of isosurface levels drawn between isomin and isomax.
///
/// Five levels keeps nested shells readable; more turns the figure into
/// an opaque blob.
pub const SURFACE_COUNT: u32 = 5;

/// Edge length beyond which interactive 3D renderers degrade sharply.
///
/// Advisory only; construction succeeds at any resolution.
pub const INTERACTIVE_EDGE_LIMIT: usize = 64;

/// View parameters for an isosurface render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRequest {
    /// Dataset name, e.g. "l2m1"
    pub dataset: String,
}

/// Complete isosurface description for an external 3D rendering surface
///
/// The four arrays are parallel: entry t is the sample at Cartesian
/// position `(x[t], y[t], z[t])` with field value `value[t]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsosurfaceFigure {
    /// Dataset the figure describes
    pub dataset: String,
    /// Flattened x coordinates
    pub x: Vec<f64>,
    /// Flattened y coordinates
    pub y: Vec<f64>,
    /// Flattened z coordinates
    pub z: Vec<f64>,
    /// Flattened field values
    pub value: Vec<f64>,
    /// Lowest isosurface level
    pub isomin: f64,
    /// Highest isosurface level (the field maximum)
    pub isomax: f64,
    /// Number of levels drawn between isomin and isomax
    pub surface_count: u32,
    /// Whether boundary caps are drawn (off, so shells stay visible)
    pub show_caps: bool,
}

/// Build the isosurface figure for one dataset.
///
/// # Errors
///
/// [`VizError::InvalidDataset`] for an unknown dataset name, and
/// [`VizError::InvalidRenderRange`] when the field maximum is not
/// positive (an all-zero field spans no isosurface levels).
pub fn render_isosurface(
    fields: &FieldCollection,
    grid: &Grid,
    req: &VolumeRequest,
) -> Result<IsosurfaceFigure, VizError> {
    let field = fields.get(&req.dataset)?;
    let isomax = field.max();
    if !isomax.is_finite() || isomax <= 0.0 {
        return Err(VizError::InvalidRenderRange {
            vmin: 0.0,
            vmax: isomax,
        });
    }

    if grid.edge() > INTERACTIVE_EDGE_LIMIT {
        warn!(
            n = grid.edge(),
            limit = INTERACTIVE_EDGE_LIMIT,
            "grid resolution above interactive isosurface limit; expect sluggish rendering"
        );
    }
    debug!(dataset = %req.dataset, cells = grid.len(), "built isosurface figure");

    Ok(IsosurfaceFigure {
        dataset: req.dataset.clone(),
        x: grid.x().to_vec(),
        y: grid.y().to_vec(),
        z: grid.z().to_vec(),
        value: field.as_slice().to_vec(),
        isomin: 0.0,
        isomax,
        surface_count: SURFACE_COUNT,
        show_caps: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{default_pairs, ScalarField};

    #[test]
    fn test_figure_arrays_are_parallel() {
        let grid = Grid::new(4);
        let fields = FieldCollection::generate(&grid, &default_pairs());
        let fig = render_isosurface(
            &fields,
            &grid,
            &VolumeRequest {
                dataset: "l1m1".to_string(),
            },
        )
        .unwrap();

        assert_eq!(fig.x.len(), 64);
        assert_eq!(fig.y.len(), 64);
        assert_eq!(fig.z.len(), 64);
        assert_eq!(fig.value.len(), 64);
        assert_eq!(fig.isomin, 0.0);
        assert_eq!(fig.surface_count, SURFACE_COUNT);
        assert!(!fig.show_caps);
        assert_eq!(fig.isomax, fields.get("l1m1").unwrap().max());
    }

    #[test]
    fn test_zero_field_rejected() {
        let grid = Grid::new(4);
        let fields =
            FieldCollection::from_fields([("flat".to_string(), ScalarField::new(4))]);
        let err = render_isosurface(
            &fields,
            &grid,
            &VolumeRequest {
                dataset: "flat".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, VizError::InvalidRenderRange { .. }));
    }
}
