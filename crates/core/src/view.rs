//! Slice and multi-axis viewers
//!
//! Pure render functions: each takes the read-only field collection, the
//! grid, a bound-selection policy, and an ephemeral request struct, and
//! returns a plot value object for an external raster surface to draw.
//! Nothing is cached; an interactive layer re-invokes these on every
//! parameter change.

use crate::error::VizError;
use crate::field::{Axis, FieldCollection};
use crate::grid::Grid;
use crate::scale::{LogRange, LogScale};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// View parameters for a single-slice render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceRequest {
    /// Dataset name, e.g. "l2m1"
    pub dataset: String,
    /// Grid index along the first (x) axis
    pub index: usize,
}

/// View parameters for a three-plane render through one point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanesRequest {
    /// Dataset name, e.g. "l2m1"
    pub dataset: String,
    /// Cartesian focus point; each coordinate snaps to the nearest grid
    /// plane
    pub focus: Vector3<f64>,
}

/// One rendered 2D cross-section with its logarithmic color bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlicePlot {
    /// Dataset the slice was taken from
    pub dataset: String,
    /// Index along the x axis where the plane was extracted
    pub index: usize,
    /// Plane edge length (values is n×n, row-major)
    pub n: usize,
    /// Plane values, layout `values[j*n + k]`
    pub values: Vec<f64>,
    /// Color bounds computed from the full 3D field
    pub range: LogRange,
}

/// Three orthogonal cross-sections through one grid point, sharing one
/// color scale
///
/// Rendered as three panels of a 2×2 layout; the fourth panel is left
/// blank deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanesPlot {
    /// Dataset the planes were taken from
    pub dataset: String,
    /// Snapped grid indices (i, j, k) of the focus point
    pub indices: [usize; 3],
    /// Plane edge length (each plane is n×n, row-major)
    pub n: usize,
    /// Planes perpendicular to x, y, z in that order
    pub planes: [Vec<f64>; 3],
    /// Shared color bounds across all three planes
    pub range: LogRange,
}

/// Render the cross-section at `req.index` along the x axis.
///
/// Color bounds come from the full 3D field, so stepping through slice
/// indices keeps a stable scale.
///
/// # Errors
///
/// [`VizError::InvalidDataset`] for an unknown dataset name,
/// [`VizError::InvalidSliceIndex`] for an index outside the grid, and
/// [`VizError::InvalidRenderRange`] when the field admits no valid
/// logarithmic bounds.
pub fn render_slice(
    fields: &FieldCollection,
    grid: &Grid,
    scale: &LogScale,
    req: &SliceRequest,
) -> Result<SlicePlot, VizError> {
    let field = fields.get(&req.dataset)?;
    let n = grid.edge();
    if req.index >= n {
        return Err(VizError::InvalidSliceIndex { index: req.index, n });
    }

    let range = scale.range_of(field.as_slice())?;
    let values = field.plane(Axis::X, req.index);
    debug!(dataset = %req.dataset, index = req.index, "rendered slice");

    Ok(SlicePlot {
        dataset: req.dataset.clone(),
        index: req.index,
        n,
        values,
        range,
    })
}

/// Render the three orthogonal cross-sections through `req.focus`.
///
/// Each focus coordinate is snapped to the nearest grid plane via
/// [`Grid::coord_to_index`], and one shared color range is computed over
/// all three planes so the panels stay comparable.
///
/// # Errors
///
/// [`VizError::InvalidDataset`] for an unknown dataset name and
/// [`VizError::InvalidRenderRange`] when the planes admit no valid
/// logarithmic bounds.
pub fn render_planes(
    fields: &FieldCollection,
    grid: &Grid,
    scale: &LogScale,
    req: &PlanesRequest,
) -> Result<PlanesPlot, VizError> {
    let field = fields.get(&req.dataset)?;
    let indices = [
        grid.coord_to_index(req.focus.x),
        grid.coord_to_index(req.focus.y),
        grid.coord_to_index(req.focus.z),
    ];

    let planes = [
        field.plane(Axis::X, indices[0]),
        field.plane(Axis::Y, indices[1]),
        field.plane(Axis::Z, indices[2]),
    ];
    let range = scale.shared_range(&[&planes[0], &planes[1], &planes[2]])?;
    debug!(dataset = %req.dataset, ?indices, "rendered orthogonal planes");

    Ok(PlanesPlot {
        dataset: req.dataset.clone(),
        indices,
        n: grid.edge(),
        planes,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::default_pairs;

    fn scene(n: usize) -> (Grid, FieldCollection) {
        let grid = Grid::new(n);
        let fields = FieldCollection::generate(&grid, &default_pairs());
        (grid, fields)
    }

    #[test]
    fn test_slice_matches_direct_indexing() {
        let (grid, fields) = scene(6);
        let plot = render_slice(
            &fields,
            &grid,
            &LogScale::default(),
            &SliceRequest {
                dataset: "l2m1".to_string(),
                index: 3,
            },
        )
        .unwrap();

        let field = fields.get("l2m1").unwrap();
        assert_eq!(plot.values.len(), 36);
        for j in 0..6 {
            for k in 0..6 {
                assert_eq!(plot.values[j * 6 + k], field.get(3, j, k));
            }
        }
        assert!(plot.range.vmin < plot.range.vmax);
    }

    #[test]
    fn test_slice_index_out_of_range() {
        let (grid, fields) = scene(4);
        let err = render_slice(
            &fields,
            &grid,
            &LogScale::default(),
            &SliceRequest {
                dataset: "l0m0".to_string(),
                index: 4,
            },
        )
        .unwrap_err();
        assert_eq!(err, VizError::InvalidSliceIndex { index: 4, n: 4 });
    }

    #[test]
    fn test_unknown_dataset() {
        let (grid, fields) = scene(4);
        let err = render_slice(
            &fields,
            &grid,
            &LogScale::default(),
            &SliceRequest {
                dataset: "nonexistent".to_string(),
                index: 0,
            },
        )
        .unwrap_err();
        assert_eq!(err, VizError::InvalidDataset("nonexistent".to_string()));
    }

    #[test]
    fn test_planes_snap_and_share_range() {
        let (grid, fields) = scene(8);
        let plot = render_planes(
            &fields,
            &grid,
            &LogScale::default(),
            &PlanesRequest {
                dataset: "l3m2".to_string(),
                focus: Vector3::new(0.0, -0.5, 0.26),
            },
        )
        .unwrap();

        // n=8: coord*4 + 4 → 4, 2, round(5.04) = 5
        assert_eq!(plot.indices, [4, 2, 5]);
        let field = fields.get("l3m2").unwrap();
        assert_eq!(plot.planes[1], field.plane(Axis::Y, 2));
        assert!(plot.range.vmin < plot.range.vmax);
    }
}
