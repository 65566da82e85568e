//! Viewer contract validation: slice consistency, dataset lookup
//! failures, and degenerate logarithmic ranges
use nalgebra::Vector3;
use sph_viz_core::{
    default_pairs, render_isosurface, render_planes, render_slice, Axis, FieldCollection, Grid,
    LogScale, PlanesRequest, ScalarField, SliceRequest, VizError, VolumeRequest,
};

fn scene(n: usize) -> (Grid, FieldCollection) {
    let grid = Grid::new(n);
    let fields = FieldCollection::generate(&grid, &default_pairs());
    (grid, fields)
}

#[test]
fn test_planes_match_direct_slices() {
    let (grid, fields) = scene(8);
    let req = PlanesRequest {
        dataset: "l3m1".to_string(),
        focus: Vector3::new(0.25, -0.75, 0.0),
    };
    let plot = render_planes(&fields, &grid, &LogScale::default(), &req).unwrap();

    let field = fields.get("l3m1").unwrap();
    let [i, j, k] = plot.indices;
    assert_eq!(plot.planes[0], field.plane(Axis::X, i));
    assert_eq!(plot.planes[1], field.plane(Axis::Y, j));
    assert_eq!(plot.planes[2], field.plane(Axis::Z, k));

    // Element-wise spot check against the full 3D array
    for a in 0..8 {
        for b in 0..8 {
            assert_eq!(plot.planes[0][a * 8 + b], field.get(i, a, b));
            assert_eq!(plot.planes[1][a * 8 + b], field.get(a, j, b));
            assert_eq!(plot.planes[2][a * 8 + b], field.get(a, b, k));
        }
    }
}

#[test]
fn test_unknown_dataset_produces_no_plot() {
    let (grid, fields) = scene(4);
    let scale = LogScale::default();

    let slice = render_slice(
        &fields,
        &grid,
        &scale,
        &SliceRequest {
            dataset: "nonexistent".to_string(),
            index: 0,
        },
    );
    assert_eq!(
        slice.unwrap_err(),
        VizError::InvalidDataset("nonexistent".to_string())
    );

    let planes = render_planes(
        &fields,
        &grid,
        &scale,
        &PlanesRequest {
            dataset: "nonexistent".to_string(),
            focus: Vector3::zeros(),
        },
    );
    assert!(matches!(planes, Err(VizError::InvalidDataset(_))));

    let volume = render_isosurface(
        &fields,
        &grid,
        &VolumeRequest {
            dataset: "nonexistent".to_string(),
        },
    );
    assert!(matches!(volume, Err(VizError::InvalidDataset(_))));
}

#[test]
fn test_zero_field_log_render_rejected() {
    let grid = Grid::new(4);
    let fields = FieldCollection::from_fields([("flat".to_string(), ScalarField::new(4))]);
    let err = render_slice(
        &fields,
        &grid,
        &LogScale::default(),
        &SliceRequest {
            dataset: "flat".to_string(),
            index: 0,
        },
    )
    .unwrap_err();
    assert!(matches!(err, VizError::InvalidRenderRange { .. }));
}

#[test]
fn test_shared_scale_across_planes() {
    let (grid, fields) = scene(8);
    let plot = render_planes(
        &fields,
        &grid,
        &LogScale::default(),
        &PlanesRequest {
            dataset: "l2m2".to_string(),
            focus: Vector3::new(0.0, 0.0, 0.0),
        },
    )
    .unwrap();

    // The shared vmax is the max over the three planes, and every plane
    // value sits at or below it
    let max = plot
        .planes
        .iter()
        .flat_map(|p| p.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(plot.range.vmax, max);
    assert!(plot.range.vmin < plot.range.vmax);
}
