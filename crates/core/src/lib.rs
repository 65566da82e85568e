//! Spherical-Harmonic Field Visualization Core
//!
//! Generates synthetic regular-grid 3D scalar data (spherical harmonic
//! magnitudes sampled on a Cartesian mesh) and prepares it for external
//! display surfaces: 2D log-scaled slice plots, three orthogonal planes
//! with a shared color scale, and an isosurface figure description.
//!
//! The pipeline is strictly forward and stateless:
//! grid → field collection → (slice | planes | volume) renders. The grid
//! and collection are built once and borrowed read-only by every viewer;
//! view parameters are ephemeral request structs, so an interactive
//! layer simply re-invokes a render function on every input change.

// Coordinate mesh and derived spherical coordinates
pub mod grid;

// Spherical harmonic magnitude evaluation
pub mod harmonics;

// Scalar field storage and the named field collection
pub mod field;

// Logarithmic color bounds policy
pub mod scale;

// Slice and multi-axis viewers
pub mod view;

// Isosurface figure construction
pub mod volume;

// Error types
pub mod error;

// Re-export the primary types
pub use error::VizError;
pub use field::{dataset_key, default_pairs, Axis, FieldCollection, ScalarField};
pub use grid::Grid;
pub use scale::{LogRange, LogScale, DEFAULT_FLOOR_RATIO};
pub use view::{render_planes, render_slice, PlanesPlot, PlanesRequest, SlicePlot, SliceRequest};
pub use volume::{
    render_isosurface, IsosurfaceFigure, VolumeRequest, INTERACTIVE_EDGE_LIMIT, SURFACE_COUNT,
};
