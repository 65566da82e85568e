//! Scalar field storage and the named field collection
//!
//! A [`ScalarField`] stores one 3D field as a flat `Vec<f64>` sharing the
//! grid's row-major layout. The [`FieldCollection`] maps dataset names to
//! fields; it is built once from a grid and a list of (degree, order)
//! pairs and never mutated afterwards — viewers borrow it read-only.

use crate::error::VizError;
use crate::grid::Grid;
use crate::harmonics;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Axis along which a 2D plane is extracted from a 3D field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// First index (x direction)
    X,
    /// Second index (y direction)
    Y,
    /// Third index (z direction)
    Z,
}

/// 3D scalar field data container
///
/// Stores n×n×n values as a flat `Vec<f64>` in row-major order, matching
/// the grid layout: index `(i*n + j)*n + k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    /// Field values in row-major order
    data: Vec<f64>,
    /// Edge length (samples per axis)
    n: usize,
}

impl ScalarField {
    /// Create a field of edge length `n`, initialized to zero.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "Field edge length must be positive");
        Self {
            data: vec![0.0; n * n * n],
            n,
        }
    }

    /// Wrap an existing value vector.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `n³` or `n` is zero.
    #[must_use]
    pub fn from_values(n: usize, data: Vec<f64>) -> Self {
        assert!(n > 0, "Field edge length must be positive");
        assert_eq!(data.len(), n * n * n, "Value count must equal n³");
        Self { data, n }
    }

    /// Edge length (samples per axis)
    #[must_use]
    pub fn edge(&self) -> usize {
        self.n
    }

    /// Get reference to the flat value array
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Value at grid position (i, j, k)
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        assert!(
            i < self.n && j < self.n && k < self.n,
            "Coordinates out of bounds"
        );
        self.data[(i * self.n + j) * self.n + k]
    }

    /// Set value at grid position (i, j, k)
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) {
        assert!(
            i < self.n && j < self.n && k < self.n,
            "Coordinates out of bounds"
        );
        self.data[(i * self.n + j) * self.n + k] = value;
    }

    /// Maximum value over the whole field
    #[must_use]
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Minimum value over the whole field
    #[must_use]
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Extract the n×n plane at `index` along `axis`.
    ///
    /// The returned vector is row-major over the two remaining axes in
    /// their original order (e.g. for [`Axis::X`] the layout is
    /// `plane[j*n + k]`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn plane(&self, axis: Axis, index: usize) -> Vec<f64> {
        assert!(index < self.n, "Plane index out of bounds");
        let n = self.n;
        let mut out = Vec::with_capacity(n * n);
        match axis {
            Axis::X => {
                for j in 0..n {
                    for k in 0..n {
                        out.push(self.data[(index * n + j) * n + k]);
                    }
                }
            }
            Axis::Y => {
                for i in 0..n {
                    for k in 0..n {
                        out.push(self.data[(i * n + index) * n + k]);
                    }
                }
            }
            Axis::Z => {
                for i in 0..n {
                    for j in 0..n {
                        out.push(self.data[(i * n + j) * n + index]);
                    }
                }
            }
        }
        out
    }
}

/// Deterministic dataset name for a (degree, order) pair, e.g. "l2m1"
#[must_use]
pub fn dataset_key(degree: u32, order: u32) -> String {
    format!("l{degree}m{order}")
}

/// Default (degree, order) pairs: every order 0..=degree for degrees 0..=3
#[must_use]
pub fn default_pairs() -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    for l in 0..=3 {
        for m in 0..=l {
            pairs.push((l, m));
        }
    }
    pairs
}

/// Read-only mapping from dataset name to generated scalar field
///
/// Built once at startup and passed by reference into every viewer
/// function; no entry is ever removed or mutated.
#[derive(Debug, Clone)]
pub struct FieldCollection {
    fields: FxHashMap<String, ScalarField>,
    n: usize,
}

impl FieldCollection {
    /// Evaluate |Y_l^m| over the grid for each (degree, order) pair.
    ///
    /// Evaluation is parallelized over grid cells with rayon; the result
    /// is nevertheless deterministic (each cell's value depends only on
    /// its theta), so two generations from the same grid and pairs are
    /// bit-identical.
    ///
    /// # Panics
    ///
    /// Panics if any pair has `order > degree`.
    #[must_use]
    pub fn generate(grid: &Grid, pairs: &[(u32, u32)]) -> Self {
        let mut fields = FxHashMap::default();
        for &(l, m) in pairs {
            assert!(m <= l, "Harmonic order must not exceed degree");
            let data: Vec<f64> = grid
                .theta()
                .par_iter()
                .map(|&theta| harmonics::magnitude(l, m, theta))
                .collect();
            fields.insert(dataset_key(l, m), ScalarField::from_values(grid.edge(), data));
        }
        info!(
            n = grid.edge(),
            datasets = fields.len(),
            "generated field collection"
        );
        Self {
            fields,
            n: grid.edge(),
        }
    }

    /// Build a collection from pre-computed fields (mainly for tests and
    /// external data).
    ///
    /// # Panics
    ///
    /// Panics if the fields disagree on edge length or the iterator is
    /// empty.
    #[must_use]
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, ScalarField)>,
    {
        let mut map = FxHashMap::default();
        let mut n = 0;
        for (name, field) in fields {
            if n == 0 {
                n = field.edge();
            }
            assert_eq!(field.edge(), n, "All fields must share one edge length");
            map.insert(name, field);
        }
        assert!(n > 0, "Field collection cannot be empty");
        Self { fields: map, n }
    }

    /// Edge length shared by every field in the collection
    #[must_use]
    pub fn edge(&self) -> usize {
        self.n
    }

    /// Number of datasets
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the collection holds no datasets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dataset names in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up a dataset by name.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidDataset`] if the name is unknown.
    pub fn get(&self, name: &str) -> Result<&ScalarField, VizError> {
        self.fields
            .get(name)
            .ok_or_else(|| VizError::InvalidDataset(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = ScalarField::new(4);
        assert_eq!(field.edge(), 4);
        assert_eq!(field.as_slice().len(), 64);
        assert!(field.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_field_get_set() {
        let mut field = ScalarField::new(4);
        field.set(1, 2, 3, 123.45);
        assert_eq!(field.get(1, 2, 3), 123.45);

        // Verify row-major indexing: (i*n + j)*n + k = (1*4 + 2)*4 + 3
        assert_eq!(field.as_slice()[27], 123.45);
    }

    #[test]
    fn test_plane_extraction() {
        let mut field = ScalarField::new(3);
        field.set(1, 0, 2, 7.0);
        field.set(0, 1, 2, 8.0);
        field.set(2, 1, 1, 9.0);

        let px = field.plane(Axis::X, 1);
        assert_eq!(px[2], 7.0); // j=0, k=2

        let py = field.plane(Axis::Y, 1);
        assert_eq!(py[2], 8.0); // i=0, k=2
        assert_eq!(py[2 * 3 + 1], 9.0); // i=2, k=1

        let pz = field.plane(Axis::Z, 2);
        assert_eq!(pz[3], 7.0); // i=1, j=0
    }

    #[test]
    fn test_min_max() {
        let mut field = ScalarField::new(3);
        field.set(0, 0, 0, -2.5);
        field.set(2, 2, 2, 4.0);
        assert_eq!(field.min(), -2.5);
        assert_eq!(field.max(), 4.0);
    }

    #[test]
    fn test_dataset_key() {
        assert_eq!(dataset_key(0, 0), "l0m0");
        assert_eq!(dataset_key(3, 2), "l3m2");
    }

    #[test]
    fn test_default_pairs_cover_all_orders() {
        let pairs = default_pairs();
        assert_eq!(pairs.len(), 10); // 1 + 2 + 3 + 4
        assert!(pairs.contains(&(3, 3)));
        assert!(pairs.iter().all(|&(l, m)| m <= l));
    }

    #[test]
    fn test_generate_and_lookup() {
        let grid = Grid::new(4);
        let fields = FieldCollection::generate(&grid, &default_pairs());
        assert_eq!(fields.len(), 10);
        assert_eq!(fields.edge(), 4);
        assert!(fields.get("l1m0").is_ok());
        assert_eq!(
            fields.get("nonexistent"),
            Err(VizError::InvalidDataset("nonexistent".to_string()))
        );
        // Sorted name listing
        let names = fields.names();
        assert_eq!(names.first(), Some(&"l0m0"));
        assert_eq!(names.last(), Some(&"l3m3"));
    }
}
