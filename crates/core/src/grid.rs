//! Regular Cartesian coordinate mesh with derived spherical coordinates
//!
//! The grid underlies every generated field: six flat arrays of length n³
//! storing the Cartesian coordinates (x, y, z) of each sample point and
//! the derived spherical coordinates (r, theta, phi). All arrays share the
//! same row-major layout, so a field evaluated over the grid can be stored
//! as one more parallel array.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Immutable n×n×n coordinate mesh over `[-1, 1)` per axis.
///
/// Sample points are spaced `2/n` apart: the i-th coordinate along each
/// axis is `2*i/n - 1`, so index recovery from a coordinate is exactly
/// `round(c*n/2 + n/2)` (see [`Grid::coord_to_index`]). The upper domain
/// bound is therefore exclusive; the last sample sits at `1 - 2/n`.
///
/// # Spherical coordinate conventions
///
/// - `r` is the Euclidean distance from the origin.
/// - `theta` is the polar angle `acos(z/r)`, in `[0, π]`. At the origin
///   (r = 0) theta is defined as 0.
/// - `phi` is the azimuthal angle `atan2(y, x)` remapped into `[0, 2π)`.
///   Note this differs from the raw `atan2` range of `(-π, π]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    n: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    r: Vec<f64>,
    theta: Vec<f64>,
    phi: Vec<f64>,
}

impl Grid {
    /// Build the mesh for edge length `n`.
    ///
    /// Pure function of `n`: two grids built with the same `n` are
    /// bit-identical.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "Grid edge length must be positive");

        let cells = n * n * n;
        let mut x = Vec::with_capacity(cells);
        let mut y = Vec::with_capacity(cells);
        let mut z = Vec::with_capacity(cells);
        let mut r = Vec::with_capacity(cells);
        let mut theta = Vec::with_capacity(cells);
        let mut phi = Vec::with_capacity(cells);

        let coord = |i: usize| 2.0 * i as f64 / n as f64 - 1.0;

        for i in 0..n {
            let xv = coord(i);
            for j in 0..n {
                let yv = coord(j);
                for k in 0..n {
                    let zv = coord(k);
                    let rv = (xv * xv + yv * yv + zv * zv).sqrt();
                    // acos argument clamped against rounding just past ±1
                    let tv = if rv > 0.0 {
                        (zv / rv).clamp(-1.0, 1.0).acos()
                    } else {
                        0.0
                    };
                    let mut pv = yv.atan2(xv);
                    if pv < 0.0 {
                        pv += 2.0 * PI;
                    }
                    x.push(xv);
                    y.push(yv);
                    z.push(zv);
                    r.push(rv);
                    theta.push(tv);
                    phi.push(pv);
                }
            }
        }

        debug!(n, cells, "built coordinate grid");
        Grid {
            n,
            x,
            y,
            z,
            r,
            theta,
            phi,
        }
    }

    /// Edge length n (samples per axis)
    #[must_use]
    pub fn edge(&self) -> usize {
        self.n
    }

    /// Total number of sample points (n³)
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: a grid has at least one sample point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Flat row-major index for grid position (i, j, k)
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        assert!(
            i < self.n && j < self.n && k < self.n,
            "Grid indices out of bounds"
        );
        (i * self.n + j) * self.n + k
    }

    /// Cartesian sample point at grid position (i, j, k)
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn position(&self, i: usize, j: usize, k: usize) -> Vector3<f64> {
        let idx = self.index(i, j, k);
        Vector3::new(self.x[idx], self.y[idx], self.z[idx])
    }

    /// Nearest grid index along one axis for a coordinate in `[-1, 1]`.
    ///
    /// Computes `round(c*n/2 + n/2)` and clamps into `[0, n-1]`; the
    /// formula inverts the sample spacing exactly, so returned indices
    /// always land on grid planes.
    #[must_use]
    pub fn coord_to_index(&self, c: f64) -> usize {
        let n = self.n as f64;
        let idx = (c * n / 2.0 + n / 2.0).round();
        if idx <= 0.0 {
            0
        } else if idx >= n - 1.0 {
            self.n - 1
        } else {
            idx as usize
        }
    }

    /// Cartesian x coordinates, one per sample point
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Cartesian y coordinates, one per sample point
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Cartesian z coordinates, one per sample point
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Radial distances from the origin, one per sample point
    #[must_use]
    pub fn r(&self) -> &[f64] {
        &self.r
    }

    /// Polar angles in `[0, π]`, one per sample point
    #[must_use]
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Azimuthal angles in `[0, 2π)`, one per sample point
    #[must_use]
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }
}
