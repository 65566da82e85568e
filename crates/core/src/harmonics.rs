//! Spherical harmonic magnitude evaluation
//!
//! Evaluates |Y_l^m(theta, phi)| with the orthonormal (quantum-mechanics)
//! normalization. The azimuthal factor e^{imφ} has unit modulus, so the
//! magnitude depends on theta alone:
//!
//! |Y_l^m| = sqrt((2l+1)/(4π) · (l-m)!/(l+m)!) · |P_l^m(cos theta)|
//!
//! P_l^m is the associated Legendre function with the Condon-Shortley
//! phase, evaluated by the standard three-step recurrence (diagonal
//! seed, first off-diagonal, then upward in degree).

use std::f64::consts::PI;

/// Associated Legendre function P_l^m(x) for 0 <= m <= l, |x| <= 1.
///
/// Includes the Condon-Shortley phase (-1)^m. The sign is irrelevant to
/// magnitude computation but kept so individual values match standard
/// tables.
///
/// # Panics
///
/// Panics if `m > l`.
#[must_use]
pub fn associated_legendre(l: u32, m: u32, x: f64) -> f64 {
    assert!(m <= l, "Legendre order must not exceed degree");

    // P_m^m = (-1)^m (2m-1)!! (1-x²)^{m/2}
    let mut pmm = 1.0;
    if m > 0 {
        let somx2 = ((1.0 - x) * (1.0 + x)).sqrt();
        let mut fact = 1.0;
        for _ in 0..m {
            pmm *= -fact * somx2;
            fact += 2.0;
        }
    }
    if l == m {
        return pmm;
    }

    // P_{m+1}^m = x (2m+1) P_m^m
    let pmmp1 = x * (2.0 * f64::from(m) + 1.0) * pmm;
    if l == m + 1 {
        return pmmp1;
    }

    // (l-m) P_l^m = x (2l-1) P_{l-1}^m - (l+m-1) P_{l-2}^m
    let mf = f64::from(m);
    let mut p_prev = pmm;
    let mut p_curr = pmmp1;
    for ll in (m + 2)..=l {
        let lf = f64::from(ll);
        let p_next = (x * (2.0 * lf - 1.0) * p_curr - (lf + mf - 1.0) * p_prev) / (lf - mf);
        p_prev = p_curr;
        p_curr = p_next;
    }
    p_curr
}

/// Orthonormal normalization factor sqrt((2l+1)/(4π) · (l-m)!/(l+m)!)
fn normalization(l: u32, m: u32) -> f64 {
    // (l-m)!/(l+m)! as a running product; degrees here are single digits
    // so no overflow concern
    let mut ratio = 1.0;
    for k in (l - m + 1)..=(l + m) {
        ratio /= f64::from(k);
    }
    ((2.0 * f64::from(l) + 1.0) / (4.0 * PI) * ratio).sqrt()
}

/// Magnitude |Y_l^m| of the spherical harmonic at polar angle `theta`.
///
/// Independent of the azimuthal angle (|e^{imφ}| = 1) and always
/// non-negative. For m = 0 this reduces to a normalized Legendre
/// polynomial in cos(theta) with no azimuthal dependence at all.
///
/// # Panics
///
/// Panics if `m > l`.
#[must_use]
pub fn magnitude(l: u32, m: u32, theta: f64) -> f64 {
    normalization(l, m) * associated_legendre(l, m, theta.cos()).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_legendre_low_orders() {
        // P_0^0 = 1, P_1^0 = x, P_1^1 = -sqrt(1-x²), P_2^0 = (3x²-1)/2
        let x = 0.3;
        assert_relative_eq!(associated_legendre(0, 0, x), 1.0);
        assert_relative_eq!(associated_legendre(1, 0, x), x);
        assert_relative_eq!(
            associated_legendre(1, 1, x),
            -(1.0 - x * x).sqrt(),
            epsilon = 1e-14
        );
        assert_relative_eq!(
            associated_legendre(2, 0, x),
            (3.0 * x * x - 1.0) / 2.0,
            epsilon = 1e-14
        );
        // P_3^2 = 15x(1-x²)
        assert_relative_eq!(
            associated_legendre(3, 2, x),
            15.0 * x * (1.0 - x * x),
            epsilon = 1e-13
        );
    }

    #[test]
    fn test_y00_is_constant() {
        let expected = 1.0 / (4.0 * PI).sqrt();
        for theta in [0.0, 0.7, PI / 2.0, PI] {
            assert_relative_eq!(magnitude(0, 0, theta), expected, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_y10_north_pole() {
        // |Y_1^0(0)| = sqrt(3/(4π)) ≈ 0.48860251
        let expected = (3.0 / (4.0 * PI)).sqrt();
        assert_relative_eq!(magnitude(1, 0, 0.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_y11_poles_vanish() {
        // |Y_1^1| ∝ sin(theta): zero at both poles, maximal at equator
        assert_relative_eq!(magnitude(1, 1, 0.0), 0.0, epsilon = 1e-14);
        assert_relative_eq!(magnitude(1, 1, PI), 0.0, epsilon = 1e-12);
        let equator = magnitude(1, 1, PI / 2.0);
        assert_relative_eq!(equator, (3.0 / (8.0 * PI)).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_magnitude_non_negative() {
        for l in 0..=4u32 {
            for m in 0..=l {
                for step in 0..=40 {
                    let theta = PI * f64::from(step) / 40.0;
                    assert!(magnitude(l, m, theta) >= 0.0);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "order must not exceed degree")]
    fn test_order_above_degree_panics() {
        let _ = associated_legendre(1, 2, 0.0);
    }
}
