// math/poly.rs
//
// Polynomial evaluation by Horner's rule.

use crate::error::{Error, Result};

/// Evaluate `p[0] + p[1]*x + ... + p[n-1]*x^(n-1)`.
///
/// Coefficients are in ascending degree. An empty list is an error rather than
/// an implicit zero polynomial.
pub fn evalpoly(x: f64, p: &[f64]) -> Result<f64> {
    if p.is_empty() {
        return Err(Error::EmptyPolynomial);
    }
    Ok(horner(x, p))
}

/// Horner's rule without the emptiness check. Returns 0.0 for an empty slice.
///
/// Used on the hot path (spline segments, element tables) where the
/// coefficient count is fixed by construction.
#[inline]
pub fn horner(x: f64, p: &[f64]) -> f64 {
    p.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_at_two() {
        // 1 + 2*2 + 3*4
        assert_eq!(evalpoly(2.0, &[1.0, 2.0, 3.0]).unwrap(), 17.0);
    }

    #[test]
    fn constant_ignores_x() {
        for x in [-1e6, -1.0, 0.0, 0.5, 42.0] {
            assert_eq!(evalpoly(x, &[7.25]).unwrap(), 7.25);
        }
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(evalpoly(1.0, &[]), Err(Error::EmptyPolynomial)));
    }

    #[test]
    fn matches_naive_power_sum() {
        let p = [0.3, -1.2, 0.05, 2.0, -0.7];
        let x = 1.37_f64;
        let naive: f64 = p.iter().enumerate().map(|(i, c)| c * x.powi(i as i32)).sum();
        let fast = evalpoly(x, &p).unwrap();
        assert!((naive - fast).abs() < 1e-12, "naive={naive} horner={fast}");
    }
}
