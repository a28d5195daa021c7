use std::f64::consts::PI;

pub const TAU: f64 = 2.0 * PI;

/// Arcseconds to radians.
pub const ARCSEC_TO_RAD: f64 = 4.848_136_811_095_359_935_899_141e-6;

/// Normalize an angle into `[-π, π)`.
#[inline]
pub fn anpm(a: f64) -> f64 {
    let mut w = a % TAU;
    if w.abs() >= PI {
        w -= TAU.copysign(a);
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anpm_wraps_into_range() {
        for a in [-20.0, -PI - 0.1, -1.0, 0.0, 1.0, PI + 0.1, 7.0, 100.0] {
            let w = anpm(a);
            assert!(w >= -PI && w < PI, "anpm({a}) = {w}");
            // Same direction on the circle.
            assert!((w.sin() - a.sin()).abs() < 1e-9);
            assert!((w.cos() - a.cos()).abs() < 1e-9);
        }
    }

    #[test]
    fn anpm_keeps_small_angles() {
        assert_eq!(anpm(0.5), 0.5);
        assert_eq!(anpm(-0.5), -0.5);
    }
}
