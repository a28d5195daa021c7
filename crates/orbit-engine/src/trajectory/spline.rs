// trajectory/spline.rs
//
// One-dimensional interpolants over irregularly spaced knots.
// Every method is stored as a piecewise polynomial in local time `x - knot[i]`.
// No dependencies on clock or scenario.

use serde::{Deserialize, Serialize};

use super::data::check_samples;
use crate::error::Result;
use crate::math::horner;

/// Interpolation method for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Local cubic with Akima slopes. Needs 5 samples.
    #[default]
    Akima,
    /// Natural cubic spline. Needs 3 samples.
    Cubic,
    /// Piecewise linear. Needs 2 samples.
    Linear,
    /// Nearest sample. Needs 1 sample.
    Nearest,
}

impl Method {
    /// Minimum number of samples the method can be built from.
    pub fn min_samples(self) -> usize {
        match self {
            Method::Akima => 5,
            Method::Cubic => 3,
            Method::Linear => 2,
            Method::Nearest => 1,
        }
    }

    /// Next simpler method in the fallback chain.
    pub fn simpler(self) -> Option<Method> {
        match self {
            Method::Akima => Some(Method::Cubic),
            Method::Cubic => Some(Method::Linear),
            Method::Linear => Some(Method::Nearest),
            Method::Nearest => None,
        }
    }

    /// Walk down the fallback chain until the method fits `n` samples.
    pub fn resolve(self, n: usize) -> Option<Method> {
        let mut method = self;
        while n < method.min_samples() {
            method = method.simpler()?;
        }
        Some(method)
    }
}

/// A built interpolant. Knots are strictly increasing; segment `i` covers
/// `[knots[i], knots[i+1]]` and holds ascending-degree coefficients in `x - knots[i]`.
#[derive(Debug, Clone)]
pub struct Spline {
    method: Method,
    knots: Vec<f64>,
    segments: Vec<[f64; 4]>,
}

impl Spline {
    /// Build with `method`, falling back to simpler methods when there are too few
    /// samples. Knots must be strictly increasing, one per value, at least one.
    pub fn build(method: Method, knots: &[f64], values: &[f64]) -> Result<Self> {
        check_samples(knots, values.len(), 1)?;
        let n = knots.len();
        let resolved = method.resolve(n).unwrap_or(Method::Nearest);
        if resolved != method {
            log::debug!("{:?} needs {} samples, have {n}; using {:?}", method, method.min_samples(), resolved);
        }
        let segments = match resolved {
            Method::Akima => akima(knots, values),
            Method::Cubic => natural_cubic(knots, values),
            Method::Linear => linear(knots, values),
            Method::Nearest => values.iter().map(|&y| [y, 0.0, 0.0, 0.0]).collect(),
        };
        Ok(Self {
            method: resolved,
            knots: knots.to_vec(),
            segments,
        })
    }

    /// The method actually used after fallback.
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// `(first, last)` knot.
    pub fn domain(&self) -> (f64, f64) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// Evaluate at `x`. Outside the knots the boundary segment is extrapolated.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.knots.len();
        if n == 1 {
            return self.segments[0][0];
        }
        let i = self.knots.partition_point(|&k| k <= x).clamp(1, n - 1) - 1;
        let t = x - self.knots[i];

        if self.method == Method::Nearest {
            let w = self.knots[i + 1] - self.knots[i];
            let j = if t >= 0.5 * w { i + 1 } else { i };
            return self.segments[j][0];
        }

        horner(t, &self.segments[i])
    }
}

/// Cubic Hermite segments from values and first derivatives.
fn hermite(x: &[f64], y: &[f64], fd: &[f64]) -> Vec<[f64; 4]> {
    (0..x.len() - 1)
        .map(|i| {
            let w = x[i + 1] - x[i];
            let w2 = w * w;
            let (yv, yv_p) = (y[i], y[i + 1]);
            let (fd_i, fd_p) = (fd[i], fd[i + 1]);
            [
                yv,
                fd_i,
                (3.0 * (yv_p - yv) / w - 2.0 * fd_i - fd_p) / w,
                (2.0 * (yv - yv_p) / w + fd_i + fd_p) / w2,
            ]
        })
        .collect()
}

/// Derivative at `x[at]` of the parabola through samples `s0`, `s1`, `s2`.
fn three_point_derivative(x: &[f64], y: &[f64], at: usize, s0: usize, s1: usize, s2: usize) -> f64 {
    let (y0, y1, y2) = (y[s0], y[s1], y[s2]);
    let t = x[at] - x[s0];
    let t1 = x[s1] - x[s0];
    let t2 = x[s2] - x[s0];
    let a = (y2 - y0 - (t2 / t1 * (y1 - y0))) / (t2 * t2 - t1 * t2);
    let b = (y1 - y0 - a * t1 * t1) / t1;
    2.0 * a * t + b
}

/// Akima (1970): slopes weighted by neighbouring divided-difference jumps, so each
/// segment depends only on nearby samples. End slopes come from three-point parabolas.
fn akima(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    let n = x.len();
    let d: Vec<f64> = (0..n - 1)
        .map(|i| (y[i + 1] - y[i]) / (x[i + 1] - x[i]))
        .collect();
    let mut w = vec![0.0; n - 1];
    for i in 1..n - 1 {
        w[i] = (d[i] - d[i - 1]).abs();
    }

    let mut fd = vec![0.0; n];
    for i in 2..n - 2 {
        let w_p = w[i + 1];
        let w_m = w[i - 1];
        fd[i] = if w_p.abs() < f64::EPSILON && w_m.abs() < f64::EPSILON {
            let xv = x[i];
            let xv_p = x[i + 1];
            let xv_m = x[i - 1];
            ((xv_p - xv) * d[i - 1] + (xv - xv_m) * d[i]) / (xv_p - xv_m)
        } else {
            (w_p * d[i - 1] + w_m * d[i]) / (w_p + w_m)
        };
    }
    fd[0] = three_point_derivative(x, y, 0, 0, 1, 2);
    fd[1] = three_point_derivative(x, y, 1, 0, 1, 2);
    fd[n - 2] = three_point_derivative(x, y, n - 2, n - 3, n - 2, n - 1);
    fd[n - 1] = three_point_derivative(x, y, n - 1, n - 3, n - 2, n - 1);

    hermite(x, y, &fd)
}

/// Natural cubic spline (zero second derivative at both ends).
fn natural_cubic(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    let n = x.len() - 1;
    let h: Vec<f64> = (0..n).map(|i| x[i + 1] - x[i]).collect();

    let mut mu = vec![0.0; n];
    let mut z = vec![0.0; n + 1];
    for i in 1..n {
        let g = 2.0 * (x[i + 1] - x[i - 1]) - h[i - 1] * mu[i - 1];
        mu[i] = h[i] / g;
        z[i] = (3.0 * (y[i + 1] * h[i - 1] - y[i] * (x[i + 1] - x[i - 1]) + y[i - 1] * h[i])
            / (h[i - 1] * h[i])
            - h[i - 1] * z[i - 1])
            / g;
    }

    let mut segments = vec![[0.0; 4]; n];
    let mut c_next = 0.0;
    for j in (0..n).rev() {
        let c = z[j] - mu[j] * c_next;
        let b = (y[j + 1] - y[j]) / h[j] - h[j] * (c_next + 2.0 * c) / 3.0;
        let d = (c_next - c) / (3.0 * h[j]);
        segments[j] = [y[j], b, c, d];
        c_next = c;
    }
    segments
}

fn linear(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    (0..x.len() - 1)
        .map(|i| [y[i], (y[i + 1] - y[i]) / (x[i + 1] - x[i]), 0.0, 0.0])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * (1.0 + b.abs())
    }

    #[test]
    fn rejects_malformed_knots() {
        use crate::error::Error;
        assert!(matches!(
            Spline::build(Method::Akima, &[], &[]),
            Err(Error::TooFewSamples { found: 0 })
        ));
        assert!(matches!(
            Spline::build(Method::Linear, &[0.0, 1.0, 2.0], &[0.0, 1.0]),
            Err(Error::LengthMismatch { epochs: 3, vectors: 2 })
        ));
        assert!(matches!(
            Spline::build(Method::Cubic, &[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]),
            Err(Error::NonIncreasingEpochs { index: 2 })
        ));
    }

    #[test]
    fn single_knot_is_constant() {
        let s = Spline::build(Method::Akima, &[5.0], &[3.0]).unwrap();
        assert_eq!(s.method(), Method::Nearest);
        assert_eq!(s.evaluate(-100.0), 3.0);
        assert_eq!(s.domain(), (5.0, 5.0));
    }

    #[test]
    fn fallback_chain() {
        assert_eq!(Method::Akima.resolve(10), Some(Method::Akima));
        assert_eq!(Method::Akima.resolve(4), Some(Method::Cubic));
        assert_eq!(Method::Akima.resolve(2), Some(Method::Linear));
        assert_eq!(Method::Cubic.resolve(1), Some(Method::Nearest));
        assert_eq!(Method::Akima.resolve(0), None);
    }

    #[test]
    fn exact_at_knots_for_every_method() {
        let x = [0.0, 0.3, 1.1, 1.2, 2.5, 4.0, 4.1];
        let y = [1.0, -2.0, 0.5, 0.7, 3.0, -1.0, 0.0];
        for method in [Method::Akima, Method::Cubic, Method::Linear, Method::Nearest] {
            let s = Spline::build(method, &x, &y).unwrap();
            assert_eq!(s.method(), method);
            for (xi, yi) in x.iter().zip(y) {
                let v = s.evaluate(*xi);
                assert!(close(v, yi, 1e-9), "{method:?} at {xi}: {v} != {yi}");
            }
        }
    }

    #[test]
    fn too_few_points_falls_back() {
        let s = Spline::build(Method::Akima, &[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(s.method(), Method::Cubic);
        let s = Spline::build(Method::Akima, &[0.0, 1.0], &[0.0, 2.0]).unwrap();
        assert_eq!(s.method(), Method::Linear);
        assert!(close(s.evaluate(0.25), 0.5, 1e-12));
    }

    #[test]
    fn akima_reproduces_a_line() {
        let x = [0.0, 1.0, 2.5, 3.0, 5.0, 8.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v - 1.0).collect();
        let s = Spline::build(Method::Akima, &x, &y).unwrap();
        for q in [0.5, 1.7, 2.9, 4.2, 7.5] {
            assert!(close(s.evaluate(q), 2.0 * q - 1.0, 1e-9), "at {q}");
        }
    }

    #[test]
    fn akima_does_not_ring_on_a_step() {
        // Flat, jump, flat: Akima stays within the data range.
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let y = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        let s = Spline::build(Method::Akima, &x, &y).unwrap();
        let mut q = 0.0;
        while q <= 7.0 {
            let v = s.evaluate(q);
            assert!(v >= -1e-9 && v <= 1.0 + 1e-9, "overshoot {v} at {q}");
            q += 0.05;
        }
        // Flat region stays flat.
        assert!(s.evaluate(1.5).abs() < 1e-12);
    }

    #[test]
    fn natural_cubic_through_three_points_is_smooth() {
        let s = Spline::build(Method::Cubic, &[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        // Symmetric data, peak at the middle knot.
        assert!(close(s.evaluate(0.5), s.evaluate(1.5), 1e-12));
        assert!(s.evaluate(0.5) > 0.5);
    }

    #[test]
    fn nearest_switches_at_midpoint() {
        let s = Spline::build(Method::Nearest, &[0.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(s.evaluate(0.9), 10.0);
        assert_eq!(s.evaluate(1.1), 20.0);
        assert_eq!(s.evaluate(2.6), 30.0);
    }

    #[test]
    fn evaluates_outside_domain_from_boundary_segment() {
        let s = Spline::build(Method::Linear, &[0.0, 1.0, 2.0], &[0.0, 1.0, 3.0]).unwrap();
        assert!(close(s.evaluate(-1.0), -1.0, 1e-12));
        assert!(close(s.evaluate(3.0), 5.0, 1e-12));
        assert_eq!(s.domain(), (0.0, 2.0));
    }
}
