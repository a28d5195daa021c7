// trajectory/interpolant.rs
//
// Continuous 3D position from a sampled trajectory: three independent splines
// (one per render axis) over the shared epoch array.
//
// Usage:
//   let set = InterpolantSet::build(&trajectory, Method::Akima)?;
//   let pos = set.evaluate(set.epoch_at(clock.time()));

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::data::Trajectory;
use super::spline::{Method, Spline};
use crate::error::Result;

/// Kilometers to meters.
pub const KM_TO_M: f64 = 1e3;

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Source vector (km, source axes) to render frame (m, renderer axes).
///
/// The renderer's up axis is the source's third component, so components 2
/// and 3 swap.
#[inline]
pub fn to_render_frame(v: [f64; 3]) -> DVec3 {
    DVec3::new(v[0], v[2], v[1]) * KM_TO_M
}

/// What to do with a query epoch outside the sampled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Hold the boundary sample.
    #[default]
    Clamp,
    /// Continue the boundary segment's polynomial.
    Extrapolate,
}

/// One evaluated position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: DVec3,
    /// The query epoch was outside the sampled range.
    pub extrapolated: bool,
}

/// Read-only interpolants derived from one trajectory. Rebuild on change.
#[derive(Debug, Clone)]
pub struct InterpolantSet {
    x: Spline,
    y: Spline,
    z: Spline,
    vectors: Vec<DVec3>,
    extrapolation: Extrapolation,
}

impl InterpolantSet {
    /// Validate the trajectory, transform it to the render frame, build one spline per axis.
    pub fn build(trajectory: &Trajectory, method: Method) -> Result<Self> {
        trajectory.validate()?;

        let vectors: Vec<DVec3> = trajectory.vectors.iter().copied().map(to_render_frame).collect();
        let xs: Vec<f64> = vectors.iter().map(|v| v.x).collect();
        let ys: Vec<f64> = vectors.iter().map(|v| v.y).collect();
        let zs: Vec<f64> = vectors.iter().map(|v| v.z).collect();

        let epochs = &trajectory.epochs;
        Ok(Self {
            x: Spline::build(method, epochs, &xs)?,
            y: Spline::build(method, epochs, &ys)?,
            z: Spline::build(method, epochs, &zs)?,
            vectors,
            extrapolation: Extrapolation::default(),
        })
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// The method actually used after fallback. Identical for all three axes.
    pub fn method(&self) -> Method {
        self.x.method()
    }

    pub fn epochs(&self) -> &[f64] {
        self.x.knots()
    }

    /// `(first, last)` sampled epoch.
    pub fn domain(&self) -> (f64, f64) {
        self.x.domain()
    }

    /// Query epoch for `sim_seconds` of elapsed simulated time.
    pub fn epoch_at(&self, sim_seconds: f64) -> f64 {
        self.domain().0 + sim_seconds / SECONDS_PER_DAY
    }

    /// Render-frame sample vectors, for path lines.
    pub fn vectors(&self) -> &[DVec3] {
        &self.vectors
    }

    /// Position at `epoch`, with out-of-range queries flagged.
    pub fn sample(&self, epoch: f64) -> Sample {
        let (lo, hi) = self.domain();
        let extrapolated = epoch < lo || epoch > hi;
        let query = match self.extrapolation {
            Extrapolation::Clamp => epoch.clamp(lo, hi),
            Extrapolation::Extrapolate => epoch,
        };
        if extrapolated {
            log::trace!("epoch {epoch} outside [{lo}, {hi}], {:?}", self.extrapolation);
        }
        Sample {
            position: DVec3::new(
                self.x.evaluate(query),
                self.y.evaluate(query),
                self.z.evaluate(query),
            ),
            extrapolated,
        }
    }

    /// Position at `epoch`.
    pub fn evaluate(&self, epoch: f64) -> DVec3 {
        self.sample(epoch).position
    }
}
