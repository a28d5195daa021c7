use glam::DVec3;

use crate::api::config::PlaybackConfig;
use crate::assets::scenario::{AnalyticBody, Scenario};
use crate::ephemeris::{position_velocity, PlanStatus, Planet};
use crate::error::Result;
use crate::trajectory::{
    to_render_frame, InterpolantSet, Trajectory, SECONDS_PER_DAY,
};

/// Kilometers per astronomical unit (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Position of one body at one simulated time, in the render frame (meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSample {
    pub position: DVec3,
    /// Query fell outside the source's valid range (extrapolated or clamped).
    pub out_of_domain: bool,
    /// Kepler's equation did not converge. Only analytic sources set this.
    pub not_converged: bool,
}

/// The common "simulated time → position" contract of every body source.
pub trait PositionSource {
    /// Position at `sim_seconds` of elapsed simulated time.
    fn position_at(&self, sim_seconds: f64) -> SourceSample;
}

/// A body driven by interpolated samples.
#[derive(Debug, Clone)]
pub struct SampledSource {
    interpolants: InterpolantSet,
}

impl SampledSource {
    pub fn new(interpolants: InterpolantSet) -> Self {
        Self { interpolants }
    }

    pub fn build(trajectory: &Trajectory, config: &PlaybackConfig) -> Result<Self> {
        let interpolants = InterpolantSet::build(trajectory, config.interpolation)?
            .with_extrapolation(config.extrapolation);
        Ok(Self::new(interpolants))
    }

    pub fn interpolants(&self) -> &InterpolantSet {
        &self.interpolants
    }
}

impl PositionSource for SampledSource {
    fn position_at(&self, sim_seconds: f64) -> SourceSample {
        let sample = self.interpolants.sample(self.interpolants.epoch_at(sim_seconds));
        SourceSample {
            position: sample.position,
            out_of_domain: sample.extrapolated,
            not_converged: false,
        }
    }
}

/// A body driven by the analytic planetary theory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticSource {
    pub planet: Planet,
    /// Julian date at simulated time 0.
    pub start_jd: f64,
}

impl AnalyticSource {
    pub fn new(planet: Planet, start_jd: f64) -> Self {
        Self { planet, start_jd }
    }
}

impl From<AnalyticBody> for AnalyticSource {
    fn from(body: AnalyticBody) -> Self {
        Self::new(body.planet, body.start_jd)
    }
}

impl PositionSource for AnalyticSource {
    fn position_at(&self, sim_seconds: f64) -> SourceSample {
        // Whole start date in part 1, elapsed days in part 2.
        let state = position_velocity(self.start_jd, sim_seconds / SECONDS_PER_DAY, self.planet);
        let km = state.position * AU_KM;
        SourceSample {
            position: to_render_frame(km.to_array()),
            out_of_domain: state.status == PlanStatus::RemoteDate,
            not_converged: state.status == PlanStatus::NotConverged,
        }
    }
}

/// Either kind of source, chosen per body.
#[derive(Debug, Clone)]
pub enum BodySource {
    Sampled(SampledSource),
    Analytic(AnalyticSource),
}

impl BodySource {
    /// Render-frame sample points for path drawing. Empty for analytic bodies.
    pub fn path(&self) -> &[DVec3] {
        match self {
            BodySource::Sampled(s) => s.interpolants().vectors(),
            BodySource::Analytic(_) => &[],
        }
    }
}

impl PositionSource for BodySource {
    fn position_at(&self, sim_seconds: f64) -> SourceSample {
        match self {
            BodySource::Sampled(s) => s.position_at(sim_seconds),
            BodySource::Analytic(a) => a.position_at(sim_seconds),
        }
    }
}

/// A named body source.
#[derive(Debug, Clone)]
pub struct NamedSource {
    pub name: String,
    pub source: BodySource,
}

/// Build one source per scenario body: trajectories, then ephemerides, then planets.
/// Fails on the first malformed trajectory.
pub fn load_sources(scenario: &Scenario, config: &PlaybackConfig) -> Result<Vec<NamedSource>> {
    let mut sources = Vec::with_capacity(scenario.body_count());
    for (name, trajectory) in scenario.trajectories.iter().chain(&scenario.ephemerides) {
        let sampled = SampledSource::build(trajectory, config)?;
        log::debug!(
            "{name}: {} samples, {:?}",
            trajectory.len(),
            sampled.interpolants().method()
        );
        sources.push(NamedSource {
            name: name.clone(),
            source: BodySource::Sampled(sampled),
        });
    }
    for (name, body) in &scenario.planets {
        sources.push(NamedSource {
            name: name.clone(),
            source: BodySource::Analytic((*body).into()),
        });
    }
    Ok(sources)
}

/// Running counts of advisory conditions seen while sampling sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub samples: u64,
    pub out_of_domain: u64,
    pub not_converged: u64,
}

impl Diagnostics {
    pub fn record(&mut self, sample: &SourceSample) {
        self.samples += 1;
        if sample.out_of_domain {
            self.out_of_domain += 1;
        }
        if sample.not_converged {
            self.not_converged += 1;
        }
    }
}
