use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::ephemeris::Planet;
use crate::error::{Error, Result};
use crate::trajectory::Trajectory;

/// Scenario data: named sampled trajectories plus optional analytic bodies.
/// Loaded from a JSON file at runtime. Maps are ordered so body order is stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Spacecraft trajectories, keyed by name (e.g. "S/C").
    #[serde(default)]
    pub trajectories: BTreeMap<String, Trajectory>,
    /// Sampled ephemerides of natural bodies (e.g. "moon").
    #[serde(default)]
    pub ephemerides: BTreeMap<String, Trajectory>,
    /// Bodies driven by the analytic planetary theory.
    #[serde(default)]
    pub planets: BTreeMap<String, AnalyticBody>,
}

/// A body placed by the analytic theory instead of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticBody {
    /// Which planet, by scenario name (e.g. "mars", "earth_barycenter").
    pub planet: Planet,
    /// Julian date (TDB) at simulated time 0.
    pub start_jd: f64,
}

impl Scenario {
    /// Parse a scenario from a JSON string and validate every trajectory.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, trajectory) in self.trajectories.iter().chain(&self.ephemerides) {
            trajectory.validate().map_err(|e| {
                log::warn!("trajectory {name:?} rejected: {e}");
                e
            })?;
        }
        Ok(())
    }

    /// Look up a sampled trajectory by name, spacecraft first, then ephemerides.
    pub fn trajectory(&self, name: &str) -> Result<&Trajectory> {
        self.trajectories
            .get(name)
            .or_else(|| self.ephemerides.get(name))
            .ok_or_else(|| Error::UnknownTrajectory(name.to_string()))
    }

    /// Playback span in simulated seconds, from the named (authoritative) trajectory.
    pub fn time_span_end(&self, name: &str) -> Result<f64> {
        Ok(self.trajectory(name)?.span_seconds())
    }

    /// Total number of bodies of all kinds.
    pub fn body_count(&self) -> usize {
        self.trajectories.len() + self.ephemerides.len() + self.planets.len()
    }
}
