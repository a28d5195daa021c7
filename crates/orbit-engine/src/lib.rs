pub mod api;
pub mod assets;
pub mod core;
pub mod ephemeris;
pub mod error;
pub mod input;
pub mod math;
pub mod trajectory;

// Re-export key types at crate root for convenience
pub use api::config::PlaybackConfig;
pub use api::source::{
    load_sources, AnalyticSource, BodySource, Diagnostics, NamedSource, PositionSource,
    SampledSource, SourceSample, AU_KM,
};
pub use assets::scenario::{AnalyticBody, Scenario};
pub use crate::core::clock::{factor, rate_label, ClockSnapshot, SimClock, Tick};
pub use crate::core::time::FixedTimestep;
pub use ephemeris::{position_velocity, position_velocity_index, PlanStatus, Planet, PlanetState};
pub use error::{Error, Result};
pub use input::queue::{ClockCommand, CommandQueue};
pub use math::poly::evalpoly;
pub use trajectory::{Extrapolation, InterpolantSet, Method, Sample, Trajectory};

pub use glam::DVec3;
