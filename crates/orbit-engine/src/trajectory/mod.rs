// trajectory/mod.rs
//
// Sampled trajectories and their continuous interpolants.

pub mod data;
pub mod interpolant;
pub mod spline;

pub use data::Trajectory;
pub use interpolant::{
    to_render_frame, Extrapolation, InterpolantSet, Sample, KM_TO_M, SECONDS_PER_DAY,
};
pub use spline::{Method, Spline};
