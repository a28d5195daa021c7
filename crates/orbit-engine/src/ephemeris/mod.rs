// ephemeris/mod.rs
//
// Analytic planetary ephemeris. Stateless and reentrant.

pub mod plan94;
pub mod planet;
pub mod tables;

pub use plan94::{
    julian_millennia, position_velocity, position_velocity_index, semi_major_axis,
    solve_kepler, KeplerSolution, PlanStatus, PlanetState, J2000,
};
pub use planet::Planet;
