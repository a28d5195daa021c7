// math/mod.rs
//
// Small numeric helpers shared by the ephemeris and trajectory modules.

pub mod angle;
pub mod poly;

pub use angle::{anpm, ARCSEC_TO_RAD, TAU};
pub use poly::{evalpoly, horner};
