pub mod clock;
pub mod time;

pub use clock::{factor, rate_label, ClockSnapshot, SimClock, Tick};
pub use time::FixedTimestep;
