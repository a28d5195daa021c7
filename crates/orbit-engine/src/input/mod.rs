pub mod queue;

pub use queue::{ClockCommand, CommandQueue};
