pub mod scenario;

pub use scenario::{AnalyticBody, Scenario};
