use thiserror::Error;

/// Load-time and argument errors. Advisory runtime conditions (extrapolated
/// queries, Kepler non-convergence, remote dates) are reported as values instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,
    #[error("trajectory has {epochs} epochs but {vectors} vectors")]
    LengthMismatch { epochs: usize, vectors: usize },
    #[error("trajectory needs at least 2 samples, found {found}")]
    TooFewSamples { found: usize },
    #[error("trajectory epochs must be strictly increasing (at index {index})")]
    NonIncreasingEpochs { index: usize },
    #[error("planet index {0} is outside 1..=8")]
    InvalidPlanet(i32),
    #[error("unknown planet name: {0}")]
    UnknownPlanet(String),
    #[error("trajectory not found: {0}")]
    UnknownTrajectory(String),
    #[error("invalid playback config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
