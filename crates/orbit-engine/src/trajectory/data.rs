use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Time-sampled 3D quantity as supplied by the scenario loader.
///
/// Epochs are in days (Julian day or day offset), vectors in kilometers, using the
/// source axis convention. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub epochs: Vec<f64>,
    pub vectors: Vec<[f64; 3]>,
}

impl Trajectory {
    /// Build and validate in one step.
    pub fn new(epochs: Vec<f64>, vectors: Vec<[f64; 3]>) -> Result<Self> {
        let trajectory = Self { epochs, vectors };
        trajectory.validate()?;
        Ok(trajectory)
    }

    /// Equal lengths, at least two samples, strictly increasing epochs.
    pub fn validate(&self) -> Result<()> {
        check_samples(&self.epochs, self.vectors.len(), 2)
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// First epoch. Panics on an empty trajectory; validated ones have two or more.
    pub fn first_epoch(&self) -> f64 {
        self.epochs[0]
    }

    pub fn last_epoch(&self) -> f64 {
        self.epochs[self.epochs.len() - 1]
    }

    /// Covered time span in whole seconds, rounded.
    pub fn span_seconds(&self) -> f64 {
        ((self.last_epoch() - self.first_epoch()) * 86400.0).round()
    }
}

/// Shared sample checks: `values` entries per epoch, at least `min` samples,
/// strictly increasing epochs (NaN fails).
pub(crate) fn check_samples(epochs: &[f64], values: usize, min: usize) -> Result<()> {
    if epochs.len() != values {
        return Err(Error::LengthMismatch {
            epochs: epochs.len(),
            vectors: values,
        });
    }
    if epochs.len() < min {
        return Err(Error::TooFewSamples {
            found: epochs.len(),
        });
    }
    if let Some(index) = epochs.windows(2).position(|w| !(w[1] > w[0])) {
        return Err(Error::NonIncreasingEpochs { index: index + 1 });
    }
    Ok(())
}
