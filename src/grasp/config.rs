//! GRASP configuration.

use crate::construct::check_alpha;
use crate::error::{PartitionError, Result};
use crate::sa::AnnealConfig;

/// Configuration for the GRASP restart driver.
///
/// # Examples
///
/// ```
/// use u_partition::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_alpha(0.5)
///     .with_iterations(200)
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.99)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// RCL width in `[0, 1]`. 0 = greedy, 1 = fully randomized.
    pub alpha: f64,

    /// Number of independent (construct, refine) trials.
    pub iterations: usize,

    /// Annealing schedule applied to every trial.
    pub anneal: AnnealConfig,

    /// Seed of the single random stream shared by all trials.
    ///
    /// `None` draws a fresh seed, which is reported in the result.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            iterations: 100,
            anneal: AnnealConfig::default(),
            seed: None,
        }
    }
}

impl GraspConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_anneal(mut self, anneal: AnnealConfig) -> Self {
        self.anneal = anneal;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.anneal.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.anneal.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.anneal.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_alpha(self.alpha)?;
        if self.iterations == 0 {
            return Err(PartitionError::ZeroIterations);
        }
        self.anneal.validate()
    }
}
