//! Annealing schedule configuration.

use crate::error::{PartitionError, Result};

/// Geometric cooling schedule for the sign-flip annealer.
///
/// The temperature starts at `initial_temperature`, is multiplied by
/// `cooling_rate` after every step, and the run ends once it is no longer
/// above `min_temperature`. One neighbor is evaluated per temperature.
///
/// # Examples
///
/// ```
/// use u_partition::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1.0)
///     .with_cooling_rate(0.5);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.expected_steps(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Must be positive and finite.
    ///
    /// A value at or below `min_temperature` disables annealing.
    pub initial_temperature: f64,

    /// Geometric factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Stopping temperature.
    pub min_temperature: f64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            min_temperature: 1e-6,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(PartitionError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(PartitionError::InvalidMinTemperature(self.min_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(PartitionError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }

    /// Closed-form step count `ceil(ln(min / initial) / ln(rate))`.
    ///
    /// The annealer checks the temperature at runtime, so floating-point
    /// rounding can make the realized count differ from this by one.
    pub fn expected_steps(&self) -> usize {
        if self.initial_temperature <= self.min_temperature {
            return 0;
        }
        let steps = (self.min_temperature / self.initial_temperature).ln() / self.cooling_rate.ln();
        steps.ceil().max(0.0) as usize
    }
}
