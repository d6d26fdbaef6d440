//! Annealing configuration and the geometric cooling law.

use crate::error::{Result, TspError};

/// Configuration for a simulated annealing run.
///
/// The temperature starts at `initial_temperature` and is multiplied by
/// `decay_factor` after every iteration; the run ends once it is no longer
/// above `stopping_temperature`.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_stopping_temperature(0.1)
///     .with_decay_factor(0.99);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.expected_iterations(), 688);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// The loop runs while the temperature is strictly above this value.
    pub stopping_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub decay_factor: f64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            stopping_temperature: 0.1,
            decay_factor: 0.99,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_stopping_temperature(mut self, t: f64) -> Self {
        self.stopping_temperature = t;
        self
    }

    pub fn with_decay_factor(mut self, factor: f64) -> Self {
        self.decay_factor = factor;
        self
    }

    /// Validates the configuration.
    ///
    /// A decay factor outside (0, 1) or an initial temperature not above the
    /// stopping temperature would make the loop either never end or never
    /// start, so both are rejected here.
    pub fn validate(&self) -> Result<()> {
        let Self {
            initial_temperature: initial,
            stopping_temperature: stopping,
            decay_factor: decay,
        } = *self;

        if !initial.is_finite() || initial <= 0.0 {
            return Err(TspError::invalid(format!(
                "initial_temperature must be positive and finite, got {initial}"
            )));
        }
        if !stopping.is_finite() || stopping <= 0.0 {
            return Err(TspError::invalid(format!(
                "stopping_temperature must be positive and finite, got {stopping}"
            )));
        }
        if stopping >= initial {
            return Err(TspError::invalid(format!(
                "stopping_temperature ({stopping}) must be below initial_temperature ({initial})"
            )));
        }
        if !(decay > 0.0 && decay < 1.0) {
            return Err(TspError::invalid(format!(
                "decay_factor must be in (0, 1), got {decay}"
            )));
        }
        Ok(())
    }

    /// Number of iterations a full run performs.
    ///
    /// Counts cooling steps from `initial_temperature` exactly as the run
    /// loop does, so rounding in the repeated products is accounted for.
    /// The closed form `ceil(ln(stopping / initial) / ln(decay_factor))`
    /// agrees except when the ratio is an exact power of the decay factor.
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub fn expected_iterations(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut iterations = 0usize;
        while temperature > self.stopping_temperature {
            temperature = self.cool(temperature);
            iterations += 1;
        }
        iterations
    }

    /// Temperature after one cooling step.
    #[inline]
    pub fn cool(&self, temperature: f64) -> f64 {
        temperature * self.decay_factor
    }
}
