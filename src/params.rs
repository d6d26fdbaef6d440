//! Run parameters and their validation.
//!
//! [`TspParams`] is the flat bundle a front end collects (area size, city
//! count, cooling parameters, optional seed). Text input is parsed with
//! [`TspParams::parse`]; anything non-numeric or out of range is rejected
//! before a run starts.

use crate::error::{Result, TspError};
use crate::sa::AnnealConfig;
use std::str::FromStr;

/// Default area width, in pixels.
pub const DEFAULT_WIDTH: u32 = 640;
/// Default area height, in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;

/// Everything needed to generate an instance and anneal it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspParams {
    pub width: u32,
    pub height: u32,
    pub city_count: usize,
    pub initial_temperature: f64,
    pub stopping_temperature: f64,
    pub decay_factor: f64,
    /// Seed for the run's random stream. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for TspParams {
    fn default() -> Self {
        let anneal = AnnealConfig::default();
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            city_count: 20,
            initial_temperature: anneal.initial_temperature,
            stopping_temperature: anneal.stopping_temperature,
            decay_factor: anneal.decay_factor,
            seed: None,
        }
    }
}

impl TspParams {
    /// Parses the text fields of a parameter form.
    ///
    /// Surrounding whitespace is ignored. An empty or blank `seed` means
    /// "no seed".
    ///
    /// # Errors
    /// [`TspError::InvalidParameter`] naming the first field that is not a
    /// valid number, or the first range violation found by
    /// [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::params::TspParams;
    ///
    /// let params =
    ///     TspParams::parse("640", "480", "25", "100", "0.1", "0.995", Some("7")).unwrap();
    /// assert_eq!(params.city_count, 25);
    /// assert_eq!(params.seed, Some(7));
    ///
    /// assert!(TspParams::parse("640", "abc", "25", "100", "0.1", "0.995", None).is_err());
    /// ```
    pub fn parse(
        width: &str,
        height: &str,
        city_count: &str,
        initial_temperature: &str,
        stopping_temperature: &str,
        decay_factor: &str,
        seed: Option<&str>,
    ) -> Result<Self> {
        let seed = match seed.map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(parse_field::<u64>("seed", text)?),
        };
        let params = Self {
            width: parse_field("width", width)?,
            height: parse_field("height", height)?,
            city_count: parse_field("city count", city_count)?,
            initial_temperature: parse_field("initial temperature", initial_temperature)?,
            stopping_temperature: parse_field("stopping temperature", stopping_temperature)?,
            decay_factor: parse_field("temperature decay rate", decay_factor)?,
            seed,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every field.
    ///
    /// At least two cities are required since the swap move needs two
    /// distinct positions.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(TspError::invalid("width must be positive"));
        }
        if self.height == 0 {
            return Err(TspError::invalid("height must be positive"));
        }
        if self.city_count < 2 {
            return Err(TspError::invalid(format!(
                "city count must be at least 2, got {}",
                self.city_count
            )));
        }
        self.anneal_config().validate()
    }

    /// The annealing part of the parameters.
    pub fn anneal_config(&self) -> AnnealConfig {
        AnnealConfig::default()
            .with_initial_temperature(self.initial_temperature)
            .with_stopping_temperature(self.stopping_temperature)
            .with_decay_factor(self.decay_factor)
    }
}

fn parse_field<T: FromStr>(name: &str, text: &str) -> Result<T> {
    text.trim().parse().map_err(|_| {
        TspError::invalid(format!(
            "please enter valid numeric values: {name} = {:?}",
            text.trim()
        ))
    })
}
