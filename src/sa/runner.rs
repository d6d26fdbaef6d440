//! SA execution loop.

use super::config::AnnealConfig;
use super::report::{ProgressReporter, Snapshot};
use crate::error::{Result, TspError};
use crate::tsp::{evaluate, initialize, perturb, tour_length, City, Tour};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a simulated annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The current tour when the run terminated.
    pub final_tour: Tour,

    /// Cost of `final_tour`.
    pub final_cost: f64,

    /// The lowest-cost tour generated during the run, accepted or not.
    pub best_tour: Tour,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// Highest cost among all generated tours.
    pub worst_cost: f64,

    /// Number of candidate moves evaluated.
    pub iterations: usize,

    /// Temperature when the loop ended.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether the run was stopped by the cancellation flag.
    pub cancelled: bool,
}

/// Executes simulated annealing over a fixed set of cities.
///
/// Randomness is consumed from the supplied generator in a fixed order:
/// the initial shuffle, then per iteration the two swap positions followed
/// by the acceptance draw (uphill moves only). A seeded generator therefore
/// reproduces a run exactly.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA until the temperature reaches the stopping threshold.
    ///
    /// # Errors
    /// [`TspError::InvalidParameter`] if the configuration is invalid or
    /// there are fewer than two cities. Validation happens before any
    /// randomness is consumed or any snapshot is reported.
    pub fn run<R, P>(
        cities: &[City],
        config: &AnnealConfig,
        reporter: &mut P,
        rng: &mut R,
    ) -> Result<AnnealResult>
    where
        R: Rng,
        P: ProgressReporter + ?Sized,
    {
        Self::run_with_cancel(cities, config, reporter, rng, None)
    }

    /// Runs SA with an optional cancellation flag.
    ///
    /// The flag is checked at the top of every iteration. A cancelled run
    /// ends normally with [`AnnealResult::cancelled`] set.
    #[tracing::instrument(
        level = "debug",
        name = "anneal",
        skip_all,
        fields(cities = cities.len())
    )]
    pub fn run_with_cancel<R, P>(
        cities: &[City],
        config: &AnnealConfig,
        reporter: &mut P,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult>
    where
        R: Rng,
        P: ProgressReporter + ?Sized,
    {
        config.validate()?;
        if cities.len() < 2 {
            return Err(TspError::invalid(format!(
                "annealing needs at least 2 cities, got {}",
                cities.len()
            )));
        }

        tracing::debug!(
            initial_temperature = config.initial_temperature,
            stopping_temperature = config.stopping_temperature,
            decay_factor = config.decay_factor,
            expected_iterations = config.expected_iterations(),
            "starting annealing run"
        );

        // Initialize
        let mut current = initialize(cities.len(), rng)?;
        let mut current_cost = evaluate(cities, &current)?;
        let mut best_tour = current.clone();
        let mut best_cost = current_cost;
        let mut worst_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        while temperature > config.stopping_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let candidate = perturb(&current, rng)?;
            let candidate_cost = tour_length(cities, candidate.as_slice());

            // Extremes cover every generated candidate, not only accepted ones.
            if candidate_cost < best_cost {
                best_cost = candidate_cost;
                best_tour = candidate.clone();
            }
            worst_cost = worst_cost.max(candidate_cost);

            let improving = candidate_cost < current_cost;
            if accept(candidate_cost, current_cost, temperature, rng) {
                tracing::trace!(
                    iteration = iterations + 1,
                    from = current_cost,
                    to = candidate_cost,
                    temperature,
                    "accepted move"
                );
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;
                if improving {
                    improving_moves += 1;
                }
            }

            temperature = config.cool(temperature);
            iterations += 1;

            reporter.report(
                cities,
                Snapshot {
                    iteration: iterations,
                    temperature,
                    current_cost,
                    best_cost,
                    worst_cost,
                    tour: current.clone(),
                },
            );
        }

        tracing::debug!(
            iterations,
            accepted_moves,
            improving_moves,
            final_cost = current_cost,
            best_cost,
            worst_cost,
            cancelled,
            "annealing run finished"
        );

        Ok(AnnealResult {
            final_tour: current,
            final_cost: current_cost,
            best_tour,
            best_cost,
            worst_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
        })
    }
}

/// Metropolis acceptance test.
///
/// Downhill candidates are accepted without touching `rng`. Otherwise one
/// uniform draw in `[0, 1)` is taken and compared with
/// `exp(-delta / temperature)`.
pub fn accept<R: Rng>(
    candidate_cost: f64,
    current_cost: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    if candidate_cost < current_cost {
        return true;
    }
    let draw: f64 = rng.random_range(0.0..1.0);
    metropolis_accepts(candidate_cost - current_cost, temperature, draw)
}

/// `exp(-delta / temperature) > draw`. A draw equal to the probability rejects.
#[inline]
pub fn metropolis_accepts(delta: f64, temperature: f64, draw: f64) -> bool {
    let probability = (-delta / temperature).exp();
    probability > draw
}
