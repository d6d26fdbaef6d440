//! Independent restarts over a list of seeds.
//!
//! Each restart is a complete, strictly sequential solve with its own
//! random stream. With the `parallel` feature the restarts run on the rayon
//! thread pool; results always come back in seed order.

use super::report::NoopReporter;
use crate::error::Result;
use crate::params::TspParams;
use crate::solve::{solve, Solution};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aggregate statistics over a batch of runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    pub runs: usize,
    pub mean_final_cost: f64,
    pub min_best_cost: f64,
    pub max_best_cost: f64,
}

/// Solves `params` once per seed, overriding `params.seed`.
///
/// Runs are headless. The first failing run's error is returned.
pub fn run_seeds(params: &TspParams, seeds: &[u64]) -> Result<Vec<Solution>> {
    params.validate()?;
    tracing::debug!(runs = seeds.len(), "starting batch");

    let solve_one = |&seed: &u64| solve(&params.clone().with_seed(seed), &mut NoopReporter);

    #[cfg(feature = "parallel")]
    let solutions = seeds.par_iter().map(solve_one).collect();
    #[cfg(not(feature = "parallel"))]
    let solutions = seeds.iter().map(solve_one).collect();

    solutions
}

/// Summarizes a batch. Returns `None` for an empty batch.
pub fn summarize(solutions: &[Solution]) -> Option<BatchSummary> {
    if solutions.is_empty() {
        return None;
    }
    let runs = solutions.len();
    let mean_final_cost =
        solutions.iter().map(|s| s.result.final_cost).sum::<f64>() / runs as f64;
    let (min_best_cost, max_best_cost) = solutions.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), s| (lo.min(s.result.best_cost), hi.max(s.result.best_cost)),
    );
    Some(BatchSummary {
        runs,
        mean_final_cost,
        min_best_cost,
        max_best_cost,
    })
}
