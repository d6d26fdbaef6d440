//! End-to-end solve: instance generation followed by annealing on a single
//! seeded random stream.

use crate::error::Result;
use crate::params::TspParams;
use crate::sa::{AnnealResult, ProgressReporter, SaRunner};
use crate::tsp::{generate, City};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Creates the crate's seeded random generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A generated instance together with its annealing outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Seed the run was started from.
    pub seed: u64,
    pub cities: Vec<City>,
    pub result: AnnealResult,
}

/// Generates an instance from `params` and anneals it.
///
/// Uses `params.seed`, or a random seed when none is set; the seed actually
/// used is returned in [`Solution::seed`].
///
/// # Examples
///
/// ```
/// use u_tsp::params::TspParams;
/// use u_tsp::sa::NoopReporter;
///
/// let params = TspParams {
///     city_count: 8,
///     ..TspParams::default()
/// }
/// .with_seed(3);
/// let solution = u_tsp::solve(&params, &mut NoopReporter).unwrap();
/// assert_eq!(solution.cities.len(), 8);
/// assert!(solution.result.best_cost <= solution.result.final_cost);
/// ```
pub fn solve<P>(params: &TspParams, reporter: &mut P) -> Result<Solution>
where
    P: ProgressReporter + ?Sized,
{
    solve_with_cancel(params, reporter, None)
}

/// [`solve`] with an optional cancellation flag.
pub fn solve_with_cancel<P>(
    params: &TspParams,
    reporter: &mut P,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Solution>
where
    P: ProgressReporter + ?Sized,
{
    params.validate()?;
    let seed = params.seed.unwrap_or_else(rand::random);
    let mut rng = create_rng(seed);
    let (cities, result) = solve_with_rng(params, reporter, &mut rng, cancel)?;
    Ok(Solution {
        seed,
        cities,
        result,
    })
}

/// Generates and anneals using a caller-supplied generator.
///
/// The generator is consumed by city generation first, then by the
/// annealing loop. `params.seed` is ignored.
pub fn solve_with_rng<R, P>(
    params: &TspParams,
    reporter: &mut P,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<(Vec<City>, AnnealResult)>
where
    R: Rng,
    P: ProgressReporter + ?Sized,
{
    params.validate()?;
    let config = params.anneal_config();
    let cities = generate(params.width, params.height, params.city_count, rng)?;
    let result = SaRunner::run_with_cancel(&cities, &config, reporter, rng, cancel)?;
    Ok((cities, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::{HistoryReporter, NoopReporter};
    use crate::tsp::evaluate;

    fn small() -> TspParams {
        TspParams {
            width: 200,
            height: 100,
            city_count: 12,
            ..TspParams::default()
        }
    }

    #[test]
    fn test_solve_is_reproducible_with_seed() {
        let params = small().with_seed(2024);
        let a = solve(&params, &mut NoopReporter).unwrap();
        let b = solve(&params, &mut NoopReporter).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, 2024);
    }

    #[test]
    fn test_solve_matches_explicit_stream() {
        let params = small().with_seed(5);
        let solved = solve(&params, &mut NoopReporter).unwrap();

        let mut rng = create_rng(5);
        let cities = generate(200, 100, 12, &mut rng).unwrap();
        let result =
            SaRunner::run(&cities, &params.anneal_config(), &mut NoopReporter, &mut rng).unwrap();

        assert_eq!(solved.cities, cities);
        assert_eq!(solved.result, result);
    }

    #[test]
    fn test_solve_reports_consistent_snapshots() {
        let params = small().with_seed(1);
        let mut history = HistoryReporter::new();
        let solution = solve(&params, &mut history).unwrap();

        assert_eq!(history.snapshots.len(), params.anneal_config().expected_iterations());
        let last = history.snapshots.last().unwrap();
        let cost = evaluate(&solution.cities, &last.tour).unwrap();
        assert!((cost - solution.result.final_cost).abs() < 1e-9);
    }

    #[test]
    fn test_solve_rejects_before_reporting() {
        let params = TspParams {
            width: 0,
            ..small()
        };
        let mut history = HistoryReporter::new();
        let err = solve(&params, &mut history).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(history.snapshots.is_empty());
    }

    #[test]
    fn test_solve_without_seed_records_seed() {
        let solution = solve(&small(), &mut NoopReporter).unwrap();
        let replay = solve(&small().with_seed(solution.seed), &mut NoopReporter).unwrap();
        assert_eq!(solution, replay);
    }
}
