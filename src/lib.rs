//! Euclidean travelling salesman solver based on simulated annealing.
//!
//! The crate is split into:
//!
//! - [`tsp`]: cities, random instance generation, tours, tour cost and the
//!   pairwise-swap neighborhood move.
//! - [`sa`]: the annealing loop with geometric cooling and Metropolis
//!   acceptance, plus the [`sa::ProgressReporter`] boundary through which
//!   per-iteration statistics leave the loop.
//! - [`params`]: the validated parameter bundle a front end fills in.
//! - [`solve`]: instance generation and annealing driven by one seeded
//!   random stream, so a seed reproduces a whole run.
//!
//! The loop is headless. Rendering and parameter entry live outside the
//! crate and talk to it only through [`params::TspParams`] and
//! [`sa::ProgressReporter`].
//!
//! # Examples
//!
//! ```
//! use u_tsp::sa::{AnnealConfig, NoopReporter, SaRunner};
//! use u_tsp::tsp::City;
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(0.0, 10.0),
//!     City::new(10.0, 10.0),
//!     City::new(10.0, 0.0),
//! ];
//! let config = AnnealConfig::default();
//! let mut rng = u_tsp::create_rng(42);
//! let result = SaRunner::run(&cities, &config, &mut NoopReporter, &mut rng).unwrap();
//! assert!((result.best_cost - 40.0).abs() < 1e-9);
//! ```

mod error;
pub mod params;
pub mod sa;
mod solve;
pub mod tsp;

pub use error::{Result, TspError};
pub use solve::{create_rng, solve, solve_with_cancel, solve_with_rng, Solution};
