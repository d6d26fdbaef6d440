//! Simulated Annealing (SA) for the Euclidean TSP.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with probability
//! `exp(-delta / T)` (the Metropolis criterion), and the temperature `T`
//! decays geometrically until it reaches a stopping threshold.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

pub mod batch;
mod config;
mod report;
mod runner;

pub use config::AnnealConfig;
pub use report::{
    ChannelReporter, HistoryReporter, NoopReporter, ProgressReporter, Snapshot, TracingReporter,
};
pub use runner::{accept, metropolis_accepts, AnnealResult, SaRunner};
