//! Euclidean TSP model.
//!
//! Cities are random points in a rectangle, a tour is a permutation of city
//! indices read as a closed cycle, and the neighborhood move swaps two
//! positions of a tour.

mod city;
mod tour;

pub use city::{generate, City};
pub(crate) use tour::tour_length;
pub use tour::{evaluate, initialize, perturb, Tour};
