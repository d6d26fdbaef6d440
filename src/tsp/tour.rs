//! Tour representation, cost evaluation and the swap neighborhood.
//!
//! A [`Tour`] is a permutation of city indices read as a closed cycle: the
//! city before position 0 is the one at the last position.

use super::city::City;
use crate::error::{Result, TspError};
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered visiting sequence over all cities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps an explicit visiting order.
    ///
    /// # Errors
    /// [`TspError::InvalidParameter`] if `order` is not a permutation of
    /// `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Result<Self> {
        let tour = Tour(order);
        if !tour.is_permutation() {
            return Err(TspError::invalid(
                "tour must visit every city index exactly once",
            ));
        }
        Ok(tour)
    }

    /// The identity order `0, 1, .., count - 1`.
    pub fn identity(count: usize) -> Self {
        Tour((0..count).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Whether every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.0.len();
        let mut seen = vec![false; n];
        for &idx in &self.0 {
            if idx >= n || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    /// Iterates the `len` edges of the cycle as `(from, to)` city indices,
    /// starting with the closing edge from the last city to the first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| (self.0[(i + n - 1) % n], self.0[i]))
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Creates a uniformly random tour over `count` cities.
///
/// # Errors
/// [`TspError::EmptyTour`] if `count == 0`.
pub fn initialize<R: Rng>(count: usize, rng: &mut R) -> Result<Tour> {
    if count == 0 {
        return Err(TspError::EmptyTour);
    }
    let mut order: Vec<usize> = (0..count).collect();
    order.shuffle(rng);
    Ok(Tour(order))
}

/// Total Euclidean length of `tour` over `cities`, closing edge included.
///
/// A single-city tour is a self-loop of length 0.
///
/// # Errors
/// - [`TspError::EmptyTour`] for a zero-length tour.
/// - [`TspError::InvalidParameter`] if the tour length differs from the
///   number of cities or references a city that does not exist.
pub fn evaluate(cities: &[City], tour: &Tour) -> Result<f64> {
    if tour.is_empty() {
        return Err(TspError::EmptyTour);
    }
    if tour.len() != cities.len() {
        return Err(TspError::invalid(format!(
            "tour visits {} cities but the instance has {}",
            tour.len(),
            cities.len()
        )));
    }
    if let Some(&bad) = tour.0.iter().find(|&&i| i >= cities.len()) {
        return Err(TspError::invalid(format!("tour references unknown city {bad}")));
    }
    Ok(tour_length(cities, tour.as_slice()))
}

/// Unchecked cycle length; callers guarantee every index is in range.
pub(crate) fn tour_length(cities: &[City], order: &[usize]) -> f64 {
    let n = order.len();
    let mut distance = 0.0_f64;
    for i in 0..n {
        let a = &cities[order[i]];
        let b = &cities[order[(i + n - 1) % n]];
        distance += a.distance(b);
    }
    distance
}

/// Returns a copy of `tour` with two distinct, uniformly chosen positions
/// swapped. The input is left untouched.
///
/// The second position is resampled until it differs from the first, so
/// the result never equals the input.
///
/// # Errors
/// [`TspError::InvalidParameter`] if the tour has fewer than two cities.
pub fn perturb<R: Rng>(tour: &Tour, rng: &mut R) -> Result<Tour> {
    let n = tour.len();
    if n < 2 {
        return Err(TspError::invalid(format!(
            "swap move needs at least 2 cities, tour has {n}"
        )));
    }
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n);
    while b == a {
        b = rng.random_range(0..n);
    }
    let mut candidate = tour.clone();
    candidate.0.swap(a, b);
    Ok(candidate)
}
