//! Cities and random instance generation.

use crate::error::{Result, TspError};
use rand::Rng;

/// A point in the plane, identified by its index in the city list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        City::new(x, y)
    }
}

/// Generates `count` cities with integer coordinates drawn uniformly from
/// `[0, width)` x `[0, height)`.
///
/// The `x` coordinate of each city is drawn before its `y` coordinate, so a
/// seeded generator always reproduces the same instance. Duplicate positions
/// are allowed.
///
/// # Errors
/// [`TspError::InvalidParameter`] if any argument is zero.
///
/// # Examples
///
/// ```
/// use u_tsp::{create_rng, tsp::generate};
///
/// let mut rng = create_rng(7);
/// let cities = generate(640, 480, 20, &mut rng).unwrap();
/// assert_eq!(cities.len(), 20);
/// assert!(cities.iter().all(|c| c.x < 640.0 && c.y < 480.0));
/// ```
pub fn generate<R: Rng>(width: u32, height: u32, count: usize, rng: &mut R) -> Result<Vec<City>> {
    if width == 0 {
        return Err(TspError::invalid("width must be positive"));
    }
    if height == 0 {
        return Err(TspError::invalid("height must be positive"));
    }
    if count == 0 {
        return Err(TspError::invalid("city count must be positive"));
    }

    let cities = (0..count)
        .map(|_| {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            City::new(f64::from(x), f64::from(y))
        })
        .collect();
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_rng;

    #[test]
    fn test_generate_within_bounds() {
        let mut rng = create_rng(42);
        let cities = generate(64, 48, 500, &mut rng).unwrap();
        assert_eq!(cities.len(), 500);
        for c in &cities {
            assert!((0.0..64.0).contains(&c.x), "x out of range: {}", c.x);
            assert!((0.0..48.0).contains(&c.y), "y out of range: {}", c.y);
            assert_eq!(c.x.fract(), 0.0);
            assert_eq!(c.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_generate_unit_area_collapses_to_origin() {
        let mut rng = create_rng(1);
        let cities = generate(1, 1, 5, &mut rng).unwrap();
        assert!(cities.iter().all(|c| *c == City::new(0.0, 0.0)));
    }

    #[test]
    fn test_generate_same_seed_same_instance() {
        let a = generate(640, 480, 30, &mut create_rng(9)).unwrap();
        let b = generate(640, 480, 30, &mut create_rng(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_zero_arguments() {
        let mut rng = create_rng(0);
        assert!(generate(0, 10, 5, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(generate(10, 0, 5, &mut rng).unwrap_err().is_invalid_parameter());
        assert!(generate(10, 10, 0, &mut rng).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_distance() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(&a), 0.0);
    }
}
