//! Random grid fill

use crate::{PatternError, PatternResult};
use morphview_core::BooleanGrid;
use rand::distr::{Bernoulli, Distribution};

/// Fraction of cells set by default
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Create a grid where each cell is set independently with probability
/// `density`.
///
/// # Errors
///
/// Returns [`PatternError::InvalidDensity`] if `density` is not in `[0, 1]`,
/// and a core shape error for zero dimensions.
pub fn random_grid<R: rand::Rng + ?Sized>(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut R,
) -> PatternResult<BooleanGrid> {
    let coin = Bernoulli::new(density).map_err(|_| PatternError::InvalidDensity(density))?;
    let mut grid = BooleanGrid::new(rows, cols)?;
    for r in 0..rows {
        for c in 0..cols {
            if coin.sample(rng) {
                grid.set_unchecked(r, c, true);
            }
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_grid(4, 4, 0.0, &mut rng).unwrap().is_clear());
        assert!(random_grid(4, 4, 1.0, &mut rng).unwrap().is_full());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_grid(10, 10, DEFAULT_DENSITY, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_grid(10, 10, DEFAULT_DENSITY, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_density() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_grid(2, 2, 1.5, &mut rng).unwrap_err(),
            PatternError::InvalidDensity(1.5)
        );
        assert!(random_grid(2, 2, -0.1, &mut rng).is_err());
    }

    #[test]
    fn test_zero_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_grid(0, 2, 0.5, &mut rng),
            Err(PatternError::Core(_))
        ));
    }
}
