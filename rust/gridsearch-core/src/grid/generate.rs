//! Random obstacle placement.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::Grid;
use crate::error::GridError;
use crate::models::Position;

pub fn check_density(density: f64) -> Result<(), GridError> {
    if (0.0..1.0).contains(&density) {
        Ok(())
    } else {
        Err(GridError::InvalidDensity(density))
    }
}

/// Block `floor(width * height * density)` distinct cells drawn uniformly
/// from everything except start and goal. The count is clamped to the number
/// of eligible cells.
pub fn random_grid<R>(width: usize, height: usize, density: f64, rng: &mut R) -> Result<Grid, GridError>
where
    R: Rng + ?Sized,
{
    check_density(density)?;
    let mut grid = Grid::new(width, height)?;
    let mut candidates: Vec<Position> = grid.positions().filter(|&p| !grid.is_endpoint(p)).collect();
    let wanted = (grid.cell_count() as f64 * density).floor() as usize;
    let count = wanted.min(candidates.len());
    let (chosen, _) = candidates.partial_shuffle(rng, count);
    for &pos in chosen.iter() {
        grid.block(pos);
    }
    debug!(width, height, density, obstacles = count, "generated grid");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn places_requested_obstacle_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_grid(10, 10, 0.35, &mut rng).unwrap();
        assert_eq!(g.obstacle_count(), 35);
        assert!(g.is_free(g.start()));
        assert!(g.is_free(g.goal()));
    }

    #[test]
    fn clamps_to_eligible_cells() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = random_grid(2, 2, 0.99, &mut rng).unwrap();
        assert_eq!(g.obstacle_count(), 2);
        assert!(g.is_free(g.start()) && g.is_free(g.goal()));

        let single = random_grid(1, 1, 0.5, &mut rng).unwrap();
        assert_eq!(single.obstacle_count(), 0);
    }

    #[test]
    fn zero_density_is_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = random_grid(6, 4, 0.0, &mut rng).unwrap();
        assert_eq!(g.obstacle_count(), 0);
    }

    #[test]
    fn rejects_density_outside_unit_interval() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_grid(4, 4, 1.0, &mut rng), Err(GridError::InvalidDensity(1.0)));
        assert!(random_grid(4, 4, f64::NAN, &mut rng).is_err());
        assert!(matches!(random_grid(0, 4, 0.1, &mut rng), Err(GridError::InvalidDimensions { .. })));
    }
}
