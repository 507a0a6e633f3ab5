//! Random tile insertion. The random source is always passed in.

use rand::Rng;
use tile_core::Grid;

use crate::config::RuleConfig;

/// Chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Insert a 2 (90%) or 4 (10%) into a uniformly chosen empty cell.
///
/// A full grid comes back unchanged.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tile_engine::{spawn_tile, Grid};
/// let mut rng = StdRng::seed_from_u64(7);
/// let g = spawn_tile(&Grid::empty(4), &mut rng);
/// assert_eq!(g.empty_cells().len(), 15);
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    place_random(grid, FOUR_PROBABILITY, rng)
}

/// Like [`spawn_tile`] with the odds from `config`.
pub fn spawn_tile_with<R: Rng + ?Sized>(grid: &Grid, config: &RuleConfig, rng: &mut R) -> Grid {
    place_random(grid, config.four_probability, rng)
}

/// Convenience: [`spawn_tile`] on the thread-local RNG. Not reproducible;
/// prefer passing a seeded generator.
pub fn spawn_tile_thread(grid: &Grid) -> Grid {
    let mut rng = rand::thread_rng();
    spawn_tile(grid, &mut rng)
}

/// Empty `size`x`size` grid with two spawned tiles.
pub fn create_initial_grid<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    let grid = spawn_tile(&Grid::empty(size), rng);
    spawn_tile(&grid, rng)
}

fn place_random<R: Rng + ?Sized>(grid: &Grid, four_probability: f64, rng: &mut R) -> Grid {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return grid.clone();
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen_bool(four_probability.clamp(0.0, 1.0)) {
        4
    } else {
        2
    };
    grid.with_cell(row, col, Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_grid_unchanged() {
        let g = Grid::from_values(&[[2, 4], [8, 16]]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(spawn_tile(&g, &mut rng), g);
    }

    #[test]
    fn test_fills_only_hole() {
        let g = Grid::from_values(&[[2, 4], [0, 16]]);
        let mut rng = StdRng::seed_from_u64(3);
        let next = spawn_tile(&g, &mut rng);
        assert!(matches!(next.get(1, 0), Some(2) | Some(4)));
        assert_eq!(next.get(0, 0), Some(2));
        assert_eq!(next.get(0, 1), Some(4));
        assert_eq!(next.get(1, 1), Some(16));
    }

    #[test]
    fn test_zero_source_picks_first_empty() {
        // all-zero draws pick index 0 and pass the Bernoulli test
        let g = Grid::from_values(&[[2, 0], [0, 0]]);
        let mut rng = StepRng::new(0, 0);
        let next = spawn_tile(&g, &mut rng);
        assert_eq!(next, Grid::from_values(&[[2, 4], [0, 0]]));
    }

    #[test]
    fn test_config_odds() {
        let g = Grid::empty(4);
        let mut rng = StdRng::seed_from_u64(11);
        let always_two = RuleConfig::classic().with_four_probability(0.0);
        let always_four = RuleConfig::classic().with_four_probability(1.0);
        for _ in 0..20 {
            let two = spawn_tile_with(&g, &always_two, &mut rng);
            assert_eq!(two.max_tile(), Some(2));
            let four = spawn_tile_with(&g, &always_four, &mut rng);
            assert_eq!(four.max_tile(), Some(4));
        }
    }

    #[test]
    fn test_same_seed_same_tile() {
        let g = Grid::empty(4);
        let a = spawn_tile(&g, &mut StdRng::seed_from_u64(42));
        let b = spawn_tile(&g, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_initial_grid_has_two_tiles() {
        let mut rng = StdRng::seed_from_u64(9);
        let g = create_initial_grid(4, &mut rng);
        assert_eq!(g.tiles().count(), 2);
        assert!(g.tiles().all(|(_, _, v)| v == 2 || v == 4));
    }

    #[test]
    fn test_thread_rng_spawns_one() {
        let g = spawn_tile_thread(&Grid::empty(3));
        assert_eq!(g.tiles().count(), 1);
    }

    #[test]
    fn test_four_rate_is_roughly_ten_percent() {
        let g = Grid::empty(4);
        let mut rng = StdRng::seed_from_u64(2024);
        let fours = (0..10_000)
            .filter(|_| spawn_tile(&g, &mut rng).max_tile() == Some(4))
            .count();
        assert!((800..1200).contains(&fours), "fours = {fours}");
    }
}
