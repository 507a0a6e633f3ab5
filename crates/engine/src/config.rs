use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tile_core::{Grid, Status};

use crate::spawn::spawn_tile_with;
use crate::status::evaluate_status;

/// Tile value that wins the classic game.
pub const WIN_VALUE: u32 = 2048;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 2, got {0}")]
    InvalidSize(usize),
    #[error("win value must be a power of two >= 4, got {0}")]
    InvalidWinValue(u32),
    #[error("four probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Rule parameters a session plays under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub size: usize,
    pub win_value: u32,
    pub four_probability: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl RuleConfig {
    /// 4x4, win at 2048, 10% fours.
    pub fn classic() -> Self {
        Self {
            size: Grid::DEFAULT_SIZE,
            win_value: WIN_VALUE,
            four_probability: crate::spawn::FOUR_PROBABILITY,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_win_value(mut self, win_value: u32) -> Self {
        self.win_value = win_value;
        self
    }

    pub fn with_four_probability(mut self, four_probability: f64) -> Self {
        self.four_probability = four_probability;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(ConfigError::InvalidWinValue(self.win_value));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidProbability(self.four_probability));
        }
        Ok(())
    }

    /// Empty board of the configured size with two spawned tiles.
    pub fn initial_grid<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let grid = spawn_tile_with(&Grid::empty(self.size), self, rng);
        spawn_tile_with(&grid, self, rng)
    }

    pub fn evaluate(&self, grid: &Grid) -> Status {
        evaluate_status(grid, self.win_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classic_values() {
        let c = RuleConfig::classic();
        assert_eq!(c.size, 4);
        assert_eq!(c.win_value, 2048);
        assert!((c.four_probability - 0.1).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            RuleConfig::classic().with_size(1).validate(),
            Err(ConfigError::InvalidSize(1))
        );
        assert_eq!(
            RuleConfig::classic().with_win_value(100).validate(),
            Err(ConfigError::InvalidWinValue(100))
        );
        assert_eq!(
            RuleConfig::classic().with_win_value(2).validate(),
            Err(ConfigError::InvalidWinValue(2))
        );
        assert!(RuleConfig::classic()
            .with_four_probability(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_initial_grid_uses_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let g = RuleConfig::classic().with_size(5).initial_grid(&mut rng);
        assert_eq!(g.shape(), Ok((5, 5)));
        assert_eq!(g.tiles().count(), 2);
    }

    #[test]
    fn test_evaluate_uses_win_value() {
        let g = Grid::from_values(&[[128, 0], [0, 0]]);
        assert_eq!(RuleConfig::classic().evaluate(&g), Status::Playing);
        assert_eq!(
            RuleConfig::classic().with_win_value(128).evaluate(&g),
            Status::Win
        );
    }
}
