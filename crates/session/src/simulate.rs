//! Batch self-play: many independent seeded games on the rayon pool.

use std::str::FromStr;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tile_core::{Direction, Grid, Status};
use tile_engine::{legal_moves, RuleConfig};

use crate::{Game, SessionError};

/// Hard stop for a single simulated game.
pub const MAX_MOVES: u32 = 100_000;

/// How a simulated player picks its next direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Uniform over the directions that change the grid.
    #[default]
    Random,
    /// First direction that moves, trying down, left, right, up.
    Corner,
}

impl Policy {
    const CORNER_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];

    pub fn choose(self, grid: &Grid, rng: &mut StdRng) -> Option<Direction> {
        let legal = legal_moves(grid);
        match self {
            Policy::Random => legal.choose(rng).copied(),
            Policy::Corner => Self::CORNER_ORDER
                .into_iter()
                .find(|d| legal.contains(d)),
        }
    }
}

impl FromStr for Policy {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Policy::Random),
            "corner" => Ok(Policy::Corner),
            _ => Err(SessionError::UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub score: u64,
    pub moves: u32,
    pub max_tile: u32,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationSummary {
    pub games: usize,
    pub wins: usize,
    pub total_score: u64,
    pub best_score: u64,
    pub mean_score: f64,
    pub mean_moves: f64,
    /// Highest tile reached -> number of games.
    pub highest_tiles: FxHashMap<u32, usize>,
}

impl SimulationSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut summary = SimulationSummary {
            games: records.len(),
            ..Default::default()
        };
        let mut total_moves = 0u64;
        for record in records {
            if record.status == Status::Win {
                summary.wins += 1;
            }
            summary.total_score += record.score;
            summary.best_score = summary.best_score.max(record.score);
            total_moves += record.moves as u64;
            *summary.highest_tiles.entry(record.max_tile).or_insert(0) += 1;
        }
        if !records.is_empty() {
            summary.mean_score = summary.total_score as f64 / records.len() as f64;
            summary.mean_moves = total_moves as f64 / records.len() as f64;
        }
        summary
    }

    /// Histogram entries sorted by tile value.
    pub fn sorted_tiles(&self) -> Vec<(u32, usize)> {
        let mut tiles: Vec<(u32, usize)> =
            self.highest_tiles.iter().map(|(&t, &n)| (t, n)).collect();
        tiles.sort_unstable();
        tiles
    }
}

/// Play one seeded game until it is won, lost or hits [`MAX_MOVES`].
pub fn play_out(
    config: &RuleConfig,
    seed: u64,
    policy: Policy,
) -> Result<GameRecord, SessionError> {
    let mut game = Game::new(config.clone(), seed)?;
    let mut rng = StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x9e37_79b9_7f4a_7c15);
    let mut moves = 0u32;

    while !game.state().status.is_over() && moves < MAX_MOVES {
        let Some(direction) = policy.choose(&game.state().grid, &mut rng) else {
            break;
        };
        game.play(direction)?;
        moves += 1;
    }

    let state = game.into_state();
    debug!(
        "seed {seed}: {:?} after {moves} moves, score {}",
        state.status, state.score
    );
    Ok(GameRecord {
        seed,
        score: state.score,
        moves,
        max_tile: state.grid.max_tile().unwrap_or(0),
        status: state.status,
    })
}

/// Run `games` games in parallel; game `i` uses seed `seed + i`.
pub fn simulate(
    config: &RuleConfig,
    games: usize,
    seed: u64,
    policy: Policy,
) -> Result<SimulationSummary, SessionError> {
    config.validate()?;
    let records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| play_out(config, seed.wrapping_add(i as u64), policy))
        .collect::<Result<_, _>>()?;

    let summary = SimulationSummary::from_records(&records);
    info!(
        "simulated {} games ({:?}): {} wins, mean score {:.1}, best {}",
        summary.games, policy, summary.wins, summary.mean_score, summary.best_score
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("random".parse::<Policy>().ok(), Some(Policy::Random));
        assert_eq!("Corner".parse::<Policy>().ok(), Some(Policy::Corner));
        assert!(matches!(
            "greedy".parse::<Policy>(),
            Err(SessionError::UnknownPolicy(_))
        ));
    }

    #[test]
    fn test_corner_priority() {
        let mut rng = StdRng::seed_from_u64(0);
        let g = Grid::from_values(&[[0, 2], [0, 0]]);
        // down is legal, so it wins over left
        assert_eq!(Policy::Corner.choose(&g, &mut rng), Some(Direction::Down));
        let bottom = Grid::from_values(&[[0, 0], [0, 2]]);
        assert_eq!(Policy::Corner.choose(&bottom, &mut rng), Some(Direction::Left));
    }

    #[test]
    fn test_random_picks_legal_move() {
        let mut rng = StdRng::seed_from_u64(4);
        let g = Grid::from_values(&[[2, 0], [0, 0]]);
        for _ in 0..20 {
            let d = Policy::Random.choose(&g, &mut rng).expect("legal move");
            assert!(matches!(d, Direction::Down | Direction::Right));
        }
        let stuck = Grid::from_values(&[[2, 4], [4, 2]]);
        assert_eq!(Policy::Random.choose(&stuck, &mut rng), None);
    }

    #[test]
    fn test_play_out_finishes() {
        let record = play_out(&RuleConfig::classic(), 5, Policy::Random).expect("valid config");
        assert!(record.moves > 0);
        assert!(record.status.is_over() || record.moves == MAX_MOVES);
        assert!(record.max_tile >= 4);
    }

    #[test]
    fn test_play_out_is_deterministic() {
        let a = play_out(&RuleConfig::classic(), 17, Policy::Corner).expect("valid config");
        let b = play_out(&RuleConfig::classic(), 17, Policy::Corner).expect("valid config");
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_target_is_won() {
        let config = RuleConfig::classic().with_win_value(16);
        let record = play_out(&config, 1, Policy::Corner).expect("valid config");
        assert_eq!(record.status, Status::Win);
        assert_eq!(record.max_tile, 16);
    }

    #[test]
    fn test_simulate_summary() {
        let summary =
            simulate(&RuleConfig::classic(), 8, 100, Policy::Corner).expect("valid config");
        assert_eq!(summary.games, 8);
        assert_eq!(summary.highest_tiles.values().sum::<usize>(), 8);
        assert!(summary.best_score as f64 >= summary.mean_score);

        let again =
            simulate(&RuleConfig::classic(), 8, 100, Policy::Corner).expect("valid config");
        assert_eq!(summary, again);
    }

    #[test]
    fn test_empty_simulation() {
        let summary =
            simulate(&RuleConfig::classic(), 0, 0, Policy::Random).expect("valid config");
        assert_eq!(summary.games, 0);
        assert_eq!(summary.mean_score, 0.0);
    }

    #[test]
    fn test_summary_from_records() {
        let record = |seed: u64, score: u64, max_tile: u32, status: Status| GameRecord {
            seed,
            score,
            moves: score as u32 / 10,
            max_tile,
            status,
        };
        let records = [
            record(0, 100, 64, Status::Lose),
            record(1, 300, 128, Status::Win),
            record(2, 200, 64, Status::Lose),
        ];
        let s = SimulationSummary::from_records(&records);
        assert_eq!(s.wins, 1);
        assert_eq!(s.total_score, 600);
        assert_eq!(s.best_score, 300);
        assert!((s.mean_score - 200.0).abs() < 1e-9);
        assert!((s.mean_moves - 20.0).abs() < 1e-9);
        assert_eq!(s.sorted_tiles(), vec![(64, 2), (128, 1)]);
    }
}
