//! One player's game: current state, undo snapshots and the spawn RNG.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tile_core::{Direction, GameState, Status};
use tile_engine::{move_grid, spawn_tile_with, RuleConfig};

use crate::storage::{load_best_score, load_state, Store};
use crate::SessionError;

/// What a call to [`Game::play`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    pub moved: bool,
    pub score_gained: u64,
    pub status: Status,
}

pub struct Game {
    config: RuleConfig,
    state: GameState,
    history: Vec<GameState>,
    rng: StdRng,
}

impl Game {
    /// Fresh game: two spawned tiles, score 0, best 0.
    pub fn new(config: RuleConfig, seed: u64) -> Result<Self, SessionError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = config.initial_grid(&mut rng);
        let status = config.evaluate(&grid);
        Ok(Self {
            state: GameState {
                status,
                ..GameState::new(grid)
            },
            config,
            history: Vec::new(),
            rng,
        })
    }

    /// Resume from a saved state. The grid must match the configured size
    /// and the status is recomputed rather than trusted.
    pub fn from_state(
        config: RuleConfig,
        mut state: GameState,
        seed: u64,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        state.grid.validate(config.size)?;
        state.status = config.evaluate(&state.grid);
        state.best_score = state.best_score.max(state.score);
        Ok(Self {
            config,
            state,
            history: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Resume from `store` if it holds a board, otherwise start fresh while
    /// keeping any stored best score.
    pub fn restore<S: Store + ?Sized>(
        config: RuleConfig,
        store: &S,
        seed: u64,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        match load_state(store, &config)? {
            Some(state) => {
                info!(
                    "resumed game: score {}, best {}",
                    state.score, state.best_score
                );
                Self::from_state(config, state, seed)
            }
            None => {
                let best = load_best_score(store)?;
                let mut game = Self::new(config, seed)?;
                game.state.best_score = best;
                info!("no saved board, new game (best {})", best);
                Ok(game)
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Take one turn. Finished games and moves that change nothing leave the
    /// state (and the undo history) alone.
    pub fn play(&mut self, direction: Direction) -> Result<TurnOutcome, SessionError> {
        if self.state.status.is_over() {
            return Ok(self.unchanged());
        }

        let outcome = move_grid(&self.state.grid, direction)?;
        if !outcome.moved {
            return Ok(self.unchanged());
        }

        self.history.push(self.state.clone());

        let grid = spawn_tile_with(&outcome.grid, &self.config, &mut self.rng);
        self.state.score += outcome.score_gained;
        self.state.best_score = self.state.best_score.max(self.state.score);
        self.state.status = self.config.evaluate(&grid);
        self.state.grid = grid;

        debug!(
            "{}: +{} -> score {} ({:?})",
            direction, outcome.score_gained, self.state.score, self.state.status
        );

        Ok(TurnOutcome {
            moved: true,
            score_gained: outcome.score_gained,
            status: self.state.status,
        })
    }

    /// Step back one accepted turn. The best score is never lowered.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        let best = self.state.best_score.max(previous.best_score);
        self.state = previous;
        self.state.best_score = best;
        debug!("undo -> score {}", self.state.score);
        true
    }

    /// New board and score 0; best score and config carry over.
    pub fn restart(&mut self) {
        self.history.clear();
        let grid = self.config.initial_grid(&mut self.rng);
        self.state = GameState {
            status: self.config.evaluate(&grid),
            grid,
            score: 0,
            best_score: self.state.best_score,
        };
        info!("restarted (best {})", self.state.best_score);
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    fn unchanged(&self) -> TurnOutcome {
        TurnOutcome {
            moved: false,
            score_gained: 0,
            status: self.state.status,
        }
    }
}
