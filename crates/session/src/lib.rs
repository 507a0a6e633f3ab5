//! tile-session - host-side game sessions: turn sequencing, undo history,
//! best score, persistence and batch simulation.

mod error;
mod game;
mod simulate;
mod storage;

pub use error::SessionError;
pub use game::{Game, TurnOutcome};
pub use simulate::{play_out, simulate, GameRecord, Policy, SimulationSummary, MAX_MOVES};
pub use storage::{
    load_best_score, load_state, save_state, FileStore, MemoryStore, Store, BEST_SCORE_KEY,
    BOARD_KEY, SCORE_KEY,
};
