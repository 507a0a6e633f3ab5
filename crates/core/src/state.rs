//! Game state representation.

use serde::{Deserialize, Serialize};

use crate::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Playing,
    Win,
    Lose,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Playing
    }
}

/// Snapshot a host keeps per game. Field names on the wire follow the
/// browser client (`board`, `score`, `bestScore`, `gameStatus`).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(rename = "board")]
    pub grid: Grid,
    pub score: u64,
    pub best_score: u64,
    /// Optional on input; hosts recompute it from the grid anyway.
    #[serde(rename = "gameStatus", default)]
    pub status: Status,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: Grid::empty(Grid::DEFAULT_SIZE),
            score: 0,
            best_score: 0,
            status: Status::Playing,
        }
    }
}

impl GameState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let s = GameState::default();
        assert_eq!(s.score, 0);
        assert_eq!(s.best_score, 0);
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.grid.empty_cells().len(), 16);
    }

    #[test]
    fn test_clone_equality() {
        let s1 = GameState::new(Grid::from_values(&[[2, 0], [0, 0]]));
        let s2 = s1.clone();
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_wire_names() {
        let s = GameState::new(Grid::from_values(&[[2, 0], [0, 0]]));
        let json = serde_json::to_value(&s).expect("serialize");
        assert_eq!(json["board"][0][0], 2);
        assert!(json["board"][0][1].is_null());
        assert_eq!(json["bestScore"], 0);
        assert_eq!(json["gameStatus"], "playing");
    }

    #[test]
    fn test_status_optional_on_input() {
        let s: GameState =
            serde_json::from_str(r#"{"board":[[2,null],[null,null]],"score":4,"bestScore":8}"#)
                .expect("deserialize");
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.best_score, 8);
    }

    #[test]
    fn test_status_is_over() {
        assert!(!Status::Playing.is_over());
        assert!(Status::Win.is_over());
        assert!(Status::Lose.is_over());
    }
}
