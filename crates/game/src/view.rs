//! Render snapshots

use chess_core::{Board, Move, Square};
use serde::Serialize;

use crate::game::TurnStatus;

/// Everything a front end needs to redraw the board and counters.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub board: Board,
    pub selected: Option<Square>,
    pub candidate_moves: Vec<Square>,
    pub hint: Option<Move>,
    pub move_count: u32,
    pub captured_white: u32,
    pub captured_black: u32,
    pub status: TurnStatus,
    pub status_label: String,
}

impl GameView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
