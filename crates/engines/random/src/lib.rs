//! Random Move Opponent
//!
//! Picks a random piece of its color, then a random destination for that
//! piece. Pieces that cannot move are resampled a bounded number of times;
//! when every attempt comes up empty the opponent forfeits its turn.

use chess_core::{Board, Color, Move, Opponent, Square, generate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;


/// How pieces are drawn when the first pick has no moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// One uniform draw from the full piece list per attempt, one attempt per
    /// piece. The same piece can be drawn twice, so a movable piece may be
    /// missed and the turn forfeited.
    #[default]
    WithReplacement,
    /// Try pieces in a shuffled order, each once. Only forfeits when no
    /// piece can move.
    WithoutReplacement,
}

/// An opponent that plays uniformly random candidate moves.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
    mode: SamplingMode,
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            mode: SamplingMode::default(),
        }
    }

    /// Reproducible opponent for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            mode: SamplingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    fn pick_destination(&mut self, board: &Board, from: Square) -> Option<Move> {
        let piece = board.get(from)?;
        let moves = generate(piece, from, board);
        let to = *moves.choose(&mut self.rng)?;
        Some(Move::new(from, to))
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&mut self, board: &Board, side: Color) -> Option<Move> {
        let mut pieces: Vec<Square> = board.pieces(side).map(|(sq, _)| sq).collect();
        if pieces.is_empty() {
            return None;
        }

        let attempts = pieces.len();
        if self.mode == SamplingMode::WithoutReplacement {
            pieces.shuffle(&mut self.rng);
        }

        for attempt in 0..attempts {
            let from = match self.mode {
                SamplingMode::WithReplacement => pieces[self.rng.gen_range(0..pieces.len())],
                SamplingMode::WithoutReplacement => pieces[attempt],
            };
            if let Some(mv) = self.pick_destination(board, from) {
                debug!(attempt, %mv, "opponent picked move");
                return Some(mv);
            }
            debug!(attempt, %from, "opponent piece has no moves");
        }

        debug!(attempts, ?side, "opponent found no move");
        None
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
