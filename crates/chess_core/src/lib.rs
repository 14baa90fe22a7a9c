//! Board model and move generation for a simplified chess variant.
//!
//! Rules are geometric only: no check detection, castling, en passant or
//! promotion. Row 0 is black's back rank and white moves toward it.

pub mod board;
pub mod movegen;
pub mod types;

pub use board::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Opponent trait: implemented by automated players
// =============================================================================

/// An automated side that picks one move per turn.
///
/// The game engine holds a `Box<dyn Opponent>` so policies can be swapped
/// (random play, scripted replies in tests, smarter searches later).
pub trait Opponent: Send {
    /// Pick a move for `side` on `board`, or `None` to forfeit the turn.
    ///
    /// The returned destination must be one `generate` produces for the piece
    /// on `from`; the engine rejects anything else.
    fn choose_move(&mut self, board: &Board, side: Color) -> Option<Move>;

    /// Returns the opponent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
