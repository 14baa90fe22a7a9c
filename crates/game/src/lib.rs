//! Game engine for a human-vs-computer chess variant.
//!
//! This crate provides:
//! - [`GameState`]: board ownership, selection, move application, undo, hints
//! - A logical-clock [`Scheduler`] for the opponent's thinking delay and hint
//!   timeouts, with epoch checks so a new game drops stale callbacks
//! - [`GameConfig`] loaded from TOML
//! - [`GameView`] snapshots for whatever draws the board
//!
//! # Usage
//!
//! ```
//! use chess_game::{GameConfig, GameState, TurnStatus};
//!
//! let mut game = GameState::new(GameConfig { seed: Some(1), ..Default::default() });
//! assert!(game.select_piece_at(6, 4));
//! assert!(game.attempt_move(4, 4));
//! assert_eq!(game.status(), TurnStatus::OpponentTurn);
//!
//! game.run_pending();
//! assert_eq!(game.move_count(), 2);
//! ```

mod config;
mod error;
mod game;
mod scheduler;
mod view;

pub use config::*;
pub use error::*;
pub use game::*;
pub use scheduler::*;
pub use view::*;
