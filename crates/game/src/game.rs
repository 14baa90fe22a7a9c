//! Game state management: selection, moves, undo, hints and opponent turns

use std::fmt;
use std::time::Duration;

use chess_core::{Board, Color, Move, Opponent, Piece, Square, all_moves, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use random_engine::RandomOpponent;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::scheduler::{Scheduler, Task};
use crate::view::GameView;

/// The human always plays white.
pub const PLAYER: Color = Color::White;
/// The automated side always plays black.
pub const OPPONENT: Color = Color::Black;

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnStatus {
    PlayerTurn,
    OpponentTurn,
}

impl TurnStatus {
    pub fn flipped(self) -> Self {
        match self {
            TurnStatus::PlayerTurn => TurnStatus::OpponentTurn,
            TurnStatus::OpponentTurn => TurnStatus::PlayerTurn,
        }
    }

    /// Status line shown to the player
    pub fn label(self) -> &'static str {
        match self {
            TurnStatus::PlayerTurn => "Your Turn",
            TurnStatus::OpponentTurn => "AI Thinking...",
        }
    }
}

impl fmt::Display for TurnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One applied move, enough to take it back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Whatever stood on `to` before the move
    pub captured: Option<Piece>,
    /// The mover's `has_moved` flag before the move
    pub had_moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveHint {
    mv: Move,
    token: u64,
}

/// Represents the current state of a game against the automated opponent
pub struct GameState {
    board: Board,
    move_count: u32,
    /// Captured pieces, indexed by the captured piece's color
    captured: [u32; 2],
    status: TurnStatus,
    selected: Option<Square>,
    candidates: Vec<Square>,
    hint: Option<ActiveHint>,
    history: Vec<MoveRecord>,
    scheduler: Scheduler,
    /// Bumped whenever queued tasks must stop applying (new game, undo)
    epoch: u64,
    hint_token: u64,
    rng: StdRng,
    opponent: Box<dyn Opponent>,
    config: GameConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("move_count", &self.move_count)
            .field("captured", &self.captured)
            .field("status", &self.status)
            .field("selected", &self.selected)
            .field("history", &self.history.len())
            .field("epoch", &self.epoch)
            .field("opponent", &self.opponent.name())
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// New game with the random opponent configured by `config`.
    pub fn new(config: GameConfig) -> Self {
        let opponent = match config.seed {
            // Offset so hints and replies don't replay the same stream
            Some(seed) => RandomOpponent::seeded(seed.wrapping_add(1)),
            None => RandomOpponent::new(),
        }
        .with_mode(config.opponent_sampling);
        Self::with_opponent(config, Box::new(opponent))
    }

    /// New game against a custom opponent.
    pub fn with_opponent(config: GameConfig, opponent: Box<dyn Opponent>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board: Board::startpos(),
            move_count: 0,
            captured: [0; 2],
            status: TurnStatus::PlayerTurn,
            selected: None,
            candidates: Vec::new(),
            hint: None,
            history: Vec::new(),
            scheduler: Scheduler::new(),
            epoch: 0,
            hint_token: 0,
            rng,
            opponent,
            config,
        }
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Select a player piece and compute its candidate moves.
    ///
    /// Ignored unless it is the player's turn and `sq` holds a white piece.
    pub fn select_piece(&mut self, sq: Square) -> bool {
        if self.status != TurnStatus::PlayerTurn {
            return false;
        }
        match self.board.get(sq) {
            Some(pc) if pc.color == PLAYER => {
                self.selected = Some(sq);
                self.candidates = generate(pc, sq, &self.board);
                self.hint = None;
                debug!(square = %sq, candidates = self.candidates.len(), "selected piece");
                true
            }
            _ => false,
        }
    }

    /// Move the selected piece from `from` to `to`.
    ///
    /// Fails with no state change unless `from` is the selected square, holds
    /// a piece, and `to` is one of the computed candidates.
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        if self.selected != Some(from) || !self.candidates.contains(&to) {
            return false;
        }
        let Some(mut piece) = self.board.take(from) else {
            return false;
        };

        let captured = self.board.take(to);
        if let Some(cap) = captured {
            self.captured[cap.color.idx()] += 1;
        }
        let had_moved = piece.has_moved;
        piece.has_moved = true;
        self.board.set(to, Some(piece));

        self.history.push(MoveRecord {
            from,
            to,
            captured,
            had_moved,
        });
        self.move_count += 1;
        self.status = self.status.flipped();
        self.clear_transient();

        debug!(
            mv = %Move::new(from, to),
            capture = captured.is_some(),
            move_count = self.move_count,
            "applied move"
        );

        if self.status == TurnStatus::OpponentTurn {
            self.scheduler
                .schedule(self.config.opponent_delay(), self.epoch, Task::OpponentMove);
        }
        true
    }

    /// Take back the most recent move. No-op on an empty history.
    ///
    /// Always hands the turn back to the player and cancels a pending
    /// opponent reply.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };

        if let Some(mut piece) = self.board.take(record.to) {
            if self.config.restore_has_moved_on_undo {
                piece.has_moved = record.had_moved;
            }
            self.board.set(record.from, Some(piece));
        }
        self.board.set(record.to, record.captured);
        if let Some(cap) = record.captured {
            let count = &mut self.captured[cap.color.idx()];
            *count = count.saturating_sub(1);
        }

        self.move_count = self.move_count.saturating_sub(1);
        self.status = TurnStatus::PlayerTurn;
        self.clear_transient();
        self.epoch += 1;

        debug!(from = %record.from, to = %record.to, move_count = self.move_count, "undid move");
        true
    }

    /// Back to the starting layout with all counters zeroed.
    pub fn reset_game(&mut self) {
        self.load_position(Board::startpos());
    }

    /// Start a fresh game from an arbitrary position, player to move.
    pub fn load_position(&mut self, board: Board) {
        self.board = board;
        self.move_count = 0;
        self.captured = [0; 2];
        self.status = TurnStatus::PlayerTurn;
        self.clear_transient();
        self.history.clear();
        // Queued tasks from the previous game are dropped as stale
        self.epoch += 1;
        self.opponent.new_game();
        info!(epoch = self.epoch, "new game");
    }

    /// Suggest a random player move and show it for a while.
    ///
    /// Does nothing while a piece is selected. Returns the suggestion, or
    /// `None` when the player has no move at all.
    pub fn request_hint(&mut self) -> Option<Move> {
        if self.selected.is_some() {
            return None;
        }
        let moves = all_moves(&self.board, PLAYER);
        let mv = *moves.choose(&mut self.rng)?;

        self.hint_token += 1;
        self.hint = Some(ActiveHint {
            mv,
            token: self.hint_token,
        });
        self.scheduler.schedule(
            self.config.hint_duration(),
            self.epoch,
            Task::ClearHint {
                token: self.hint_token,
            },
        );
        debug!(%mv, options = moves.len(), "showing hint");
        Some(mv)
    }

    /// Let the opponent pick and play a move right now.
    ///
    /// The chosen piece is staged as the selection so the move goes through
    /// the same validation as a player move. With no move available the
    /// opponent forfeits and the turn returns to the player.
    pub fn play_opponent_turn(&mut self) -> bool {
        if self.status != TurnStatus::OpponentTurn {
            return false;
        }
        let Some(mv) = self.opponent.choose_move(&self.board, OPPONENT) else {
            info!(opponent = self.opponent.name(), "opponent has no move, forfeiting turn");
            self.status = TurnStatus::PlayerTurn;
            return false;
        };

        if self.stage_opponent_piece(mv.from) && self.apply_move(mv.from, mv.to) {
            return true;
        }
        warn!(%mv, opponent = self.opponent.name(), "opponent proposed an invalid move");
        self.clear_selection();
        self.status = TurnStatus::PlayerTurn;
        false
    }

    fn stage_opponent_piece(&mut self, from: Square) -> bool {
        match self.board.get(from) {
            Some(pc) if pc.color == OPPONENT => {
                self.selected = Some(from);
                self.candidates = generate(pc, from, &self.board);
                true
            }
            _ => false,
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.candidates.clear();
    }

    /// Drop the selection and any hint on display.
    fn clear_transient(&mut self) {
        self.clear_selection();
        self.hint = None;
    }

    // =========================================================================
    // Boundary operations on raw coordinates
    // =========================================================================

    pub fn new_game(&mut self) {
        self.reset_game();
    }

    /// Select the piece at `(row, col)`. Out-of-bounds input is ignored.
    pub fn select_piece_at(&mut self, row: i8, col: i8) -> bool {
        Square::new(row, col).is_some_and(|sq| self.select_piece(sq))
    }

    /// Move the selected piece to `(row, col)` on the player's turn.
    pub fn attempt_move(&mut self, row: i8, col: i8) -> bool {
        if self.status != TurnStatus::PlayerTurn {
            return false;
        }
        match (self.selected, Square::new(row, col)) {
            (Some(from), Some(to)) => self.apply_move(from, to),
            _ => false,
        }
    }

    pub fn hint(&mut self) -> Option<Move> {
        self.request_hint()
    }

    /// A click on `(row, col)`: move the selection there if possible,
    /// otherwise select the player piece standing there.
    pub fn click(&mut self, row: i8, col: i8) -> bool {
        if self.status != TurnStatus::PlayerTurn {
            return false;
        }
        self.attempt_move(row, col) || self.select_piece_at(row, col)
    }

    // =========================================================================
    // Deferred tasks
    // =========================================================================

    /// Advance the game clock and run every task that comes due.
    /// Returns how many tasks actually ran.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let mut ran = 0;
        for scheduled in self.scheduler.advance(elapsed) {
            if scheduled.epoch != self.epoch {
                debug!(
                    task = ?scheduled.task,
                    epoch = scheduled.epoch,
                    current = self.epoch,
                    "dropping stale task"
                );
                continue;
            }
            self.run_task(scheduled.task);
            ran += 1;
        }
        ran
    }

    /// Fast-forward until nothing is queued.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.scheduler.next_due() {
            let wait = due.saturating_sub(self.scheduler.now());
            ran += self.advance(wait);
        }
        ran
    }

    /// Time until the next queued task, if any.
    pub fn time_until_next_task(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::OpponentMove => {
                self.play_opponent_turn();
            }
            Task::ClearHint { token } => {
                if self.hint.is_some_and(|h| h.token == token) {
                    self.hint = None;
                }
            }
        }
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Squares to highlight: the hint destination while a hint is shown,
    /// otherwise the selected piece's candidates.
    pub fn candidate_moves(&self) -> &[Square] {
        match &self.hint {
            Some(hint) => std::slice::from_ref(&hint.mv.to),
            None => self.candidates.as_slice(),
        }
    }

    pub fn hint_move(&self) -> Option<Move> {
        self.hint.map(|h| h.mv)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Number of `color` pieces that have been captured.
    pub fn captured(&self, color: Color) -> u32 {
        self.captured[color.idx()]
    }

    pub fn status(&self) -> TurnStatus {
        self.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// Snapshot for rendering
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            selected: self.selected,
            candidate_moves: self.candidate_moves().to_vec(),
            hint: self.hint_move(),
            move_count: self.move_count,
            captured_white: self.captured(Color::White),
            captured_black: self.captured(Color::Black),
            status: self.status,
            status_label: self.status.label().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
