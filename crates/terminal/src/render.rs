//! Text board rendering

use chess_core::{Color, Square};
use chess_game::GameState;
use std::io::Write;

/// Draws the board with selection and candidate markers.
#[derive(Debug, Default)]
pub struct Renderer {
    rotated: bool,
}

impl Renderer {
    pub fn rotate(&mut self) {
        self.rotated = !self.rotated;
    }

    /// Row (and column) indices in screen order.
    fn order(&self) -> Vec<i8> {
        if self.rotated {
            (0..8).rev().collect()
        } else {
            (0..8).collect()
        }
    }

    pub fn draw(&self, out: &mut impl Write, game: &GameState) {
        let board = game.board();
        let candidates = game.candidate_moves();
        let order = self.order();

        write!(out, "\n   ").ok();
        for &col in &order {
            write!(out, " {col} ").ok();
        }
        writeln!(out).ok();

        for &row in &order {
            write!(out, " {row} ").ok();
            for &col in &order {
                let Some(sq) = Square::new(row, col) else {
                    continue;
                };
                let glyph = board.get(sq).map_or('·', |pc| pc.symbol());
                let (open, close) = if game.selected() == Some(sq) {
                    ('[', ']')
                } else if candidates.contains(&sq) {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                write!(out, "{open}{glyph}{close}").ok();
            }
            writeln!(out).ok();
        }

        writeln!(
            out,
            "Moves: {}  Captured white: {}  Captured black: {}  {}",
            game.move_count(),
            game.captured(Color::White),
            game.captured(Color::Black),
            game.status()
        )
        .ok();
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
