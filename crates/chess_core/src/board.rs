use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Errors from [`Board::from_diagram`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("diagram has {0} rows, expected 8")]
    RowCount(usize),
    #[error("diagram row {row} has {width} cells, expected 8")]
    RowWidth { row: usize, width: usize },
    #[error("invalid piece character '{ch}' in diagram row {row}")]
    InvalidPiece { row: usize, ch: char },
}

/// 8x8 grid of optional pieces. Each piece lives in exactly one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard layout: black on rows 0-1, white on rows 6-7.
    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8 {
            b.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            b.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        // Back ranks
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][col] = Some(Piece::new(kind, Color::Black));
            b.cells[7][col] = Some(Piece::new(kind, Color::White));
        }
        b
    }

    /// Parse an 8-row diagram, row 0 first. `.` is empty, uppercase letters
    /// are white and lowercase are black. Whitespace is ignored and every
    /// parsed piece starts unmoved.
    pub fn from_diagram(diagram: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(ParseBoardError::RowWidth {
                    row,
                    width: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind =
                    PieceKind::from_letter(ch).ok_or(ParseBoardError::InvalidPiece { row, ch })?;
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.cells[row][col] = Some(Piece::new(kind, color));
            }
        }
        Ok(board)
    }

    pub fn in_bounds(row: i8, col: i8) -> bool {
        in_bounds(row, col)
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn get_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].as_mut()
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = pc;
    }

    /// Remove and return the occupant of `sq`, leaving it empty.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Pieces of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces(color).filter(|(_, pc)| pc.kind == kind).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = cell.map_or('.', |pc| pc.letter());
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
