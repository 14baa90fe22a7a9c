//! Ray semantics for sliding pieces, checked against every slider on a set
//! of positions.
//!
//! Along each direction a slider's candidates are exactly the empty squares
//! up to the first occupied square, plus that square when it holds an enemy.

use chess_core::{Board, Color, MoveRule, Piece, Square, generate};

const POSITIONS: &[&str] = &[
    "rnbqkbnr
     pppppppp
     ........
     ........
     ........
     ........
     PPPPPPPP
     RNBQKBNR",
    "r...k..r
     .p...p..
     ..n.b...
     ...Q....
     .B..p.R.
     ..P.....
     q.....b.
     R...K..R",
    "........
     ...r....
     ........
     .b.Q.B..
     ........
     ...R....
     ........
     ..q.....",
];

/// Expected candidates along one ray, walking square by square.
fn expected_ray(board: &Board, piece: Piece, from: Square, dr: i8, dc: i8) -> Vec<Square> {
    let mut out = Vec::new();
    let mut cur = from;
    while let Some(next) = cur.offset(dr, dc) {
        match board.get(next) {
            None => out.push(next),
            Some(other) => {
                if other.color != piece.color {
                    out.push(next);
                }
                break;
            }
        }
        cur = next;
    }
    out
}

#[test]
fn slider_rays_stop_at_first_occupied_square() {
    for diagram in POSITIONS {
        let board = Board::from_diagram(diagram).unwrap();
        for color in [Color::White, Color::Black] {
            for (from, piece) in board.pieces(color) {
                let MoveRule::Slider(dirs) = piece.kind.rule() else {
                    continue;
                };
                let expected: Vec<Square> = dirs
                    .iter()
                    .flat_map(|&(dr, dc)| expected_ray(&board, piece, from, dr, dc))
                    .collect();
                assert_eq!(
                    generate(piece, from, &board),
                    expected,
                    "{:?} on {} in\n{}",
                    piece.kind,
                    from,
                    board
                );
            }
        }
    }
}

#[test]
fn no_candidate_holds_a_friendly_piece() {
    for diagram in POSITIONS {
        let board = Board::from_diagram(diagram).unwrap();
        for color in [Color::White, Color::Black] {
            for (from, piece) in board.pieces(color) {
                for to in generate(piece, from, &board) {
                    assert!(
                        board.get(to).is_none_or(|pc| pc.color != color),
                        "{from} -> {to} lands on a friendly piece"
                    );
                }
            }
        }
    }
}
