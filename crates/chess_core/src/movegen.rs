use crate::{board::Board, types::*};

/// Candidate destinations for `piece` standing on `from`, in generation order.
///
/// Movement is purely geometric: nothing checks whether the mover's own king
/// is left attacked, and castling, en passant and promotion do not exist.
pub fn generate(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_into(piece, from, board, &mut out);
    out
}

/// Same as [`generate`], writing into a reusable buffer.
pub fn generate_into(piece: Piece, from: Square, board: &Board, out: &mut Vec<Square>) {
    out.clear();
    match piece.kind.rule() {
        MoveRule::Pawn => gen_pawn(piece, from, board, out),
        MoveRule::Leaper(offsets) => gen_leaper(piece.color, from, board, offsets, out),
        MoveRule::Slider(dirs) => gen_slider(piece.color, from, board, dirs, out),
    }
}

/// Every `(from, to)` pair available to `color`, pieces in row-major order.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let mut buf = Vec::with_capacity(28);
    for (from, pc) in board.pieces(color) {
        generate_into(pc, from, board, &mut buf);
        moves.extend(buf.iter().map(|&to| Move::new(from, to)));
    }
    moves
}

fn gen_pawn(piece: Piece, from: Square, board: &Board, out: &mut Vec<Square>) {
    let dir = piece.color.forward();

    // forward 1, then forward 2 for an unmoved pawn
    if let Some(one) = from.offset(dir, 0)
        && board.get(one).is_none()
    {
        out.push(one);
        if !piece.has_moved
            && let Some(two) = from.offset(2 * dir, 0)
            && board.get(two).is_none()
        {
            out.push(two);
        }
    }

    // captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.get(to)
            && target.color != piece.color
        {
            out.push(to);
        }
    }
}

fn gen_leaper(c: Color, from: Square, board: &Board, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.get(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(c: Color, from: Square, board: &Board, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.get(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
