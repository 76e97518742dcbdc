use tracing::trace;

use crate::attacks::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL, in_check};
use crate::board::Board;
use crate::types::*;

/// Pseudo-legal destinations for the piece on `from`: legal by movement rules
/// alone, ignoring whether the mover's king is left attacked.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    match pc.kind {
        PieceKind::Pawn => pawn_moves(board, from),
        PieceKind::Knight => knight_moves(board, from),
        PieceKind::Bishop => bishop_moves(board, from),
        PieceKind::Rook => rook_moves(board, from),
        PieceKind::Queen => queen_moves(board, from),
        PieceKind::King => king_moves(board, from),
    }
}

/// Legal destinations for the piece on `from`, moving as `mover`.
///
/// Every candidate is tried on its own clone of the board.
pub fn legal_destinations(board: &Board, from: Square, mover: Color) -> Vec<Square> {
    let mut out = pseudo_legal_moves(board, from);
    out.retain(|&to| !in_check(&board.with_piece_moved(from, to), mover));
    trace!(%from, count = out.len(), "filtered legal destinations");
    out
}

/// Every legal (from, to) pair for `side`, scanning the board row-major.
pub fn legal_moves(board: &Board, side: Color) -> Vec<(Square, Square)> {
    board
        .squares_of(side)
        .into_iter()
        .flat_map(|from| {
            legal_destinations(board, from, side)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// True if no piece of `side` has a legal move.
pub fn has_no_legal_moves(board: &Board, side: Color) -> bool {
    board
        .squares_of(side)
        .into_iter()
        .all(|from| legal_destinations(board, from, side).is_empty())
}

pub fn pawn_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(pc) = board.piece_at(from) else {
        return out;
    };
    let dir = pc.color.forward();

    // forward 1, then forward 2 from the start row
    if let Some(one) = from.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        out.push(one);
        if from.row == pc.color.pawn_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.piece_at(two).is_none()
        {
            out.push(two);
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.piece_at(to)
            && target.color != pc.color
        {
            out.push(to);
        }
    }
    out
}

pub fn knight_moves(board: &Board, from: Square) -> Vec<Square> {
    step_moves(board, from, &KNIGHT_OFFSETS)
}

pub fn bishop_moves(board: &Board, from: Square) -> Vec<Square> {
    slider_moves(board, from, &DIAGONAL)
}

pub fn rook_moves(board: &Board, from: Square) -> Vec<Square> {
    slider_moves(board, from, &ORTHOGONAL)
}

/// Rook rays followed by bishop rays; the two never overlap.
pub fn queen_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = rook_moves(board, from);
    out.extend(bishop_moves(board, from));
    out
}

pub fn king_moves(board: &Board, from: Square) -> Vec<Square> {
    step_moves(board, from, &KING_OFFSETS)
}

fn step_moves(board: &Board, from: Square, deltas: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(pc) = board.piece_at(from) else {
        return out;
    };
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(other) if other.color != pc.color => out.push(to),
                _ => {}
            }
        }
    }
    out
}

fn slider_moves(board: &Board, from: Square, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(pc) = board.piece_at(from) else {
        return out;
    };
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(other) if other.color != pc.color => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
