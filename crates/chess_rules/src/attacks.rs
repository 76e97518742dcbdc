//! Attack and check detection.
//!
//! Attacks are tested by pattern from the target square outward rather than
//! by generating the attacker's moves, so check detection never recurses into
//! the legality filter.

use crate::board::Board;
use crate::types::*;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// True if any piece of color `by` could capture on `target` next move.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let is = |sq: Option<Square>, kind: PieceKind| {
        sq.and_then(|s| board.piece_at(s))
            .is_some_and(|pc| pc.color == by && pc.kind == kind)
    };

    // An attacking pawn stands one step behind the target from its own side.
    let back = -by.forward();
    if is(target.offset(back, -1), PieceKind::Pawn) || is(target.offset(back, 1), PieceKind::Pawn)
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| is(target.offset(dr, dc), PieceKind::Knight))
    {
        return true;
    }

    if ray_hits(board, target, by, &ORTHOGONAL, PieceKind::Rook)
        || ray_hits(board, target, by, &DIAGONAL, PieceKind::Bishop)
    {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| is(target.offset(dr, dc), PieceKind::King))
}

/// Walks each ray from `target`; the first piece met attacks along it only if
/// it belongs to `by` and is a `slider` or a queen.
fn ray_hits(
    board: &Board,
    target: Square,
    by: Color,
    dirs: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = target.offset(dr, dc);
        while let Some(sq) = cur {
            if let Some(pc) = board.piece_at(sq) {
                if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = sq.offset(dr, dc);
        }
    }
    false
}

/// True if `color`'s king is attacked. A board without that king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(ksq) => is_square_attacked(board, ksq, color.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
