use crate::{board::Board, movegen::legal_moves, types::Color};

/// Pure perft node count.
/// Counts all legal positions reachable from `board` with `side` to move,
/// `depth` plies deep.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|(from, to)| perft(&board.with_piece_moved(from, to), side.other(), depth - 1))
        .sum()
}
