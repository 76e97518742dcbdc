use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};
use crate::types::*;

/// 8x8 grid indexed `[row][col]`. Row 0 is the black back rank.
///
/// Pieces are stored by value, so `clone` yields a fully independent copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8 {
            for color in [Color::White, Color::Black] {
                b.set_piece(
                    Square::new(color.pawn_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                b.set_piece(
                    Square::new(color.back_row(), col as i8),
                    Some(Piece::new(kind, color)),
                );
            }
        }
        b
    }

    /// Parses the piece-placement field of a FEN string (rank 8 first).
    ///
    /// Pawns standing off their starting row are marked as having moved;
    /// nothing else about move history can be recovered from FEN.
    pub fn from_fen_placement(placement: &str) -> Result<Self> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(RulesError::InvalidFen(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let row = row as i8;
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let mut pc = Piece::from_fen_char(ch)
                        .ok_or_else(|| RulesError::InvalidFen(format!("bad piece char '{ch}'")))?;
                    if pc.kind == PieceKind::Pawn && row != pc.color.pawn_row() {
                        pc.has_moved = true;
                    }
                    let sq = Square::new(row, col);
                    if !sq.is_valid() {
                        return Err(RulesError::InvalidFen(format!(
                            "too many files in rank {}",
                            8 - row
                        )));
                    }
                    board.set_piece(sq, Some(pc));
                    col += 1;
                }
                if col > 8 {
                    return Err(RulesError::InvalidFen(format!(
                        "too many files in rank {}",
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(RulesError::InvalidFen(format!(
                    "not enough files in rank {}",
                    8 - row
                )));
            }
        }
        Ok(board)
    }

    pub fn to_fen_placement(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// The piece on `sq`; `None` for empty squares and for squares off the board.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_valid() {
            return None;
        }
        self.cells[sq.row as usize][sq.col as usize]
    }

    /// Writes `pc` to `sq`. Squares off the board are ignored.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if sq.is_valid() {
            self.cells[sq.row as usize][sq.col as usize] = pc;
        }
    }

    pub fn find_king(&self, c: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            matches!(self.piece_at(sq), Some(pc) if pc.color == c && pc.kind == PieceKind::King)
        })
    }

    /// Squares occupied by pieces of color `c`, row-major.
    pub fn squares_of(&self, c: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| matches!(self.piece_at(sq), Some(pc) if pc.color == c))
            .collect()
    }

    /// Copy of the board with the piece on `from` moved to `to`, overwriting
    /// whatever stood there. Used to simulate candidate moves.
    pub fn with_piece_moved(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        let moving = next.piece_at(from);
        next.set_piece(to, moving);
        next.set_piece(from, None);
        next
    }
}
