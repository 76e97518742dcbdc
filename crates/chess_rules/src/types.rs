use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RulesError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this color.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    pub fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding this color's pieces in the initial position.
    pub fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Letter used in move notation; pawns have none.
    pub fn notation(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Copy of this piece flagged as having moved.
    pub fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

/// A board coordinate. Row 0 is the black back rank (rank 8), column 0 is
/// the a-file. Squares off the board can be represented; `is_valid` tells
/// them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Square shifted by (`dr`, `dc`), or `None` when that leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let s = Square::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        s.is_valid().then_some(s)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }

    pub fn from_algebraic(c: &str) -> Result<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return Err(RulesError::InvalidSquare(c.to_string()));
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(RulesError::InvalidSquare(c.to_string()));
        }
        let col = (f - b'a') as i8;
        let row = 7 - (r - b'1') as i8;
        Ok(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

/// Historical record of one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The mover as it stood before the move.
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.is_checkmate {
            "#"
        } else if self.is_check {
            "+"
        } else {
            ""
        };
        write!(
            f,
            "{}{}{}{}",
            self.piece.kind.notation(),
            self.from,
            self.to,
            suffix
        )
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
