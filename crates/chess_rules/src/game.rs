//! Game state and move execution.
//!
//! `GameState` is a persistent value: every operation borrows the current
//! state and hands back a new one, leaving the input untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::attacks::in_check;
use crate::board::Board;
use crate::error::{Result, RulesError};
use crate::movegen::{self, legal_destinations};
use crate::types::*;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Color,
    /// Applied moves, oldest first.
    pub move_history: Vec<Move>,
    /// Square picked by the user interface, if any.
    pub selected_square: Option<Square>,
    /// Legal destinations of the selected piece.
    pub legal_moves: Vec<Square>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub last_move: Option<Move>,
    /// Side played by the automated opponent; `None` for two humans.
    pub computer_player: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move, black played by the computer.
    pub fn new() -> Self {
        Self::with_board(Board::startpos(), Color::White)
    }

    /// Wraps `board` in a fresh game with `to_move` on turn and derives the
    /// check, checkmate and stalemate flags for that side.
    pub fn with_board(board: Board, to_move: Color) -> Self {
        let mut state = GameState {
            board,
            current_turn: to_move,
            move_history: Vec::new(),
            selected_square: None,
            legal_moves: Vec::new(),
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            last_move: None,
            computer_player: Some(Color::Black),
        };
        state.is_check = in_check(&state.board, to_move);
        let stuck = state.has_no_legal_moves();
        state.is_checkmate = state.is_check && stuck;
        state.is_stalemate = !state.is_check && stuck;
        state
    }

    /// Loads a position from FEN. Only the placement and side-to-move fields
    /// are read; castling, en-passant and clock fields are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let placement = parts
            .first()
            .ok_or_else(|| RulesError::InvalidFen("empty string".to_string()))?;
        let board = Board::from_fen_placement(placement)?;

        let to_move = match parts.get(1).copied().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(RulesError::InvalidFen(format!(
                    "invalid side to move '{other}'"
                )));
            }
        };
        Ok(Self::with_board(board, to_move))
    }

    /// Legal destinations for the piece on `sq`. Empty when the square is off
    /// the board, empty, or holds a piece of the side not on turn.
    pub fn legal_moves_from(&self, sq: Square) -> Vec<Square> {
        match self.board.piece_at(sq) {
            Some(pc) if pc.color == self.current_turn => {
                legal_destinations(&self.board, sq, self.current_turn)
            }
            _ => Vec::new(),
        }
    }

    /// Every legal (from, to) pair for the side to move.
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        movegen::legal_moves(&self.board, self.current_turn)
    }

    pub fn has_no_legal_moves(&self) -> bool {
        movegen::has_no_legal_moves(&self.board, self.current_turn)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_checkmate || self.is_stalemate
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate {
            Some(Outcome::Checkmate {
                winner: self.current_turn.other(),
            })
        } else if self.is_stalemate {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }

    /// True when the side to move is the automated opponent's and the game
    /// is still running.
    pub fn is_computer_turn(&self) -> bool {
        self.computer_player == Some(self.current_turn) && !self.is_terminal()
    }

    /// Moves the selection cursor to `sq` and caches its legal destinations.
    /// Selecting an empty or opposing square clears the selection.
    pub fn select_square(&self, sq: Square) -> GameState {
        let mut next = self.clone();
        match self.board.piece_at(sq) {
            Some(pc) if pc.color == self.current_turn => {
                next.selected_square = Some(sq);
                next.legal_moves = self.legal_moves_from(sq);
            }
            _ => {
                next.selected_square = None;
                next.legal_moves.clear();
            }
        }
        next
    }

    /// Cycles the automated side: black, white, nobody, black again.
    pub fn toggle_computer_player(&self) -> GameState {
        let mut next = self.clone();
        next.computer_player = match self.computer_player {
            Some(Color::Black) => Some(Color::White),
            Some(Color::White) => None,
            None => Some(Color::Black),
        };
        next
    }

    /// Applies `from -> to` and derives the status of the resulting position.
    ///
    /// The move is trusted: callers must take `to` from
    /// [`legal_moves_from`](Self::legal_moves_from). Use
    /// [`try_apply_move`](Self::try_apply_move) for a checked variant.
    /// An empty `from` square yields an unchanged copy.
    pub fn apply_move(&self, from: Square, to: Square) -> GameState {
        let mut next = self.clone();
        let Some(piece) = self.board.piece_at(from) else {
            warn!(%from, %to, "apply_move called on an empty square");
            return next;
        };

        let mut mv = Move {
            from,
            to,
            piece,
            captured_piece: self.board.piece_at(to),
            is_check: false,
            is_checkmate: false,
        };

        next.board.set_piece(to, Some(piece.moved()));
        next.board.set_piece(from, None);
        next.current_turn = self.current_turn.other();
        next.selected_square = None;
        next.legal_moves.clear();

        next.is_check = in_check(&next.board, next.current_turn);
        next.is_checkmate = false;
        next.is_stalemate = false;
        if next.is_check {
            mv.is_check = true;
            next.is_checkmate = next.has_no_legal_moves();
            mv.is_checkmate = next.is_checkmate;
        } else {
            next.is_stalemate = next.has_no_legal_moves();
        }

        next.move_history.push(mv);
        next.last_move = Some(mv);

        debug!(
            mv = %mv,
            captured = mv.captured_piece.is_some(),
            check = next.is_check,
            "applied move"
        );
        let plies = next.move_history.len();
        match next.outcome() {
            Some(Outcome::Checkmate { winner }) => info!(%winner, plies, "checkmate"),
            Some(Outcome::Stalemate) => info!(plies, "stalemate"),
            None => {}
        }
        next
    }

    /// Like [`apply_move`](Self::apply_move) but rejects anything outside
    /// the legal set for `from`.
    pub fn try_apply_move(&self, from: Square, to: Square) -> Result<GameState> {
        if !self.legal_moves_from(from).contains(&to) {
            return Err(RulesError::IllegalMove { from, to });
        }
        Ok(self.apply_move(from, to))
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
