//! Tests for game-ending positions and for invariants that must hold in
//! every reachable position.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use chess_rules::{Color, GameState, Outcome, Square, in_check};

fn sq(c: &str) -> Square {
    Square::from_algebraic(c).unwrap()
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, white queen on b6, white king on c7
    let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(state.is_stalemate, "Stalemate position should be flagged");
    assert!(!state.is_check, "Stalemate means king is not in check");
    assert!(state.all_legal_moves().is_empty());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let state = GameState::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(state.is_stalemate);
    assert!(!state.is_check);
    assert_eq!(state.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_blocked_pawns_are_not_stalemate_while_king_can_move() {
    let state = GameState::from_fen("8/8/8/4k3/4p3/4P3/8/4K3 w - - 0 1").unwrap();
    assert!(!state.is_stalemate);
    assert!(state.legal_moves_from(sq("e3")).is_empty());
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_scholars_mate() {
    let mut state = GameState::new();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ] {
        state = state.try_apply_move(sq(from), sq(to)).unwrap();
    }

    assert!(state.is_checkmate);
    assert_eq!(
        state.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
    let last = state.last_move.unwrap();
    assert_eq!(last.captured_piece.map(|p| p.kind), Some(chess_rules::PieceKind::Pawn));
    assert_eq!(last.to_string(), "Qh5f7#");
}

#[test]
fn test_smothered_mate_position() {
    // Knight on f7 mates the king on h8 boxed in by its own pieces
    let state = GameState::from_fen("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(state.is_check);
    assert!(state.is_checkmate);
}

#[test]
fn test_check_that_can_be_captured_is_not_mate() {
    // Queen on f7 checks, but the king can take it
    let state = GameState::from_fen("4k3/5Q2/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    assert!(state.is_check);
    assert!(!state.is_checkmate);
    assert!(state.legal_moves_from(sq("e8")).contains(&sq("f7")));
}

// =============================================================================
// Random-walk invariants
// =============================================================================

#[test]
fn random_games_respect_move_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _game in 0..8 {
        let mut state = GameState::new();
        for _ply in 0..120 {
            if state.is_terminal() {
                break;
            }
            let mover = state.current_turn;

            for from in state.board.squares_of(mover) {
                for to in state.legal_moves_from(from) {
                    let target = state.board.piece_at(to);
                    assert!(
                        target.is_none_or(|pc| pc.color != mover),
                        "{from}->{to} lands on a friendly piece"
                    );
                }
            }

            let moves = state.all_legal_moves();
            let &(from, to) = moves.choose(&mut rng).expect("non-terminal state has moves");
            let before = state.clone();
            let next = state.apply_move(from, to);

            assert_eq!(state, before, "apply_move must not mutate its input");
            assert!(!in_check(&next.board, mover), "mover left in check");
            assert_eq!(next.current_turn, mover.other());
            assert_eq!(next.move_history.len(), state.move_history.len() + 1);
            assert_eq!(next.is_checkmate, next.is_check && next.has_no_legal_moves());
            assert_eq!(next.is_stalemate, !next.is_check && next.has_no_legal_moves());

            state = next;
        }
    }
}
