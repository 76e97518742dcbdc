//! Random Move Chess Engine
//!
//! The automated opponent: picks a piece of the side to move at random, then
//! a random legal destination for it. Useful for:
//! - Giving a human something to play against
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation
//!
//! The random source is always passed in, so a seeded generator makes every
//! choice reproducible.

use chess_rules::{Engine, GameState, Square, automated_reply};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;


/// Chooses a move for the side to move in `state`.
///
/// Pieces are visited in shuffled order; the first one with any legal
/// destination moves to one of them chosen uniformly. Returns `None` when no
/// piece can move.
pub fn pick_random_move<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Option<(Square, Square)> {
    let mut pieces = state.board.squares_of(state.current_turn);
    pieces.shuffle(rng);

    for from in pieces {
        let targets = state.legal_moves_from(from);
        if let Some(&to) = targets.choose(rng) {
            trace!(%from, %to, options = targets.len(), "random move picked");
            return Some((from, to));
        }
    }
    None
}

/// Plays the computer's reply with moves drawn from `rng`.
///
/// The input comes back unchanged when it is not the computer side's turn,
/// when the game is already over, or when no piece can move.
pub fn random_reply<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    automated_reply(state, |s| pick_random_move(s, rng))
}

/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    /// Engine seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Engine whose choices are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, state: &GameState) -> Option<(Square, Square)> {
        pick_random_move(state, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
