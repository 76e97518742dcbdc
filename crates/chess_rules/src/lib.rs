pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::{Result, RulesError};
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait - implemented by all move-selection policies
// =============================================================================

/// Trait that all automated opponents must implement.
///
/// The rules engine only asks for a (from, to) pair; whatever produces it
/// (random choice, search, a neural net) is interchangeable.
pub trait Engine: Send {
    /// Pick a move for the side to move in `state`.
    ///
    /// # Returns
    /// A (from, to) pair taken from the legal set, or `None` when the side to
    /// move has no legal move.
    fn choose_move(&mut self, state: &GameState) -> Option<(Square, Square)>;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

/// Lets `engine` play one move for whichever side is on turn. Terminal
/// states, and engines that find nothing to play, come back unchanged.
pub fn engine_move(state: &GameState, engine: &mut dyn Engine) -> GameState {
    play_chosen(state, |s| engine.choose_move(s))
}

/// Plays the automated opponent's reply, but only when it is the
/// designated computer side's turn and the game is not over.
pub fn automated_move(state: &GameState, engine: &mut dyn Engine) -> GameState {
    automated_reply(state, |s| engine.choose_move(s))
}

/// Same guard as [`automated_move`], with the move picked by `pick` instead
/// of an [`Engine`].
pub fn automated_reply<F>(state: &GameState, pick: F) -> GameState
where
    F: FnOnce(&GameState) -> Option<(Square, Square)>,
{
    if !state.is_computer_turn() {
        return state.clone();
    }
    play_chosen(state, pick)
}

fn play_chosen<F>(state: &GameState, pick: F) -> GameState
where
    F: FnOnce(&GameState) -> Option<(Square, Square)>,
{
    if state.is_terminal() {
        return state.clone();
    }
    match pick(state) {
        Some((from, to)) => state.apply_move(from, to),
        None => state.clone(),
    }
}
