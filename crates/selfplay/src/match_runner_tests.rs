use super::*;
use chess_rules::Square;
use random_engine::RandomEngine;

/// Engine that never finds a move, to exercise the no-move path.
struct Resigner;

impl Engine for Resigner {
    fn choose_move(&mut self, _state: &GameState) -> Option<(Square, Square)> {
        None
    }

    fn name(&self) -> &str {
        "Resigner"
    }
}

fn quiet(num_games: u32, max_plies: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        max_plies,
        verbose: false,
        ..Default::default()
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let runner = MatchRunner::new(quiet(2, 50));
    let report = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.games.len(), 2);
    for game in &report.games {
        assert!(game.plies <= 50);
        assert_eq!(game.moves.len(), game.plies);
    }
}

#[test]
fn test_ply_limit_is_a_draw() {
    let mut white = RandomEngine::with_seed(3);
    let mut black = RandomEngine::with_seed(4);

    let runner = MatchRunner::new(quiet(1, 1));
    let record = runner.play_game(&mut white, &mut black);

    assert_eq!(record.end, GameEnd::PlyLimit);
    assert_eq!(record.plies, 1);
    assert_eq!(record.white_result(), GameResult::Draw);
}

#[test]
fn test_engine_without_move_loses() {
    let mut white = Resigner;
    let mut black = RandomEngine::with_seed(5);

    let runner = MatchRunner::new(quiet(1, 10));
    let record = runner.play_game(&mut white, &mut black);

    assert_eq!(record.end, GameEnd::NoMove { side: Color::White });
    assert_eq!(record.score_str(), "0-1");
    assert_eq!(record.plies, 0);
}

#[test]
fn test_results_follow_engine1_across_colors() {
    let mut engine1 = RandomEngine::with_seed(6);
    let mut engine2 = Resigner;

    // engine1 is white in game 1 and black in game 2; the resigner loses both
    let runner = MatchRunner::new(quiet(2, 10));
    let report = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(report.result.wins, 2);
    assert_eq!(report.games[0].white, "Random v1.0");
    assert_eq!(report.games[1].white, "Resigner");
    assert!((report.result.score() - 1.0).abs() < 1e-9);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let runner = MatchRunner::new(quiet(1, 40));

    let a = runner.play_game(&mut RandomEngine::with_seed(8), &mut RandomEngine::with_seed(9));
    let b = runner.play_game(&mut RandomEngine::with_seed(8), &mut RandomEngine::with_seed(9));

    assert_eq!(a, b);
}

#[test]
fn test_match_result_score() {
    let result = MatchResult {
        wins: 1,
        losses: 1,
        draws: 2,
    };
    assert_eq!(result.total_games(), 4);
    assert!((result.score() - 0.5).abs() < 1e-9);
    assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
}
