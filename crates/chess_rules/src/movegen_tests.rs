use super::*;

fn sq(c: &str) -> Square {
    Square::from_algebraic(c).unwrap()
}

fn board(placement: &str) -> Board {
    Board::from_fen_placement(placement).unwrap()
}

fn sorted(mut v: Vec<Square>) -> Vec<Square> {
    v.sort();
    v
}

#[test]
fn test_startpos_moves() {
    let b = Board::startpos();
    // Starting position has 20 legal moves for each side
    assert_eq!(legal_moves(&b, Color::White).len(), 20);
    assert_eq!(legal_moves(&b, Color::Black).len(), 20);
}

#[test]
fn test_startpos_pawn_and_knight() {
    let b = Board::startpos();
    assert_eq!(
        sorted(pawn_moves(&b, Square::new(6, 4))),
        vec![Square::new(4, 4), Square::new(5, 4)]
    );
    assert_eq!(
        sorted(knight_moves(&b, Square::new(7, 1))),
        vec![Square::new(5, 0), Square::new(5, 2)]
    );
    // Rooks, bishops, queen and king are boxed in
    for col in [0, 2, 3, 4, 5, 7] {
        assert!(pseudo_legal_moves(&b, Square::new(7, col)).is_empty());
    }
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    // Blocked directly in front: no forward move at all
    let b = board("8/8/8/8/8/4n3/4P3/8");
    assert!(pawn_moves(&b, sq("e2")).is_empty());

    // Knight on e4 blocks only the double step
    let b = board("8/8/8/8/4n3/8/4P3/8");
    assert_eq!(pawn_moves(&b, sq("e2")), vec![sq("e3")]);
}

#[test]
fn test_pawn_captures_and_no_double_step_off_start_row() {
    let b = board("8/8/8/3p1P2/4P3/8/8/8");
    assert_eq!(sorted(pawn_moves(&b, sq("e4"))), sorted(vec![sq("e5"), sq("d5")]));

    // Black pawn captures towards higher rows
    let b = board("8/3p4/2N1B3/8/8/8/8/8");
    assert_eq!(
        sorted(pawn_moves(&b, sq("d7"))),
        sorted(vec![sq("d6"), sq("d5"), sq("c6"), sq("e6")])
    );
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    // No promotion: a white pawn on the eighth rank just stays put
    let b = board("P7/8/8/8/8/8/8/8");
    assert!(pawn_moves(&b, sq("a8")).is_empty());
}

#[test]
fn test_slider_rays() {
    // Rook on e4 on an empty board reaches 14 squares
    let b = board("8/8/8/8/4R3/8/8/8");
    assert_eq!(rook_moves(&b, sq("e4")).len(), 14);

    // Bishop on e4 reaches 13
    let b = board("8/8/8/8/4B3/8/8/8");
    assert_eq!(bishop_moves(&b, sq("e4")).len(), 13);

    // Queen is the union of both
    let b = board("8/8/8/8/4Q3/8/8/8");
    assert_eq!(queen_moves(&b, sq("e4")).len(), 27);
}

#[test]
fn test_slider_stops_on_friend_and_captures_enemy() {
    let b = board("8/8/4p3/8/4R1P1/8/8/8");
    let moves = rook_moves(&b, sq("e4"));
    assert!(moves.contains(&sq("e6")));
    assert!(!moves.contains(&sq("e7")));
    assert!(moves.contains(&sq("f4")));
    assert!(!moves.contains(&sq("g4")));
    assert!(!moves.contains(&sq("h4")));
}

#[test]
fn test_knight_and_king_corner() {
    let b = board("8/8/8/8/8/8/8/N6K");
    assert_eq!(knight_moves(&b, sq("a1")).len(), 2);
    assert_eq!(king_moves(&b, sq("h1")).len(), 3);
}

#[test]
fn test_legal_filter_pinned_piece() {
    // Knight on e2 is pinned against the king by the rook on e8
    let b = board("4r2k/8/8/8/8/8/4N3/4K3");
    assert!(legal_destinations(&b, sq("e2"), Color::White).is_empty());
    assert!(!knight_moves(&b, sq("e2")).is_empty());
}

#[test]
fn test_legal_filter_king_cannot_step_into_attack() {
    let b = board("3r3k/8/8/8/8/8/8/4K3");
    let moves = legal_destinations(&b, sq("e1"), Color::White);
    assert!(!moves.contains(&sq("d1")));
    assert!(!moves.contains(&sq("d2")));
    assert_eq!(sorted(moves), sorted(vec![sq("e2"), sq("f1"), sq("f2")]));
}

#[test]
fn test_filter_does_not_touch_source_board() {
    let b = Board::startpos();
    let before = b.clone();
    let _ = legal_moves(&b, Color::White);
    assert_eq!(b, before);
}

#[test]
fn test_no_legal_moves() {
    assert!(!has_no_legal_moves(&Board::startpos(), Color::White));
    // Black king in corner, white queen stalemates
    let b = board("k7/2K5/1Q6/8/8/8/8/8");
    assert!(has_no_legal_moves(&b, Color::Black));
}
