//! Move legality tests.
//!
//! Reentry precedence, point occupancy, hits, and bearing off, checked
//! through the public board API from both directions.

use backgammon_engine::board::{Board, BoardImportEntry, Location, MoveKind};
use backgammon_engine::core::{Color, Direction, Player, PlayerId};

fn white() -> Player {
    Player::new(PlayerId::new(0), Color::White, Direction::Clockwise, false)
}

fn black() -> Player {
    Player::new(PlayerId::new(1), Color::Black, Direction::Counterclockwise, false)
}

fn point(direction: Direction, position: u8) -> Location {
    Location::point(direction, position).unwrap()
}

// =============================================================================
// Opening Position
// =============================================================================

#[test]
fn test_standard_board_counts() {
    let board = Board::standard();
    assert!(board.validate_checker_counts().is_ok());
    assert_eq!(board.pip_count(Color::White, Direction::Clockwise), 167);
    assert_eq!(board.pip_count(Color::Black, Direction::Counterclockwise), 167);

    // Same layout seen from either side.
    for position in [24, 13, 8, 6] {
        let white_point = board.point_at(Direction::Clockwise, position).unwrap();
        let black_point = board.point_at(Direction::Counterclockwise, position).unwrap();
        assert_eq!(white_point.count(Color::White), black_point.count(Color::Black));
    }
}

#[test]
fn test_opening_moves_are_mirrored() {
    let board = Board::standard();
    for die in 1..=6 {
        let white_moves = board.possible_moves(&white(), die);
        let black_moves = board.possible_moves(&black(), die);
        assert_eq!(white_moves.len(), black_moves.len(), "die {die}");
        assert!(white_moves.iter().all(|m| m.kind() == MoveKind::PointToPoint));
    }
}

// =============================================================================
// Reentry
// =============================================================================

#[test]
fn test_bar_checker_must_reenter_first() {
    let board = Board::from_import(&[
        BoardImportEntry::bar(Direction::Counterclockwise, Color::Black, 1),
        BoardImportEntry::point(Direction::Counterclockwise, 10, Color::Black, 14),
    ])
    .unwrap();

    let moves = board.possible_moves(&black(), 4);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].origin, Location::Bar(Direction::Counterclockwise));
    assert_eq!(moves[0].destination, point(Direction::Counterclockwise, 21));
    assert_eq!(moves[0].kind(), MoveKind::Reenter);
}

#[test]
fn test_blocked_reentry_has_no_moves() {
    let board = Board::from_import(&[
        BoardImportEntry::bar(Direction::Clockwise, Color::White, 1),
        BoardImportEntry::point(Direction::Clockwise, 10, Color::White, 14),
        BoardImportEntry::point(Direction::Clockwise, 22, Color::Black, 2),
    ])
    .unwrap();

    assert!(board.possible_moves(&white(), 3).is_empty());
    // Open entry points still work.
    assert_eq!(board.possible_moves(&white(), 2).len(), 1);
}

// =============================================================================
// Occupancy and Hits
// =============================================================================

#[test]
fn test_blocked_point_and_blot() {
    let board = Board::from_import(&[
        BoardImportEntry::point(Direction::Clockwise, 12, Color::White, 2),
        BoardImportEntry::point(Direction::Clockwise, 9, Color::Black, 2),
        BoardImportEntry::point(Direction::Clockwise, 8, Color::Black, 1),
    ])
    .unwrap();

    let threes = board.possible_moves(&white(), 3);
    assert!(threes.is_empty());

    let fours = board.possible_moves(&white(), 4);
    assert_eq!(fours.len(), 1);
    assert_eq!(fours[0].destination, point(Direction::Clockwise, 8));

    let (after, hit) = board
        .move_checker(fours[0].origin, fours[0].destination, Direction::Clockwise)
        .unwrap();
    assert!(hit);
    assert_eq!(after.bar_count(Color::Black, Direction::Counterclockwise), 1);
    assert_eq!(after.checker_counts(), board.checker_counts());
}

// =============================================================================
// Bearing Off
// =============================================================================

#[test]
fn test_bear_off_higher_die() {
    let board = Board::from_import(&[
        BoardImportEntry::point(Direction::Counterclockwise, 1, Color::Black, 3),
        BoardImportEntry::off(Direction::Counterclockwise, Color::Black, 12),
    ])
    .unwrap();

    let moves = board.possible_moves(&black(), 6);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].origin, point(Direction::Counterclockwise, 1));
    assert_eq!(moves[0].destination, Location::Off(Direction::Counterclockwise));
    assert_eq!(moves[0].die_value, 6);
    assert_eq!(moves[0].kind(), MoveKind::BearOff);
}

#[test]
fn test_higher_die_needs_no_checker_above() {
    let board = Board::from_import(&[
        BoardImportEntry::point(Direction::Clockwise, 5, Color::White, 1),
        BoardImportEntry::point(Direction::Clockwise, 2, Color::White, 2),
    ])
    .unwrap();

    let moves = board.possible_moves(&white(), 4);
    // 5 -> 1 and 2 cannot bear off while a checker sits on 5.
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].destination, point(Direction::Clockwise, 1));

    let sixes = board.possible_moves(&white(), 6);
    assert_eq!(sixes.len(), 1);
    assert_eq!(sixes[0].origin, point(Direction::Clockwise, 5));
    assert_eq!(sixes[0].kind(), MoveKind::BearOff);
}

#[test]
fn test_no_bear_off_with_checker_outside_home() {
    let board = Board::from_import(&[
        BoardImportEntry::point(Direction::Clockwise, 7, Color::White, 1),
        BoardImportEntry::point(Direction::Clockwise, 3, Color::White, 1),
    ])
    .unwrap();

    let moves = board.possible_moves(&white(), 3);
    assert!(moves.iter().all(|m| m.kind() != MoveKind::BearOff));
}

// =============================================================================
// Auto-switch
// =============================================================================

#[test]
fn test_switch_reports_used_die() {
    let board = Board::from_import(&[
        BoardImportEntry::point(Direction::Clockwise, 10, Color::White, 1),
        BoardImportEntry::point(Direction::Clockwise, 6, Color::Black, 2),
    ])
    .unwrap();
    let origin = point(Direction::Clockwise, 10);

    let switched = board.possible_moves_with_switch(&white(), 4, 2, Some(origin));
    assert!(switched.auto_switched);
    assert_eq!(switched.original_die_value, 4);
    assert_eq!(switched.used_die_value, 2);
    assert!(switched.moves.iter().any(|m| m.origin == origin));

    let doubles = board.possible_moves_with_switch(&white(), 4, 4, Some(origin));
    assert!(!doubles.auto_switched);
    assert!(doubles.moves.is_empty());
}
