//! The board: 24 points, a bar and an off tray per direction.
//!
//! Boards are immutable values. `move_checker` returns a new board; the
//! checker is removed from the end of one container and appended to
//! another, never shared.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::container::{Checker, Location, Point, PointPosition, POINT_COUNT};
use super::import::{validate_point, BoardImportEntry, ImportPosition, CHECKERS_PER_SIDE, OPENING};
use crate::core::{CheckerId, Color, ColorMap, Direction, DirectionMap, EngineError, Result, Side};

/// Positions 1-6 of a player's own direction.
pub const HOME_BOARD_SIZE: u8 = 6;

/// Pips charged for a checker on the bar.
pub const BAR_PIPS: u16 = 25;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Indexed by clockwise position - 1.
    points: Vec<Point>,
    bar: DirectionMap<Vector<Checker>>,
    off: DirectionMap<Vector<Checker>>,
}

impl Board {
    /// A board with no checkers.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: (1..=POINT_COUNT)
                .filter_map(PointPosition::from_clockwise)
                .map(Point::empty)
                .collect(),
            bar: DirectionMap::with_default(),
            off: DirectionMap::with_default(),
        }
    }

    /// The opening position with white moving clockwise.
    #[must_use]
    pub fn standard() -> Self {
        Self::standard_for(Direction::Clockwise)
    }

    /// The opening position for a given white direction.
    #[must_use]
    pub fn standard_for(white_direction: Direction) -> Self {
        let mut board = Self::empty();
        let mut next_id = CheckerId::new(0);
        let sides = [
            (Color::White, white_direction),
            (Color::Black, white_direction.opposite()),
        ];
        for (color, direction) in sides {
            for (position, qty) in OPENING {
                let clockwise = match direction {
                    Direction::Clockwise => position,
                    Direction::Counterclockwise => POINT_COUNT + 1 - position,
                };
                let point = &mut board.points[usize::from(clockwise - 1)];
                for _ in 0..qty {
                    point.checkers.push_back(Checker { id: next_id, color });
                    next_id = next_id.next();
                }
            }
        }
        board
    }

    /// Build a board from an import spec.
    pub fn from_import(entries: &[BoardImportEntry]) -> Result<Self> {
        let mut board = Self::empty();
        let mut next_id = CheckerId::new(0);
        for entry in entries {
            board.place(entry, &mut next_id)?;
        }
        Ok(board)
    }

    fn place(&mut self, entry: &BoardImportEntry, next_id: &mut CheckerId) -> Result<()> {
        let color = entry.checkers.color;
        let target = match entry.position {
            ImportPosition::Point {
                clockwise,
                counterclockwise,
            } => {
                let position = validate_point(clockwise, counterclockwise).ok_or_else(|| {
                    EngineError::InvalidBoard {
                        reason: format!("invalid point {clockwise}/{counterclockwise}"),
                    }
                })?;
                let point = &mut self.points[position.index()];
                if point.color().is_some_and(|occupant| occupant != color) {
                    return Err(EngineError::InvalidBoard {
                        reason: format!("point {clockwise} already holds the other color"),
                    });
                }
                &mut point.checkers
            }
            ImportPosition::Bar | ImportPosition::Off => {
                let direction = entry.direction.ok_or_else(|| EngineError::InvalidBoard {
                    reason: "bar and off entries need a direction".to_string(),
                })?;
                if entry.position == ImportPosition::Bar {
                    &mut self.bar[direction]
                } else {
                    &mut self.off[direction]
                }
            }
        };
        for _ in 0..entry.checkers.qty {
            target.push_back(Checker { id: *next_id, color });
            *next_id = next_id.next();
        }
        Ok(())
    }

    // === Access ===

    /// All points in clockwise order (index 0 is clockwise position 1).
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn point(&self, position: PointPosition) -> &Point {
        &self.points[position.index()]
    }

    /// The point numbered `position` from `direction`.
    #[must_use]
    pub fn point_at(&self, direction: Direction, position: u8) -> Option<&Point> {
        PointPosition::for_direction(direction, position).map(|p| self.point(p))
    }

    #[must_use]
    pub fn bar(&self, direction: Direction) -> &Vector<Checker> {
        &self.bar[direction]
    }

    #[must_use]
    pub fn off(&self, direction: Direction) -> &Vector<Checker> {
        &self.off[direction]
    }

    /// Checkers held by any container.
    #[must_use]
    pub fn checkers_at(&self, location: Location) -> &Vector<Checker> {
        match location {
            Location::Bar(direction) => &self.bar[direction],
            Location::Point(position) => &self.points[position.index()].checkers,
            Location::Off(direction) => &self.off[direction],
        }
    }

    /// Points holding at least one `color` checker.
    pub fn occupied_points(&self, color: Color) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(move |p| p.color() == Some(color))
    }

    /// `color` checkers waiting on the bar of `direction`.
    #[must_use]
    pub fn bar_count(&self, color: Color, direction: Direction) -> usize {
        self.bar[direction].iter().filter(|c| c.color == color).count()
    }

    /// `color` checkers borne off toward `direction`.
    #[must_use]
    pub fn off_count(&self, color: Color, direction: Direction) -> usize {
        self.off[direction].iter().filter(|c| c.color == color).count()
    }

    // === Invariants ===

    /// Checkers of each color across points, bars, and off trays.
    #[must_use]
    pub fn checker_counts(&self) -> ColorMap<usize> {
        let mut counts = ColorMap::with_value(0);
        let containers = self
            .points
            .iter()
            .map(|p| &p.checkers)
            .chain(self.bar.iter().map(|(_, checkers)| checkers))
            .chain(self.off.iter().map(|(_, checkers)| checkers));
        for checkers in containers {
            for checker in checkers {
                counts[checker.color] += 1;
            }
        }
        counts
    }

    /// Fails unless each color has exactly 15 checkers.
    pub fn validate_checker_counts(&self) -> Result<()> {
        for (color, &count) in self.checker_counts().iter() {
            if count != CHECKERS_PER_SIDE {
                return Err(EngineError::InvalidBoard {
                    reason: format!("{color} has {count} checkers, expected {CHECKERS_PER_SIDE}"),
                });
            }
        }
        Ok(())
    }

    /// Every `color` checker left in play is in its home board.
    #[must_use]
    pub fn all_home(&self, color: Color, direction: Direction) -> bool {
        self.bar_count(color, direction) == 0
            && self
                .occupied_points(color)
                .all(|p| p.position.get(direction) <= HOME_BOARD_SIZE)
    }

    /// No `color` checkers remain on points or the bar.
    #[must_use]
    pub fn has_borne_off_all(&self, color: Color, direction: Direction) -> bool {
        self.bar_count(color, direction) == 0 && self.occupied_points(color).next().is_none()
    }

    /// Pips `color` needs to bear off everything, moving in `direction`.
    ///
    /// Saturates at `u16::MAX` on oversized imports.
    #[must_use]
    pub fn pip_count(&self, color: Color, direction: Direction) -> u16 {
        let pips = |per_checker: u16, count: usize| {
            per_checker.saturating_mul(u16::try_from(count).unwrap_or(u16::MAX))
        };
        let on_points = self
            .occupied_points(color)
            .map(|p| pips(u16::from(p.position.get(direction)), p.len()))
            .fold(0u16, u16::saturating_add);
        on_points.saturating_add(pips(BAR_PIPS, self.bar_count(color, direction)))
    }

    // === Mutation ===

    /// Move the last checker of `origin` to `destination`.
    ///
    /// A lone opposing checker on the destination is sent to the bar of the
    /// opposite direction. Returns the new board and whether a hit happened.
    pub fn move_checker(
        &self,
        origin: Location,
        destination: Location,
        direction: Direction,
    ) -> Result<(Board, bool)> {
        let mut board = self.clone();
        let checker = board
            .container_mut(origin)
            .pop_back()
            .ok_or(EngineError::NoCheckerAt { location: origin })?;

        let mut hit = false;
        if let Location::Point(position) = destination {
            let point = &mut board.points[position.index()];
            if point.is_hit_for(checker.color) {
                if let Some(blot) = point.checkers.pop_back() {
                    board.bar[direction.opposite()].push_back(blot);
                    hit = true;
                }
            } else if !point.is_open_for(checker.color) {
                return Err(EngineError::IllegalMove { origin });
            }
        }

        board.container_mut(destination).push_back(checker);
        debug!(%origin, %destination, hit, "checker moved");
        Ok((board, hit))
    }

    fn container_mut(&mut self, location: Location) -> &mut Vector<Checker> {
        match location {
            Location::Bar(direction) => &mut self.bar[direction],
            Location::Point(position) => &mut self.points[position.index()].checkers,
            Location::Off(direction) => &mut self.off[direction],
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    /// Clockwise numbering, white as `W`, black as `B`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn label(point: &Point) -> String {
            match point.color() {
                Some(Color::White) => format!("W{}", point.len()),
                Some(Color::Black) => format!("B{}", point.len()),
                None => ".".to_string(),
            }
        }

        for n in 13..=24 {
            write!(f, "{n:>4}")?;
        }
        writeln!(f)?;
        for point in &self.points[12..24] {
            write!(f, "{:>4}", label(point))?;
        }
        writeln!(f)?;
        for point in self.points[0..12].iter().rev() {
            write!(f, "{:>4}", label(point))?;
        }
        writeln!(f)?;
        for n in (1..=12).rev() {
            write!(f, "{n:>4}")?;
        }
        writeln!(f)?;
        for direction in Direction::ALL {
            writeln!(
                f,
                "{direction}: bar {} off {}",
                self.bar[direction].len(),
                self.off[direction].len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board() {
        let board = Board::standard();

        assert!(board.validate_checker_counts().is_ok());
        assert_eq!(board.point_at(Direction::Clockwise, 6).unwrap().count(Color::White), 5);
        assert_eq!(board.point_at(Direction::Clockwise, 24).unwrap().count(Color::White), 2);
        assert_eq!(
            board.point_at(Direction::Counterclockwise, 13).unwrap().count(Color::Black),
            5
        );
        assert_eq!(board.pip_count(Color::White, Direction::Clockwise), 167);
        assert_eq!(board.pip_count(Color::Black, Direction::Counterclockwise), 167);
    }

    #[test]
    fn test_standard_matches_import() {
        for direction in Direction::ALL {
            let imported = Board::from_import(&crate::board::standard_import(direction)).unwrap();
            assert_eq!(Board::standard_for(direction), imported);
        }
    }

    #[test]
    fn test_pip_count_saturates() {
        let entries: Vec<_> = (0..20)
            .map(|_| BoardImportEntry::bar(Direction::Clockwise, Color::White, 255))
            .collect();
        let board = Board::from_import(&entries).unwrap();
        assert_eq!(board.pip_count(Color::White, Direction::Clockwise), u16::MAX);
    }

    #[test]
    fn test_import_rejects_mixed_point() {
        let result = Board::from_import(&[
            BoardImportEntry::point(Direction::Clockwise, 5, Color::White, 1),
            BoardImportEntry::point(Direction::Clockwise, 5, Color::Black, 1),
        ]);
        assert!(matches!(result, Err(EngineError::InvalidBoard { .. })));
    }

    #[test]
    fn test_import_rejects_bad_point_and_missing_direction() {
        let result = Board::from_import(&[BoardImportEntry::point(
            Direction::Clockwise,
            25,
            Color::White,
            1,
        )]);
        assert!(matches!(result, Err(EngineError::InvalidBoard { .. })));

        let mut entry = BoardImportEntry::bar(Direction::Clockwise, Color::White, 1);
        entry.direction = None;
        assert!(matches!(
            Board::from_import(&[entry]),
            Err(EngineError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_move_checker_hit() {
        let board = Board::from_import(&[
            BoardImportEntry::point(Direction::Clockwise, 8, Color::White, 2),
            BoardImportEntry::point(Direction::Clockwise, 5, Color::Black, 1),
        ])
        .unwrap();
        let origin = Location::point(Direction::Clockwise, 8).unwrap();
        let destination = Location::point(Direction::Clockwise, 5).unwrap();

        let (moved, hit) = board
            .move_checker(origin, destination, Direction::Clockwise)
            .unwrap();

        assert!(hit);
        assert_eq!(moved.checkers_at(origin).len(), 1);
        assert_eq!(moved.point_at(Direction::Clockwise, 5).unwrap().color(), Some(Color::White));
        assert_eq!(moved.bar_count(Color::Black, Direction::Counterclockwise), 1);
        // Original untouched
        assert_eq!(board.checkers_at(origin).len(), 2);
        assert_eq!(moved.checker_counts(), board.checker_counts());
    }

    #[test]
    fn test_move_checker_blocked_and_empty() {
        let board = Board::from_import(&[
            BoardImportEntry::point(Direction::Clockwise, 8, Color::White, 1),
            BoardImportEntry::point(Direction::Clockwise, 5, Color::Black, 2),
        ])
        .unwrap();
        let origin = Location::point(Direction::Clockwise, 8).unwrap();
        let blocked = Location::point(Direction::Clockwise, 5).unwrap();
        let empty = Location::point(Direction::Clockwise, 3).unwrap();

        assert_eq!(
            board.move_checker(origin, blocked, Direction::Clockwise).map(|(_, hit)| hit),
            Err(EngineError::IllegalMove { origin })
        );
        assert_eq!(
            board.move_checker(empty, blocked, Direction::Clockwise).map(|(_, hit)| hit),
            Err(EngineError::NoCheckerAt { location: empty })
        );
    }

    #[test]
    fn test_home_and_borne_off() {
        let board = Board::from_import(&[
            BoardImportEntry::point(Direction::Counterclockwise, 1, Color::Black, 3),
            BoardImportEntry::off(Direction::Counterclockwise, Color::Black, 12),
        ])
        .unwrap();

        assert!(board.all_home(Color::Black, Direction::Counterclockwise));
        assert!(!board.has_borne_off_all(Color::Black, Direction::Counterclockwise));
        assert_eq!(board.pip_count(Color::Black, Direction::Counterclockwise), 3);
        assert_eq!(board.off_count(Color::Black, Direction::Counterclockwise), 12);
        assert!(board.has_borne_off_all(Color::White, Direction::Clockwise));
    }

    #[test]
    fn test_bar_blocks_home() {
        let board = Board::from_import(&[
            BoardImportEntry::point(Direction::Clockwise, 2, Color::White, 3),
            BoardImportEntry::bar(Direction::Clockwise, Color::White, 1),
        ])
        .unwrap();

        assert!(!board.all_home(Color::White, Direction::Clockwise));
        assert_eq!(board.pip_count(Color::White, Direction::Clockwise), 6 + 25);
    }

    #[test]
    fn test_display_mentions_bars() {
        let text = Board::standard().to_string();
        assert!(text.contains("W5"));
        assert!(text.contains("B2"));
        assert!(text.contains("clockwise: bar 0 off 0"));
    }
}
