//! Board import spec.
//!
//! A non-default layout is described as a list of entries, each placing
//! `qty` checkers of one color on a point, a bar, or an off tray. Tests and
//! the GNU importer build boards this way.
//!
//! ```
//! use backgammon_engine::board::{Board, BoardImportEntry};
//! use backgammon_engine::core::{Color, Direction};
//!
//! let board = Board::from_import(&[
//!     BoardImportEntry::point(Direction::Counterclockwise, 1, Color::Black, 3),
//!     BoardImportEntry::bar(Direction::Clockwise, Color::White, 1),
//! ])
//! .unwrap();
//! assert_eq!(board.checker_counts()[Color::Black], 3);
//! ```

use serde::{Deserialize, Serialize};

use super::container::{PointPosition, POINT_COUNT};
use crate::core::{Color, Direction};

/// Where an import entry places its checkers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportPosition {
    Bar,
    Point { clockwise: u8, counterclockwise: u8 },
    Off,
}

/// Checkers placed by one import entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCheckers {
    pub color: Color,
    pub qty: u8,
}

/// One line of a board import spec.
///
/// `direction` is required for `Bar` and `Off` and ignored for points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardImportEntry {
    pub position: ImportPosition,
    pub direction: Option<Direction>,
    pub checkers: ImportCheckers,
}

impl BoardImportEntry {
    /// Checkers on the point numbered `position` from `direction`.
    ///
    /// Out-of-range positions produce an entry the board rejects.
    #[must_use]
    pub fn point(direction: Direction, position: u8, color: Color, qty: u8) -> Self {
        let (clockwise, counterclockwise) = match PointPosition::for_direction(direction, position) {
            Some(point) => (point.clockwise, point.counterclockwise),
            None => (position, position),
        };
        Self {
            position: ImportPosition::Point {
                clockwise,
                counterclockwise,
            },
            direction: Some(direction),
            checkers: ImportCheckers { color, qty },
        }
    }

    #[must_use]
    pub fn bar(direction: Direction, color: Color, qty: u8) -> Self {
        Self {
            position: ImportPosition::Bar,
            direction: Some(direction),
            checkers: ImportCheckers { color, qty },
        }
    }

    #[must_use]
    pub fn off(direction: Direction, color: Color, qty: u8) -> Self {
        Self {
            position: ImportPosition::Off,
            direction: Some(direction),
            checkers: ImportCheckers { color, qty },
        }
    }
}

/// Opening layout, per side: 2 on 24, 5 on 13, 3 on 8, 5 on 6.
pub(crate) const OPENING: [(u8, u8); 4] = [(24, 2), (13, 5), (8, 3), (6, 5)];

/// Standard opening spec for the given color/direction pairing.
#[must_use]
pub fn standard_import(white_direction: Direction) -> Vec<BoardImportEntry> {
    let sides = [
        (Color::White, white_direction),
        (Color::Black, white_direction.opposite()),
    ];
    sides
        .into_iter()
        .flat_map(|(color, direction)| {
            OPENING
                .into_iter()
                .map(move |(position, qty)| BoardImportEntry::point(direction, position, color, qty))
        })
        .collect()
}

/// Checkers a full side holds.
pub const CHECKERS_PER_SIDE: usize = 15;

pub(crate) fn validate_point(clockwise: u8, counterclockwise: u8) -> Option<PointPosition> {
    let position = PointPosition {
        clockwise,
        counterclockwise,
    };
    (position.is_valid() && clockwise <= POINT_COUNT).then_some(position)
}
