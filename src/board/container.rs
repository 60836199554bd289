//! Checkers and the containers that hold them.
//!
//! ## Numbering
//!
//! Every point has two position numbers, one per direction, with
//! `counterclockwise = 25 - clockwise`. A player only ever sees the number
//! for their own direction.
//!
//! ## Locations
//!
//! `Location` names any container: a point, or the bar / off tray of one
//! direction. Checker sequences are `im::Vector`s so boards clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{CheckerId, Color, Direction};

/// Number of points on the board.
pub const POINT_COUNT: u8 = 24;

/// A single checker. Owned by exactly one container at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    pub id: CheckerId,
    pub color: Color,
}

/// A point's two position numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointPosition {
    pub clockwise: u8,
    pub counterclockwise: u8,
}

impl PointPosition {
    /// Position from its clockwise number (1-24).
    #[must_use]
    pub fn from_clockwise(clockwise: u8) -> Option<Self> {
        (1..=POINT_COUNT).contains(&clockwise).then(|| Self {
            clockwise,
            counterclockwise: POINT_COUNT + 1 - clockwise,
        })
    }

    /// Position as seen by a player moving in `direction`.
    #[must_use]
    pub fn for_direction(direction: Direction, position: u8) -> Option<Self> {
        match direction {
            Direction::Clockwise => Self::from_clockwise(position),
            Direction::Counterclockwise => {
                if (1..=POINT_COUNT).contains(&position) {
                    Self::from_clockwise(POINT_COUNT + 1 - position)
                } else {
                    None
                }
            }
        }
    }

    /// The number a player moving in `direction` sees.
    #[must_use]
    pub fn get(&self, direction: Direction) -> u8 {
        match direction {
            Direction::Clockwise => self.clockwise,
            Direction::Counterclockwise => self.counterclockwise,
        }
    }

    /// Both numbers present, in range, and consistent.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..=POINT_COUNT).contains(&self.clockwise)
            && u16::from(self.clockwise) + u16::from(self.counterclockwise)
                == u16::from(POINT_COUNT) + 1
    }

    pub(crate) fn index(&self) -> usize {
        (self.clockwise - 1) as usize
    }
}

/// Any checker container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Checkers of the player moving in this direction waiting to reenter.
    Bar(Direction),
    Point(PointPosition),
    /// Checkers of the player moving in this direction that finished.
    Off(Direction),
}

impl Location {
    /// Point location as seen from `direction`.
    #[must_use]
    pub fn point(direction: Direction, position: u8) -> Option<Self> {
        PointPosition::for_direction(direction, position).map(Location::Point)
    }

    #[must_use]
    pub fn is_bar(&self) -> bool {
        matches!(self, Location::Bar(_))
    }

    #[must_use]
    pub fn is_off(&self) -> bool {
        matches!(self, Location::Off(_))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Bar(direction) => write!(f, "bar ({direction})"),
            Location::Point(position) => write!(
                f,
                "point {}/{}",
                position.clockwise, position.counterclockwise
            ),
            Location::Off(direction) => write!(f, "off ({direction})"),
        }
    }
}

/// One of the 24 points.
///
/// Holds checkers of a single color at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub(crate) position: PointPosition,
    pub(crate) checkers: Vector<Checker>,
}

impl Point {
    pub(crate) fn empty(position: PointPosition) -> Self {
        Self {
            position,
            checkers: Vector::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> PointPosition {
        self.position
    }

    #[must_use]
    pub fn checkers(&self) -> &Vector<Checker> {
        &self.checkers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Color occupying this point, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.checkers.front().map(|checker| checker.color)
    }

    /// Number of `color` checkers here.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        if self.color() == Some(color) {
            self.checkers.len()
        } else {
            0
        }
    }

    /// A `color` checker may land here: empty, own checkers, or a lone
    /// opposing blot.
    #[must_use]
    pub fn is_open_for(&self, color: Color) -> bool {
        match self.color() {
            None => true,
            Some(occupant) if occupant == color => true,
            Some(_) => self.checkers.len() == 1,
        }
    }

    /// Landing here with `color` hits a blot.
    #[must_use]
    pub fn is_hit_for(&self, color: Color) -> bool {
        self.checkers.len() == 1 && self.color() != Some(color)
    }
}
