//! Move legality and generation.
//!
//! ## Priority
//!
//! 1. A player with checkers on the bar may only reenter. The entry point
//!    is the player's position `25 - die`.
//! 2. Otherwise every occupied point may move `die` pips toward home, onto
//!    an empty point, an own point, or a lone opposing blot.
//! 3. With everything home, a checker on exactly position `die` bears off.
//!    If no checker sits above `die`, the highest checker bears off instead.
//!
//! ## Auto-switch
//!
//! `possible_moves_with_switch` tries one die and falls back to the other,
//! reporting which value was actually used.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::container::{Location, PointPosition, POINT_COUNT};
use super::layout::{Board, HOME_BOARD_SIZE};
use crate::core::{Direction, Player};

/// What a single die application does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    PointToPoint,
    Reenter,
    BearOff,
    NoMove,
}

/// One legal application of one die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PossibleMove {
    pub origin: Location,
    pub destination: Location,
    pub die_value: u8,
    pub direction: Direction,
}

impl PossibleMove {
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        match (self.origin, self.destination) {
            (Location::Bar(_), _) => MoveKind::Reenter,
            (_, Location::Off(_)) => MoveKind::BearOff,
            _ => MoveKind::PointToPoint,
        }
    }
}

/// Result of a die lookup with auto-switching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchedMoves {
    /// Legal moves for `used_die_value`.
    pub moves: Vec<PossibleMove>,
    pub used_die_value: u8,
    pub auto_switched: bool,
    pub original_die_value: u8,
}

impl Board {
    /// Every legal application of `die_value` for `player`.
    #[must_use]
    pub fn possible_moves(&self, player: &Player, die_value: u8) -> Vec<PossibleMove> {
        let color = player.color();
        let direction = player.direction();

        if self.bar_count(color, direction) > 0 {
            return self.reentry(player, die_value).into_iter().collect();
        }

        let mut moves: Vec<PossibleMove> = self
            .occupied_points(color)
            .filter_map(|point| {
                let origin = point.position().get(direction);
                let target = origin.checked_sub(die_value).filter(|&p| p >= 1)?;
                let destination = PointPosition::for_direction(direction, target)?;
                self.point(destination).is_open_for(color).then_some(PossibleMove {
                    origin: Location::Point(point.position()),
                    destination: Location::Point(destination),
                    die_value,
                    direction,
                })
            })
            .collect();

        moves.extend(self.bear_off(player, die_value));
        moves
    }

    fn reentry(&self, player: &Player, die_value: u8) -> Option<PossibleMove> {
        let direction = player.direction();
        let target = (POINT_COUNT + 1).checked_sub(die_value)?;
        let destination = PointPosition::for_direction(direction, target)?;
        self.point(destination)
            .is_open_for(player.color())
            .then_some(PossibleMove {
                origin: Location::Bar(direction),
                destination: Location::Point(destination),
                die_value,
                direction,
            })
    }

    fn bear_off(&self, player: &Player, die_value: u8) -> Option<PossibleMove> {
        let color = player.color();
        let direction = player.direction();
        if !self.all_home(color, direction) {
            return None;
        }

        let highest = self
            .occupied_points(color)
            .map(|p| p.position().get(direction))
            .max()?;

        let origin = if self.point_at(direction, die_value).is_some_and(|p| p.count(color) > 0) {
            die_value
        } else if highest < die_value {
            highest
        } else {
            return None;
        };

        debug_assert!(origin <= HOME_BOARD_SIZE);
        Some(PossibleMove {
            origin: Location::point(direction, origin)?,
            destination: Location::Off(direction),
            die_value,
            direction,
        })
    }

    /// Legal moves for `die_value`, falling back to `other_die_value`.
    ///
    /// Without an `origin`, the fallback happens when `die_value` has no
    /// moves at all. With an `origin`, it happens when that origin has no
    /// move under `die_value`. Doubles never switch. When neither die
    /// works the result is `die_value`'s, unswitched.
    #[must_use]
    pub fn possible_moves_with_switch(
        &self,
        player: &Player,
        die_value: u8,
        other_die_value: u8,
        origin: Option<Location>,
    ) -> SwitchedMoves {
        let usable = |moves: &[PossibleMove]| match origin {
            Some(origin) => moves.iter().any(|m| m.origin == origin),
            None => !moves.is_empty(),
        };

        let primary = self.possible_moves(player, die_value);
        if usable(&primary) || die_value == other_die_value {
            return SwitchedMoves {
                moves: primary,
                used_die_value: die_value,
                auto_switched: false,
                original_die_value: die_value,
            };
        }

        let secondary = self.possible_moves(player, other_die_value);
        if usable(&secondary) {
            debug!(die_value, other_die_value, ?origin, "auto-switched dice");
            return SwitchedMoves {
                moves: secondary,
                used_die_value: other_die_value,
                auto_switched: true,
                original_die_value: die_value,
            };
        }

        SwitchedMoves {
            moves: primary,
            used_die_value: die_value,
            auto_switched: false,
            original_die_value: die_value,
        }
    }
}
