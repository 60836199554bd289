//! Dice rolls.
//!
//! A `Roll` is an immutable pair of die values. `Dice` is the per-player
//! holder: either ready to roll or holding the current roll. Rolling and
//! switching always produce a new value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use super::rng::GameRng;

/// Die values consumed by one turn: two, or four for doubles.
pub type DieValues = SmallVec<[u8; 4]>;

/// An ordered pair of die values, each 1-6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    values: [u8; 2],
}

impl Roll {
    /// Create a roll, validating both faces.
    pub fn new(first: u8, second: u8) -> Result<Self> {
        for value in [first, second] {
            if !(1..=6).contains(&value) {
                return Err(EngineError::InvalidDieValue { value });
            }
        }
        Ok(Self {
            values: [first, second],
        })
    }

    /// Draw two independent uniform values.
    pub fn random(rng: &mut GameRng) -> Self {
        Self {
            values: [rng.roll_die(), rng.roll_die()],
        }
    }

    #[must_use]
    pub fn first(&self) -> u8 {
        self.values[0]
    }

    #[must_use]
    pub fn second(&self) -> u8 {
        self.values[1]
    }

    #[must_use]
    pub fn values(&self) -> [u8; 2] {
        self.values
    }

    /// Both dice show the same value.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.values[0] == self.values[1]
    }

    #[must_use]
    pub fn total(&self) -> u8 {
        self.values[0] + self.values[1]
    }

    /// The same roll with the dice in the opposite order.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            values: [self.values[1], self.values[0]],
        }
    }

    /// Die values available to the turn, in roll order.
    ///
    /// Doubles are played four times.
    #[must_use]
    pub fn die_values(&self) -> DieValues {
        if self.is_double() {
            SmallVec::from_slice(&[self.values[0]; 4])
        } else {
            SmallVec::from_slice(&self.values)
        }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.values[0], self.values[1])
    }
}

/// Discriminant of `Dice`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceStateKind {
    Ready,
    Rolled,
}

/// A player's dice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dice {
    /// Waiting to be rolled.
    #[default]
    Ready,
    /// Holding the current roll.
    Rolled { roll: Roll },
}

impl Dice {
    /// Roll fresh dice.
    #[must_use]
    pub fn roll(rng: &mut GameRng) -> Self {
        Dice::Rolled {
            roll: Roll::random(rng),
        }
    }

    /// Dice showing a known roll.
    #[must_use]
    pub fn rolled(roll: Roll) -> Self {
        Dice::Rolled { roll }
    }

    #[must_use]
    pub fn kind(&self) -> DiceStateKind {
        match self {
            Dice::Ready => DiceStateKind::Ready,
            Dice::Rolled { .. } => DiceStateKind::Rolled,
        }
    }

    #[must_use]
    pub fn current_roll(&self) -> Option<Roll> {
        match self {
            Dice::Ready => None,
            Dice::Rolled { roll } => Some(*roll),
        }
    }

    /// Swap the order of the rolled pair.
    pub fn switch_dice(&self) -> Result<Self> {
        match self {
            Dice::Ready => Err(EngineError::DiceNotRolled),
            Dice::Rolled { roll } => Ok(Dice::Rolled {
                roll: roll.swapped(),
            }),
        }
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.current_roll().is_some_and(|roll| roll.is_double())
    }

    #[must_use]
    pub fn total(&self) -> Option<u8> {
        self.current_roll().map(|roll| roll.total())
    }
}
