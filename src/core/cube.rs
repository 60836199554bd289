//! Doubling cube.
//!
//! ## States
//!
//! - `Initialized`: centered, never turned, no value yet
//! - `Offered`: a double is on the table; value and owner are unchanged
//! - `Doubled`: turned at least once, owned by the last accepter
//! - `Maxxed`: at 64, no owner, no further doubles
//!
//! The value only changes when an offer is accepted.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{EngineError, Result};

/// Highest cube value.
pub const MAX_CUBE_VALUE: u8 = 64;

/// Discriminant of `Cube`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CubeStateKind {
    Initialized,
    Offered,
    Doubled,
    Maxxed,
}

/// Doubling cube state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cube {
    #[default]
    Initialized,
    Offered {
        value: Option<u8>,
        owner: Option<Color>,
        offered_by: Color,
    },
    Doubled {
        value: u8,
        owner: Color,
    },
    Maxxed,
}

impl Cube {
    #[must_use]
    pub fn kind(&self) -> CubeStateKind {
        match self {
            Cube::Initialized => CubeStateKind::Initialized,
            Cube::Offered { .. } => CubeStateKind::Offered,
            Cube::Doubled { .. } => CubeStateKind::Doubled,
            Cube::Maxxed => CubeStateKind::Maxxed,
        }
    }

    /// Current value; `None` until the first accepted double.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        match self {
            Cube::Initialized => None,
            Cube::Offered { value, .. } => *value,
            Cube::Doubled { value, .. } => Some(*value),
            Cube::Maxxed => Some(MAX_CUBE_VALUE),
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<Color> {
        match self {
            Cube::Initialized | Cube::Maxxed => None,
            Cube::Offered { owner, .. } => *owner,
            Cube::Doubled { owner, .. } => Some(*owner),
        }
    }

    #[must_use]
    pub fn offered_by(&self) -> Option<Color> {
        match self {
            Cube::Offered { offered_by, .. } => Some(*offered_by),
            _ => None,
        }
    }

    /// Whether `player` may offer a double right now.
    #[must_use]
    pub fn can_offer(&self, player: Color) -> bool {
        match self {
            Cube::Initialized => true,
            Cube::Doubled { owner, .. } => *owner == player,
            Cube::Offered { .. } | Cube::Maxxed => false,
        }
    }

    fn check_owner(&self, player: Color) -> Result<()> {
        match self {
            Cube::Maxxed => Err(EngineError::CubeMaxxed),
            Cube::Offered { .. } => Err(EngineError::DoubleAlreadyOffered),
            _ if self.owner().is_some_and(|owner| owner != player) => {
                Err(EngineError::DoesNotOwnCube)
            }
            _ => Ok(()),
        }
    }

    /// Turn the cube for `player`: the value doubles (2 if unset) and the
    /// opponent takes ownership. Reaching 64 maxes the cube out.
    pub fn double(&self, player: Color) -> Result<Cube> {
        self.check_owner(player)?;
        let value = self.value().map_or(2, |v| v * 2);
        if value >= MAX_CUBE_VALUE {
            return Ok(Cube::Maxxed);
        }
        Ok(Cube::Doubled {
            value,
            owner: player.opponent(),
        })
    }

    /// Put a double on the table without changing the value.
    pub fn offer(&self, player: Color) -> Result<Cube> {
        self.check_owner(player)?;
        Ok(Cube::Offered {
            value: self.value(),
            owner: self.owner(),
            offered_by: player,
        })
    }

    /// Accept the pending offer; the accepter owns the turned cube.
    pub fn accept(&self, accepter: Color) -> Result<Cube> {
        let Cube::Offered {
            value,
            owner,
            offered_by,
        } = *self
        else {
            return Err(EngineError::CubeNotOffered);
        };
        if offered_by == accepter {
            return Err(EngineError::CannotRespondToOwnDouble);
        }
        let before = match (value, owner) {
            (Some(value), Some(owner)) => Cube::Doubled { value, owner },
            _ => Cube::Initialized,
        };
        before.double(offered_by)
    }
}
