//! Identifiers for games, players, and checkers.
//!
//! Checker IDs are allocated per board in import order, so two boards built
//! from the same import spec assign the same IDs to the same checkers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a checker within one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CheckerId(pub u16);

impl CheckerId {
    /// Create a new checker ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Game identifier, used by lookup collaborators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_id_next() {
        assert_eq!(CheckerId::new(4).next(), CheckerId::new(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::new(1).to_string(), "Player 1");
        assert_eq!(GameId::new(42).to_string(), "Game 42");
    }
}
