//! Engine error type.
//!
//! Every illegal transition fails synchronously with an `EngineError`.
//! Nothing in the engine retries or silently recovers.

use derive_more::{Display, Error};

use crate::board::Location;
use crate::core::color::Color;
use crate::core::entity::GameId;
use crate::game::GameStateKind;
use crate::play::MoveStateKind;

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    // === Construction ===
    /// A state that needs an active color was built without one.
    #[display("Active color must be provided")]
    ActiveColorRequired,

    /// `rolling-for-start` was given an active color.
    #[display("Active color must not be provided for rolling-for-start")]
    UnexpectedActiveColor,

    /// `moving` or `moved` was built without an active play.
    #[display("Active play must be provided")]
    ActivePlayRequired,

    /// The active play was rolled for the other color.
    #[display("Active play belongs to {play}, not the active color {active}")]
    ActivePlayMismatch { active: Color, play: Color },

    /// Games cannot start out completed.
    #[display("Cannot initialize a game in completed state")]
    CannotInitializeCompleted,

    // === Lookup ===
    #[display("Players not found")]
    PlayersNotFound,

    #[display("Active player not found")]
    ActivePlayerNotFound,

    #[display("Inactive player not found")]
    InactivePlayerNotFound,

    #[display("Game not found: {id}")]
    GameNotFound { id: GameId },

    // === Rule violations ===
    #[display("Cannot {action} from state {state}")]
    InvalidStateTransition {
        action: &'static str,
        state: GameStateKind,
    },

    #[display("Player does not own Cube")]
    DoesNotOwnCube,

    #[display("Cube is already at its maximum value")]
    CubeMaxxed,

    #[display("A double has already been offered")]
    DoubleAlreadyOffered,

    #[display("No double has been offered")]
    CubeNotOffered,

    #[display("Player cannot respond to their own double")]
    CannotRespondToOwnDouble,

    #[display("No legal move from {origin}")]
    IllegalMove { origin: Location },

    #[display("No checker at {location}")]
    NoCheckerAt { location: Location },

    #[display("No ready moves remain in this play")]
    NoReadyMoves,

    #[display("Not all moves are completed or no-move")]
    MovesNotResolved,

    #[display("Move cannot go from {from} to {to}")]
    InvalidMoveTransition {
        from: MoveStateKind,
        to: MoveStateKind,
    },

    // === Dice ===
    #[display("Invalid die value: {value}")]
    InvalidDieValue { value: u8 },

    #[display("Dice have not been rolled")]
    DiceNotRolled,

    // === Structural ===
    #[display("Invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[display("Invalid players: {reason}")]
    InvalidPlayers { reason: String },

    // === Interchange ===
    #[display("Invalid GNU position id: {reason}")]
    InvalidPositionId { reason: String },

    #[display("Snapshot error: {reason}")]
    Snapshot { reason: String },
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::ActiveColorRequired.to_string(),
            "Active color must be provided"
        );
        assert_eq!(
            EngineError::ActivePlayRequired.to_string(),
            "Active play must be provided"
        );
        assert_eq!(
            EngineError::DoesNotOwnCube.to_string(),
            "Player does not own Cube"
        );
        assert_eq!(
            EngineError::InvalidStateTransition {
                action: "double",
                state: GameStateKind::Moving,
            }
            .to_string(),
            "Cannot double from state moving"
        );
    }
}
