//! Per-die move state machine.
//!
//! ```text
//! ready --start--> in-progress --complete--> completed
//! ready --no_move--> no-move
//! ```
//!
//! `completed` and `no-move` are terminal for the turn.

use serde::{Deserialize, Serialize};

use crate::board::{Location, MoveKind, PossibleMove};
use crate::core::{EngineError, Result};

/// Discriminant of `MoveState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStateKind {
    Ready,
    InProgress,
    Completed,
    NoMove,
}

impl std::fmt::Display for MoveStateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoveStateKind::Ready => "ready",
            MoveStateKind::InProgress => "in-progress",
            MoveStateKind::Completed => "completed",
            MoveStateKind::NoMove => "no-move",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveState {
    Ready,
    InProgress {
        origin: Location,
    },
    Completed {
        origin: Location,
        destination: Location,
        kind: MoveKind,
        is_hit: bool,
    },
    NoMove,
}

/// One die's share of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    id: u8,
    die_value: u8,
    state: MoveState,
    /// Legal applications of `die_value` on the board this move last saw.
    possible_moves: Vec<PossibleMove>,
}

impl Move {
    /// A fresh move for one die.
    #[must_use]
    pub fn ready(id: u8, die_value: u8, possible_moves: Vec<PossibleMove>) -> Self {
        Self {
            id,
            die_value,
            state: MoveState::Ready,
            possible_moves,
        }
    }

    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    #[must_use]
    pub fn die_value(&self) -> u8 {
        self.die_value
    }

    #[must_use]
    pub fn state(&self) -> &MoveState {
        &self.state
    }

    #[must_use]
    pub fn possible_moves(&self) -> &[PossibleMove] {
        &self.possible_moves
    }

    #[must_use]
    pub fn state_kind(&self) -> MoveStateKind {
        match self.state {
            MoveState::Ready => MoveStateKind::Ready,
            MoveState::InProgress { .. } => MoveStateKind::InProgress,
            MoveState::Completed { .. } => MoveStateKind::Completed,
            MoveState::NoMove => MoveStateKind::NoMove,
        }
    }

    /// What this move did, once it is terminal.
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        match self.state {
            MoveState::Completed { kind, .. } => Some(kind),
            MoveState::NoMove => Some(MoveKind::NoMove),
            MoveState::Ready | MoveState::InProgress { .. } => None,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Option<Location> {
        match self.state {
            MoveState::InProgress { origin } | MoveState::Completed { origin, .. } => Some(origin),
            MoveState::Ready | MoveState::NoMove => None,
        }
    }

    #[must_use]
    pub fn destination(&self) -> Option<Location> {
        match self.state {
            MoveState::Completed { destination, .. } => Some(destination),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self.state, MoveState::Completed { is_hit: true, .. })
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == MoveState::Ready
    }

    /// `completed` or `no-move`.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, MoveState::Completed { .. } | MoveState::NoMove)
    }

    fn transition_error(&self, to: MoveStateKind) -> EngineError {
        EngineError::InvalidMoveTransition {
            from: self.state_kind(),
            to,
        }
    }

    /// Pick the checker to move.
    pub fn start(&self, origin: Location) -> Result<Move> {
        if !self.is_ready() {
            return Err(self.transition_error(MoveStateKind::InProgress));
        }
        Ok(Move {
            state: MoveState::InProgress { origin },
            ..self.clone()
        })
    }

    /// Record where the checker landed.
    pub fn complete(&self, destination: Location, kind: MoveKind, is_hit: bool) -> Result<Move> {
        let MoveState::InProgress { origin } = self.state else {
            return Err(self.transition_error(MoveStateKind::Completed));
        };
        Ok(Move {
            state: MoveState::Completed {
                origin,
                destination,
                kind,
                is_hit,
            },
            ..self.clone()
        })
    }

    /// Give up this die for the turn.
    pub fn no_move(&self) -> Result<Move> {
        if !self.is_ready() {
            return Err(self.transition_error(MoveStateKind::NoMove));
        }
        Ok(Move {
            id: self.id,
            die_value: self.die_value,
            state: MoveState::NoMove,
            possible_moves: Vec::new(),
        })
    }

    /// Same move with a refreshed option list.
    #[must_use]
    pub(crate) fn with_possible_moves(&self, possible_moves: Vec<PossibleMove>) -> Move {
        Move {
            possible_moves,
            ..self.clone()
        }
    }
}
