//! # backgammon-engine
//!
//! A deterministic backgammon rules engine.
//!
//! ## Design Principles
//!
//! 1. **Immutable Transitions**: Every operation takes a state and returns a
//!    new one. Old `Game`, `Board`, and `Play` values stay valid snapshots.
//!
//! 2. **States as Types**: Game phases, cube states, dice, and per-die moves
//!    are tagged enums. A `moving` game always has a play; a game rolling
//!    for start never has an active color.
//!
//! 3. **Seeded Randomness**: Dice come from a caller-owned `GameRng`, and
//!    every random transition has a `*_with` twin taking the outcome.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Checker containers are `im::Vector`s,
//!   so cloning a board for the next state is cheap.
//!
//! - **Two Numberings**: Each point is numbered 1-24 from both directions.
//!   A player only ever sees positions in their own direction.
//!
//! ## Modules
//!
//! - `core`: Colors, directions, ids, RNG, dice, cube, players, errors
//! - `board`: Points, bar and off trays, board import, move legality
//! - `play`: Per-die moves and turn orchestration with auto-switching
//! - `game`: The game state machine, builder, and lookup
//! - `gnu`: GNU Backgammon Position ID codec
//! - `robot`: Move suggestion interface for AI players
//! - `sim`: Seeded batch self-play

pub mod core;
pub mod board;
pub mod play;
pub mod game;
pub mod gnu;
pub mod robot;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Direction, DirectionMap,
    CheckerId, GameId, PlayerId,
    GameRng,
    Cube, CubeStateKind,
    Dice, Roll,
    Player, PlayerStateKind, Players,
    EngineError, Result,
};

pub use crate::board::{
    Board, BoardImportEntry, Checker, Location, MoveKind, Point, PointPosition, PossibleMove,
};

pub use crate::play::{Move, MoveReport, MoveState, MoveStateKind, Play};

pub use crate::game::{
    move_by_id, Game, GameBuilder, GameInit, GameLookup, GamePhase, GameStateKind,
    InMemoryGameStore,
};

pub use crate::gnu::{export_position_id, import_position_id, ImportedPosition};

pub use crate::robot::{MoveSuggester, RandomSuggester};

pub use crate::sim::{EngineRunner, SimulationConfig, SimulationResult};
