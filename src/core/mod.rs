//! Core engine types: colors, identifiers, RNG, dice, cube, players, errors.
//!
//! These are the leaves of the engine. Nothing here knows about the board
//! or about turn sequencing.

pub mod color;
pub mod cube;
pub mod dice;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use color::{Color, ColorMap, Direction, DirectionMap, Side, SideMap};
pub use cube::{Cube, CubeStateKind, MAX_CUBE_VALUE};
pub use dice::{Dice, DiceStateKind, DieValues, Roll};
pub use entity::{CheckerId, GameId, PlayerId};
pub use error::{EngineError, Result};
pub use player::{Player, PlayerStateKind, Players, STARTING_PIP_COUNT};
pub use rng::GameRng;
