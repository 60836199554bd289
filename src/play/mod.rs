//! Moves and plays.
//!
//! - `moves`: the per-die `Move` state machine
//! - `turn`: `Play`, the set of moves for one roll, with dice auto-switching

pub mod moves;
pub mod turn;

pub use moves::{Move, MoveState, MoveStateKind};
pub use turn::{MoveReport, Play, PlayMoveResult};
