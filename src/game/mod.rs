//! The game aggregate and its collaborators.
//!
//! ## Game
//!
//! `Game` is immutable: every transition returns a new `Game` and leaves
//! the old one usable as a snapshot.
//!
//! ## Lookup
//!
//! `GameLookup` is the seam for callers that address games by id.

mod builder;
mod lookup;
mod state;

pub use builder::GameBuilder;
pub use lookup::{move_by_id, GameLookup, InMemoryGameStore};
pub use state::{Game, GameInit, GamePhase, GameStateKind};
