//! Fetching games by id.
//!
//! Move entry points that only know a `GameId` take a `GameLookup`. Any
//! `Fn(GameId) -> Option<Game>` closure is one; `InMemoryGameStore` is a
//! simple owned implementation.

use rustc_hash::FxHashMap;
use tracing::instrument;

use crate::board::Location;
use crate::core::{EngineError, GameId, Result};
use crate::play::MoveReport;

use super::state::Game;

/// Resolves a game id to the current state of that game.
pub trait GameLookup {
    fn lookup(&self, id: GameId) -> Option<Game>;
}

impl<F> GameLookup for F
where
    F: Fn(GameId) -> Option<Game>,
{
    fn lookup(&self, id: GameId) -> Option<Game> {
        self(id)
    }
}

/// Games held in memory, one state per id.
#[derive(Clone, Debug, Default)]
pub struct InMemoryGameStore {
    games: FxHashMap<GameId, Game>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `game`, replacing any previous state with the same id.
    pub fn insert(&mut self, game: Game) {
        self.games.insert(game.id(), game);
    }

    #[must_use]
    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    pub fn remove(&mut self, id: GameId) -> Option<Game> {
        self.games.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameLookup for InMemoryGameStore {
    fn lookup(&self, id: GameId) -> Option<Game> {
        self.games.get(&id).cloned()
    }
}

/// Look a game up and move one checker in it.
#[instrument(skip(lookup))]
pub fn move_by_id(
    lookup: &impl GameLookup,
    id: GameId,
    origin: Location,
) -> Result<(Game, MoveReport)> {
    let game = lookup.lookup(id).ok_or(EngineError::GameNotFound { id })?;
    game.make_move(origin)
}
