//! Batch self-play.
//!
//! Runs independent seeded games between two robots until one side bears
//! off or the turn limit is hit. Doubling is never offered.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::core::{Color, GameId, GameRng, Result, Roll};
use crate::game::{Game, GameBuilder, GameStateKind};
use crate::robot::{MoveSuggester, RandomSuggester};

/// Configuration for a simulation batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Base seed, combined with the game index for each game's seed.
    pub seed: u64,

    /// Number of games in a batch.
    pub games: usize,

    /// Maximum turns per game (to stop runaway games).
    pub max_turns: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            games: 10,
            max_turns: 1000,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Seed for the game at `index`.
    pub fn game_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub index: usize,
    pub seed: u64,
    /// `None` when the turn limit ended the game.
    pub winner: Option<Color>,
    pub turns: usize,
    pub final_position_id: String,
    pub final_board: Board,
}

impl SimulationResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }
}

/// Plays robot-vs-robot games with one suggester for both sides.
pub struct EngineRunner<S: MoveSuggester = RandomSuggester> {
    config: SimulationConfig,
    suggester: S,
}

impl EngineRunner<RandomSuggester> {
    /// Runner with random robots on both sides.
    pub fn random(config: SimulationConfig) -> Self {
        Self::new(config, RandomSuggester)
    }
}

impl<S: MoveSuggester> EngineRunner<S> {
    pub fn new(config: SimulationConfig, suggester: S) -> Self {
        Self { config, suggester }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play the game at `index` to completion or the turn limit.
    #[instrument(skip(self))]
    pub fn run_game(&self, index: usize) -> Result<SimulationResult> {
        let seed = self.config.game_seed(index);
        let mut rng = GameRng::new(seed);
        let mut game = GameBuilder::new()
            .id(GameId::new(index as u64))
            .white_robot(true)
            .black_robot(true)
            .build()?
            .roll_for_start(&mut rng)?;
        let mut robot_rng = rng.fork();

        let mut turns = 0;
        while game.kind() != GameStateKind::Completed && turns < self.config.max_turns {
            game = self.play_turn(&game, &mut rng, &mut robot_rng)?;
            turns += 1;
        }

        let result = SimulationResult {
            index,
            seed,
            winner: game.winner(),
            turns,
            final_position_id: game.position_id(),
            final_board: game.board().clone(),
        };
        info!(winner = ?result.winner, turns, "game finished");
        Ok(result)
    }

    /// Dice and robot choices draw from separate streams.
    fn play_turn(&self, game: &Game, dice: &mut GameRng, robot: &mut GameRng) -> Result<Game> {
        let roll = Roll::random(dice);
        let origins = self.suggester.suggest(game, roll, robot)?;
        let mut game = game.roll_with(roll)?;
        for origin in origins {
            game = game.make_move(origin)?.0;
        }
        if game.kind() == GameStateKind::Completed {
            return Ok(game);
        }
        debug!(%roll, pips = ?game.active_player().map(|p| p.pip_count()), "turn played");
        game.to_moved()?.confirm_turn()
    }

    /// Play every game in the batch.
    pub fn run_batch(&self) -> Result<Vec<SimulationResult>> {
        (0..self.config.games).map(|index| self.run_game(index)).collect()
    }
}

/// Wins per color across a batch.
#[must_use]
pub fn win_counts(results: &[SimulationResult]) -> (usize, usize) {
    results.iter().fold((0, 0), |(white, black), result| match result.winner {
        Some(Color::White) => (white + 1, black),
        Some(Color::Black) => (white, black + 1),
        None => (white, black),
    })
}
