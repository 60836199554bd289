//! Top-level game state machine.
//!
//! ```text
//! rolling-for-start --roll_for_start--> rolled-for-start --roll--> moving
//! moving --make_move (repeated)--> moving --to_moved--> moved
//! moved --confirm_turn--> rolling (next player)
//! rolling --roll--> moving
//! rolling --double--> doubled --accept_double--> rolling (cube turned)
//! doubled --refuse_double--> completed (doubler wins)
//! moving --make_move (last checker off)--> completed
//! ```
//!
//! `GamePhase` carries exactly the fields each state needs, so an active
//! color or play can never be missing. Unchecked input goes through
//! `Game::initialize`, which enforces the same rules at runtime.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, Location};
use crate::core::{
    Color, Cube, Dice, EngineError, GameId, GameRng, Player, PlayerStateKind, Players, Result,
    Roll,
};
use crate::play::{MoveReport, Play};

/// Discriminant of `GamePhase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStateKind {
    RollingForStart,
    RolledForStart,
    Rolling,
    Moving,
    Moved,
    Doubled,
    Completed,
}

impl std::fmt::Display for GameStateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStateKind::RollingForStart => "rolling-for-start",
            GameStateKind::RolledForStart => "rolled-for-start",
            GameStateKind::Rolling => "rolling",
            GameStateKind::Moving => "moving",
            GameStateKind::Moved => "moved",
            GameStateKind::Doubled => "doubled",
            GameStateKind::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// Per-state data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    RollingForStart,
    RolledForStart { active: Color },
    Rolling { active: Color },
    Moving { active: Color, play: Play },
    Moved { active: Color, play: Play },
    /// The active player has offered; the cube records the offer.
    Doubled { active: Color },
    Completed { winner: Color },
}

impl GamePhase {
    #[must_use]
    pub fn kind(&self) -> GameStateKind {
        match self {
            GamePhase::RollingForStart => GameStateKind::RollingForStart,
            GamePhase::RolledForStart { .. } => GameStateKind::RolledForStart,
            GamePhase::Rolling { .. } => GameStateKind::Rolling,
            GamePhase::Moving { .. } => GameStateKind::Moving,
            GamePhase::Moved { .. } => GameStateKind::Moved,
            GamePhase::Doubled { .. } => GameStateKind::Doubled,
            GamePhase::Completed { .. } => GameStateKind::Completed,
        }
    }
}

/// Unchecked game fields, as they arrive from outside the engine.
///
/// `Game::initialize` turns this into a `Game`, rejecting combinations
/// the requested state does not allow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameInit {
    pub id: GameId,
    pub state_kind: GameStateKind,
    pub players: Vec<Player>,
    pub board: Board,
    pub cube: Cube,
    pub active_color: Option<Color>,
    pub active_play: Option<Play>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    players: Players,
    board: Board,
    cube: Cube,
    phase: GamePhase,
}

impl Game {
    /// A new game on the standard board, white moving clockwise.
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self::waiting(id, Players::standard(), Board::standard(), Cube::default())
    }

    /// A game waiting to roll for start with the given pieces.
    ///
    /// Fails unless each color has exactly 15 checkers on the board.
    pub fn from_parts(id: GameId, players: Players, board: Board, cube: Cube) -> Result<Self> {
        board.validate_checker_counts()?;
        Ok(Self::waiting(id, players, board, cube))
    }

    fn waiting(id: GameId, players: Players, board: Board, cube: Cube) -> Self {
        let players = refresh_pip_counts(players, &board);
        Self {
            id,
            players,
            board,
            cube,
            phase: GamePhase::RollingForStart,
        }
    }

    /// Build a game in any non-terminal state from unchecked fields.
    #[instrument(skip(init), fields(id = %init.id, state = %init.state_kind))]
    pub fn initialize(init: GameInit) -> Result<Game> {
        let GameInit {
            id,
            state_kind,
            players,
            board,
            cube,
            active_color,
            active_play,
        } = init;

        if state_kind == GameStateKind::Completed {
            return Err(EngineError::CannotInitializeCompleted);
        }
        if players.is_empty() {
            return Err(EngineError::PlayersNotFound);
        }

        let phase = match state_kind {
            GameStateKind::RollingForStart => {
                if active_color.is_some() {
                    return Err(EngineError::UnexpectedActiveColor);
                }
                GamePhase::RollingForStart
            }
            _ => {
                let active = active_color.ok_or(EngineError::ActiveColorRequired)?;
                if !players.iter().any(|p| p.color() == active) {
                    return Err(EngineError::ActivePlayerNotFound);
                }
                if !players.iter().any(|p| p.color() == active.opponent()) {
                    return Err(EngineError::InactivePlayerNotFound);
                }
                match state_kind {
                    GameStateKind::RolledForStart => GamePhase::RolledForStart { active },
                    GameStateKind::Rolling => GamePhase::Rolling { active },
                    GameStateKind::Moving => GamePhase::Moving {
                        active,
                        play: play_for(active, active_play)?,
                    },
                    GameStateKind::Moved => {
                        let play = play_for(active, active_play)?;
                        if !play.is_resolved() {
                            return Err(EngineError::MovesNotResolved);
                        }
                        GamePhase::Moved { active, play }
                    }
                    GameStateKind::Doubled => {
                        if cube.offered_by() != Some(active) {
                            return Err(EngineError::CubeNotOffered);
                        }
                        GamePhase::Doubled { active }
                    }
                    GameStateKind::RollingForStart | GameStateKind::Completed => {
                        return Err(EngineError::InvalidStateTransition {
                            action: "initialize",
                            state: state_kind,
                        })
                    }
                }
            }
        };

        board.validate_checker_counts()?;
        let players = refresh_pip_counts(Players::try_from_vec(players)?, &board);
        Ok(Game {
            id,
            players,
            board,
            cube,
            phase,
        })
    }

    // === Access ===

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> GameStateKind {
        self.phase.kind()
    }

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Whose turn it is; `None` before the start roll and after the end.
    #[must_use]
    pub fn active_color(&self) -> Option<Color> {
        match &self.phase {
            GamePhase::RollingForStart | GamePhase::Completed { .. } => None,
            GamePhase::RolledForStart { active }
            | GamePhase::Rolling { active }
            | GamePhase::Moving { active, .. }
            | GamePhase::Moved { active, .. }
            | GamePhase::Doubled { active } => Some(*active),
        }
    }

    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.active_color().map(|color| &self.players[color])
    }

    #[must_use]
    pub fn inactive_player(&self) -> Option<&Player> {
        self.active_color().map(|color| &self.players[color.opponent()])
    }

    #[must_use]
    pub fn active_play(&self) -> Option<&Play> {
        match &self.phase {
            GamePhase::Moving { play, .. } | GamePhase::Moved { play, .. } => Some(play),
            _ => None,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            GamePhase::Completed { winner } => Some(winner),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> EngineError {
        EngineError::InvalidStateTransition {
            action,
            state: self.kind(),
        }
    }

    fn with_phase(&self, players: Players, board: Board, cube: Cube, phase: GamePhase) -> Game {
        Game {
            id: self.id,
            players,
            board,
            cube,
            phase,
        }
    }

    // === Start ===

    /// Pick who moves first at random.
    pub fn roll_for_start(&self, rng: &mut GameRng) -> Result<Game> {
        let first = if rng.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        self.roll_for_start_with(first)
    }

    /// Start with a known first player.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn roll_for_start_with(&self, first: Color) -> Result<Game> {
        if self.kind() != GameStateKind::RollingForStart {
            return Err(self.invalid("roll for start"));
        }
        let players = set_states(
            self.players.clone(),
            first,
            PlayerStateKind::RolledForStart,
            PlayerStateKind::Inactive,
        );
        info!(%first, "rolled for start");
        Ok(self.with_phase(
            players,
            self.board.clone(),
            self.cube,
            GamePhase::RolledForStart { active: first },
        ))
    }

    // === Rolling ===

    #[must_use]
    pub fn can_roll(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::RolledForStart { .. } | GamePhase::Rolling { .. }
        )
    }

    /// Roll the active player's dice and start moving.
    pub fn roll(&self, rng: &mut GameRng) -> Result<Game> {
        self.roll_with(Roll::random(rng))
    }

    /// Roll with a known outcome.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn roll_with(&self, roll: Roll) -> Result<Game> {
        let active = match self.phase {
            GamePhase::RolledForStart { active } | GamePhase::Rolling { active } => active,
            _ => return Err(self.invalid("roll")),
        };
        let player = self.players[active]
            .clone()
            .with_dice(Dice::rolled(roll))
            .with_state(PlayerStateKind::Moving);
        let play = Play::initialize(&self.board, &player)?;
        let players = self.players.clone().update(active, |_| player);
        debug!(%active, %roll, "rolled");
        Ok(self.with_phase(
            players,
            self.board.clone(),
            self.cube,
            GamePhase::Moving { active, play },
        ))
    }

    // === Moving ===

    /// Origins the active player may move from right now.
    #[must_use]
    pub fn legal_origins(&self) -> Vec<Location> {
        match &self.phase {
            GamePhase::Moving { play, .. } => play.legal_origins(&self.board),
            _ => Vec::new(),
        }
    }

    /// Move one checker for the active player.
    ///
    /// Bearing off the last checker completes the game.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn make_move(&self, origin: Location) -> Result<(Game, MoveReport)> {
        let GamePhase::Moving { active, play } = &self.phase else {
            return Err(self.invalid("move"));
        };
        let active = *active;
        let result = play.move_checker(&self.board, origin)?;

        let mut players = refresh_pip_counts(self.players.clone(), &result.board);
        if result.report.auto_switched {
            let dice = players[active].dice().switch_dice()?;
            players = players.update(active, |p| p.with_dice(dice));
        }

        let player = &players[active];
        let phase = if result
            .board
            .has_borne_off_all(player.color(), player.direction())
        {
            info!(winner = %active, "last checker borne off");
            players = set_states(
                players,
                active,
                PlayerStateKind::Winner,
                PlayerStateKind::Inactive,
            );
            GamePhase::Completed { winner: active }
        } else {
            GamePhase::Moving {
                active,
                play: result.play,
            }
        };

        let game = self.with_phase(players, result.board, self.cube, phase);
        Ok((game, result.report))
    }

    /// Close the move phase once every move is resolved.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn to_moved(&self) -> Result<Game> {
        let GamePhase::Moving { active, play } = &self.phase else {
            return Err(self.invalid("finish moving"));
        };
        if !play.is_resolved() {
            return Err(EngineError::MovesNotResolved);
        }
        let players = self
            .players
            .clone()
            .update(*active, |p| p.with_state(PlayerStateKind::Moved));
        Ok(self.with_phase(
            players,
            self.board.clone(),
            self.cube,
            GamePhase::Moved {
                active: *active,
                play: play.clone(),
            },
        ))
    }

    /// Hand the turn to the other player.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn confirm_turn(&self) -> Result<Game> {
        let GamePhase::Moved { active, .. } = self.phase else {
            return Err(self.invalid("confirm turn"));
        };
        let next = active.opponent();
        let players = set_states(
            self.players.clone(),
            next,
            PlayerStateKind::Rolling,
            PlayerStateKind::Inactive,
        )
        .update(active, |p| p.with_dice(Dice::Ready));
        debug!(%next, "turn confirmed");
        Ok(self.with_phase(
            players,
            self.board.clone(),
            self.cube,
            GamePhase::Rolling { active: next },
        ))
    }

    // === Doubling ===

    /// The active player may offer a double now.
    #[must_use]
    pub fn can_offer_double(&self) -> bool {
        match self.phase {
            GamePhase::Rolling { active } => self.cube.can_offer(active),
            _ => false,
        }
    }

    /// Offer a double. The cube value does not change until accepted.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn double(&self) -> Result<Game> {
        let GamePhase::Rolling { active } = self.phase else {
            return Err(self.invalid("double"));
        };
        let cube = self.cube.offer(active)?;
        let players = set_states(
            self.players.clone(),
            active,
            PlayerStateKind::Doubled,
            PlayerStateKind::Inactive,
        );
        info!(%active, "double offered");
        Ok(self.with_phase(players, self.board.clone(), cube, GamePhase::Doubled { active }))
    }

    /// `responder` may accept or refuse the pending double.
    #[must_use]
    pub fn can_respond_to_double(&self, responder: Color) -> bool {
        matches!(self.phase, GamePhase::Doubled { active } if active != responder)
    }

    fn check_responder(&self, responder: Color) -> Result<Color> {
        let GamePhase::Doubled { active } = self.phase else {
            return Err(self.invalid("respond to double"));
        };
        if responder == active {
            return Err(EngineError::CannotRespondToOwnDouble);
        }
        Ok(active)
    }

    /// Take the double: the cube turns and `responder` owns it.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn accept_double(&self, responder: Color) -> Result<Game> {
        let active = self.check_responder(responder)?;
        let cube = self.cube.accept(responder)?;
        let players = set_states(
            self.players.clone(),
            active,
            PlayerStateKind::Rolling,
            PlayerStateKind::Inactive,
        );
        info!(%responder, value = ?cube.value(), "double accepted");
        Ok(self.with_phase(players, self.board.clone(), cube, GamePhase::Rolling { active }))
    }

    /// Drop: the doubler wins immediately.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn refuse_double(&self, responder: Color) -> Result<Game> {
        let active = self.check_responder(responder)?;
        let players = set_states(
            self.players.clone(),
            active,
            PlayerStateKind::Winner,
            PlayerStateKind::Inactive,
        );
        info!(%responder, winner = %active, "double refused");
        Ok(self.with_phase(
            players,
            self.board.clone(),
            self.cube,
            GamePhase::Completed { winner: active },
        ))
    }

    // === Interchange ===

    /// GNU Backgammon Position ID of the current board.
    #[must_use]
    pub fn position_id(&self) -> String {
        crate::gnu::export_position_id(self)
    }

    // === Snapshots ===

    /// Serialize the whole game with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|err| EngineError::Snapshot {
            reason: err.to_string(),
        })
    }

    /// Restore a game written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Game> {
        bincode::deserialize(bytes).map_err(|err| EngineError::Snapshot {
            reason: err.to_string(),
        })
    }
}

/// The play a `moving` or `moved` game needs, rolled by `active`.
fn play_for(active: Color, play: Option<Play>) -> Result<Play> {
    let play = play.ok_or(EngineError::ActivePlayRequired)?;
    if play.color() != active {
        return Err(EngineError::ActivePlayMismatch {
            active,
            play: play.color(),
        });
    }
    Ok(play)
}

fn set_states(
    players: Players,
    active: Color,
    active_state: PlayerStateKind,
    inactive_state: PlayerStateKind,
) -> Players {
    players
        .update(active, |p| p.with_state(active_state))
        .update(active.opponent(), |p| p.with_state(inactive_state))
}

fn refresh_pip_counts(players: Players, board: &Board) -> Players {
    let mut players = players;
    for color in [Color::White, Color::Black] {
        let direction = players[color].direction();
        let pips = board.pip_count(color, direction);
        players = players.update(color, |p| p.with_pip_count(pips));
    }
    players
}
