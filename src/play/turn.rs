//! Turn orchestration.
//!
//! A `Play` holds the moves of one roll (two, or four for doubles) for the
//! active player. Each call to `move_checker` resolves exactly one of them
//! and returns a new `Play`.
//!
//! ## Die accounting
//!
//! A move slot is only ever completed with its own die value; auto-switching
//! picks a different slot, never rewrites a slot's value. The die values of
//! a play therefore always equal the roll.
//!
//! ## No-move conversion
//!
//! After each executed move, remaining ready moves whose die has no legal
//! use on the new board become `no-move`. At initialization, moves only
//! become `no-move` when no die of the roll can be used at all.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::moves::Move;
use crate::board::{Board, Location};
use crate::core::{Color, DieValues, EngineError, Player, Result};

/// What one executed move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move that just completed.
    pub executed: Move,
    pub auto_switched: bool,
    /// The die tried first.
    pub original_die_value: u8,
    /// The die actually consumed.
    pub used_die_value: u8,
}

/// Outcome of `Play::move_checker`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayMoveResult {
    pub board: Board,
    pub play: Play,
    pub report: MoveReport,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    player: Player,
    moves: SmallVec<[Move; 4]>,
}

impl Play {
    /// Create the moves for the player's current roll.
    pub fn initialize(board: &Board, player: &Player) -> Result<Play> {
        let roll = player.dice().current_roll().ok_or(EngineError::DiceNotRolled)?;

        let moves: SmallVec<[Move; 4]> = roll
            .die_values()
            .into_iter()
            .enumerate()
            .map(|(i, die)| Move::ready(i as u8, die, board.possible_moves(player, die)))
            .collect();

        let stuck = moves.iter().all(|m| m.possible_moves().is_empty());
        let moves = if stuck {
            debug!(color = %player.color(), %roll, "no legal moves for roll");
            moves.iter().map(Move::no_move).collect::<Result<_>>()?
        } else {
            moves
        };

        Ok(Play {
            player: player.clone(),
            moves,
        })
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.player.color()
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn ready_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.is_ready())
    }

    /// Die values across all moves, in slot order.
    #[must_use]
    pub fn die_values(&self) -> DieValues {
        self.moves.iter().map(Move::die_value).collect()
    }

    /// Every move is `completed` or `no-move`.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.moves.iter().all(Move::is_resolved)
    }

    /// First ready die and the sibling die to fall back to.
    fn die_order(&self) -> Option<(u8, u8)> {
        let mut ready = self.ready_moves().map(Move::die_value);
        let first = ready.next()?;
        let other = ready.find(|&die| die != first).unwrap_or(first);
        Some((first, other))
    }

    /// Origins `move_checker` would accept on `board` right now.
    #[must_use]
    pub fn legal_origins(&self, board: &Board) -> Vec<Location> {
        let mut dice: SmallVec<[u8; 2]> = SmallVec::new();
        for die in self.ready_moves().map(Move::die_value) {
            if !dice.contains(&die) {
                dice.push(die);
            }
        }
        let mut origins = Vec::new();
        for die in dice {
            for possible in board.possible_moves(&self.player, die) {
                if !origins.contains(&possible.origin) {
                    origins.push(possible.origin);
                }
            }
        }
        origins
    }

    /// Move a checker from `origin`, choosing the die automatically.
    ///
    /// The first ready die is tried first; if `origin` cannot use it, the
    /// sibling die is used instead and the report says so.
    #[instrument(skip(self, board), fields(color = %self.player.color()))]
    pub fn move_checker(&self, board: &Board, origin: Location) -> Result<PlayMoveResult> {
        let (first, other) = self.die_order().ok_or(EngineError::NoReadyMoves)?;
        let switched = board.possible_moves_with_switch(&self.player, first, other, Some(origin));
        let chosen = switched
            .moves
            .iter()
            .find(|m| m.origin == origin)
            .copied()
            .ok_or(EngineError::IllegalMove { origin })?;

        let slot = self
            .moves
            .iter()
            .position(|m| m.is_ready() && m.die_value() == switched.used_die_value)
            .ok_or(EngineError::NoReadyMoves)?;

        let started = self.moves[slot].start(origin)?;
        let (board, is_hit) =
            board.move_checker(origin, chosen.destination, self.player.direction())?;
        let executed = started.complete(chosen.destination, chosen.kind(), is_hit)?;

        let mut moves = self.moves.clone();
        moves[slot] = executed.clone();
        for pending in moves.iter_mut().filter(|m| m.is_ready()) {
            let possible = board.possible_moves(&self.player, pending.die_value());
            *pending = if possible.is_empty() {
                debug!(die = pending.die_value(), "die has no further use");
                pending.no_move()?
            } else {
                pending.with_possible_moves(possible)
            };
        }

        debug!(
            %origin,
            destination = %chosen.destination,
            used_die = switched.used_die_value,
            auto_switched = switched.auto_switched,
            "move executed"
        );

        Ok(PlayMoveResult {
            board,
            play: Play {
                player: self.player.clone(),
                moves,
            },
            report: MoveReport {
                executed,
                auto_switched: switched.auto_switched,
                original_die_value: switched.original_die_value,
                used_die_value: switched.used_die_value,
            },
        })
    }
}
