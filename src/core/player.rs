//! Players.
//!
//! ## Player
//!
//! A player has a fixed `Color` and `Direction`, their own `Dice`, a pip
//! count kept current by the game, and a state that mirrors the game phase
//! from their point of view.
//!
//! ## Players
//!
//! Exactly two players, one per color, stored in a `ColorMap` for O(1)
//! access. Built from an unchecked list with `Players::try_from_vec`.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap, Direction};
use super::dice::Dice;
use super::entity::PlayerId;
use super::error::{EngineError, Result};

/// Pip count of the standard opening position.
pub const STARTING_PIP_COUNT: u16 = 167;

/// What a player is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStateKind {
    Inactive,
    RollingForStart,
    RolledForStart,
    Rolling,
    Moving,
    Moved,
    Doubled,
    Winner,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    color: Color,
    direction: Direction,
    dice: Dice,
    pip_count: u16,
    state: PlayerStateKind,
    is_robot: bool,
}

impl Player {
    /// Create a player waiting to roll for start.
    #[must_use]
    pub fn new(id: PlayerId, color: Color, direction: Direction, is_robot: bool) -> Self {
        Self {
            id,
            color,
            direction,
            dice: Dice::Ready,
            pip_count: STARTING_PIP_COUNT,
            state: PlayerStateKind::RollingForStart,
            is_robot,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub fn pip_count(&self) -> u16 {
        self.pip_count
    }

    #[must_use]
    pub fn state(&self) -> PlayerStateKind {
        self.state
    }

    #[must_use]
    pub fn is_robot(&self) -> bool {
        self.is_robot
    }

    #[must_use]
    pub fn with_state(mut self, state: PlayerStateKind) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn with_dice(mut self, dice: Dice) -> Self {
        self.dice = dice;
        self
    }

    #[must_use]
    pub fn with_pip_count(mut self, pip_count: u16) -> Self {
        self.pip_count = pip_count;
        self
    }
}

/// The two players of a game, keyed by color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    by_color: ColorMap<Player>,
}

impl Players {
    /// White moves clockwise, black counterclockwise.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_white_direction(Direction::Clockwise, false, false)
    }

    /// Build a pair given white's direction and robot flags.
    #[must_use]
    pub fn with_white_direction(white: Direction, white_robot: bool, black_robot: bool) -> Self {
        Self {
            by_color: ColorMap::new(|color| match color {
                Color::White => Player::new(PlayerId::new(0), Color::White, white, white_robot),
                Color::Black => {
                    Player::new(PlayerId::new(1), Color::Black, white.opposite(), black_robot)
                }
            }),
        }
    }

    /// Validate an arbitrary player list.
    ///
    /// Requires exactly one player per color, on opposite directions.
    pub fn try_from_vec(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(EngineError::PlayersNotFound);
        }
        if players.len() != 2 {
            return Err(EngineError::InvalidPlayers {
                reason: format!("expected 2 players, got {}", players.len()),
            });
        }
        let mut players = players.into_iter();
        let (first, second) = match (players.next(), players.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(EngineError::PlayersNotFound),
        };
        if first.color == second.color {
            return Err(EngineError::InvalidPlayers {
                reason: format!("both players are {}", first.color),
            });
        }
        if first.direction == second.direction {
            return Err(EngineError::InvalidPlayers {
                reason: format!("both players move {}", first.direction),
            });
        }
        let (white, black) = if first.color == Color::White {
            (first, second)
        } else {
            (second, first)
        };
        let mut by_color = ColorMap::new(|_| white.clone());
        by_color[Color::Black] = black;
        Ok(Self { by_color })
    }

    #[must_use]
    pub fn get(&self, color: Color) -> &Player {
        &self.by_color[color]
    }

    /// The player travelling in `direction`.
    #[must_use]
    pub fn by_direction(&self, direction: Direction) -> &Player {
        let white = &self.by_color[Color::White];
        if white.direction == direction {
            white
        } else {
            &self.by_color[Color::Black]
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.by_color.iter().map(|(_, player)| player)
    }

    /// Apply `f` to one player, returning the new pair.
    #[must_use]
    pub fn update(mut self, color: Color, f: impl FnOnce(Player) -> Player) -> Self {
        let player = self.by_color[color].clone();
        self.by_color[color] = f(player);
        self
    }
}

impl std::ops::Index<Color> for Players {
    type Output = Player;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_players() {
        let players = Players::standard();

        assert_eq!(players[Color::White].direction(), Direction::Clockwise);
        assert_eq!(players[Color::Black].direction(), Direction::Counterclockwise);
        assert_eq!(players.by_direction(Direction::Counterclockwise).color(), Color::Black);
        assert_eq!(players[Color::White].pip_count(), STARTING_PIP_COUNT);
        assert_eq!(players[Color::White].state(), PlayerStateKind::RollingForStart);
    }

    #[test]
    fn test_try_from_vec_orders_by_color() {
        let black = Player::new(PlayerId::new(7), Color::Black, Direction::Clockwise, true);
        let white = Player::new(PlayerId::new(3), Color::White, Direction::Counterclockwise, false);

        let players = Players::try_from_vec(vec![black, white]).unwrap();
        assert_eq!(players[Color::White].id(), PlayerId::new(3));
        assert_eq!(players[Color::Black].id(), PlayerId::new(7));
        assert!(players[Color::Black].is_robot());
    }

    #[test]
    fn test_try_from_vec_rejects_bad_lists() {
        assert_eq!(Players::try_from_vec(vec![]), Err(EngineError::PlayersNotFound));

        let white = Player::new(PlayerId::new(0), Color::White, Direction::Clockwise, false);
        let twin = Player::new(PlayerId::new(1), Color::White, Direction::Counterclockwise, false);
        assert!(matches!(
            Players::try_from_vec(vec![white.clone(), twin]),
            Err(EngineError::InvalidPlayers { .. })
        ));

        let same_way = Player::new(PlayerId::new(1), Color::Black, Direction::Clockwise, false);
        assert!(matches!(
            Players::try_from_vec(vec![white, same_way]),
            Err(EngineError::InvalidPlayers { .. })
        ));
    }

    #[test]
    fn test_update() {
        let players = Players::standard()
            .update(Color::Black, |p| p.with_state(PlayerStateKind::Winner));

        assert_eq!(players[Color::Black].state(), PlayerStateKind::Winner);
        assert_eq!(players[Color::White].state(), PlayerStateKind::RollingForStart);
    }
}
