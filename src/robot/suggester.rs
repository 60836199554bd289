//! Move suggestion policies.

use crate::board::Location;
use crate::core::{EngineError, GameRng, Result, Roll};
use crate::game::{Game, GameStateKind};

/// Proposes a full move sequence for a roll.
///
/// The returned origins are meant to be fed to `Game::make_move` in order
/// after rolling `roll`. An empty sequence means the roll cannot be played.
pub trait MoveSuggester: Send + Sync {
    fn suggest(&self, game: &Game, roll: Roll, rng: &mut GameRng) -> Result<Vec<Location>>;
}

/// Picks uniformly among the legal origins, one checker at a time.
#[derive(Clone, Debug, Default)]
pub struct RandomSuggester;

impl MoveSuggester for RandomSuggester {
    fn suggest(&self, game: &Game, roll: Roll, rng: &mut GameRng) -> Result<Vec<Location>> {
        let mut current = match game.kind() {
            GameStateKind::RolledForStart | GameStateKind::Rolling => game.roll_with(roll)?,
            GameStateKind::Moving => game.clone(),
            state => {
                return Err(EngineError::InvalidStateTransition {
                    action: "suggest moves",
                    state,
                })
            }
        };

        let mut origins = Vec::new();
        while current.kind() == GameStateKind::Moving {
            let legal = current.legal_origins();
            let Some(&origin) = rng.choose(&legal) else {
                break;
            };
            current = current.make_move(origin)?.0;
            origins.push(origin);
        }
        Ok(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardImportEntry};
    use crate::core::{Color, Cube, Direction, GameId, Players};

    fn rolling_white() -> Game {
        Game::new(GameId::new(1))
            .roll_for_start_with(Color::White)
            .unwrap()
    }

    #[test]
    fn test_suggests_one_origin_per_die() {
        let mut rng = GameRng::new(42);
        let roll = Roll::new(5, 2).unwrap();
        let origins = RandomSuggester.suggest(&rolling_white(), roll, &mut rng).unwrap();
        assert_eq!(origins.len(), 2);

        let mut game = rolling_white().roll_with(roll).unwrap();
        for origin in origins {
            game = game.make_move(origin).unwrap().0;
        }
        assert!(game.active_play().unwrap().is_resolved());
    }

    #[test]
    fn test_same_seed_same_suggestion() {
        let roll = Roll::new(4, 4).unwrap();
        let a = RandomSuggester
            .suggest(&rolling_white(), roll, &mut GameRng::new(7))
            .unwrap();
        let b = RandomSuggester
            .suggest(&rolling_white(), roll, &mut GameRng::new(7))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_blocked_roll_suggests_nothing() {
        let board = Board::from_import(&[
            BoardImportEntry::bar(Direction::Clockwise, Color::White, 1),
            BoardImportEntry::point(Direction::Clockwise, 12, Color::White, 14),
            BoardImportEntry::point(Direction::Counterclockwise, 5, Color::Black, 2),
            BoardImportEntry::point(Direction::Counterclockwise, 6, Color::Black, 13),
        ])
        .unwrap();
        let game = Game::from_parts(GameId::new(2), Players::standard(), board, Cube::default())
            .unwrap()
            .roll_for_start_with(Color::White)
            .unwrap();

        let origins = RandomSuggester
            .suggest(&game, Roll::new(5, 6).unwrap(), &mut GameRng::new(1))
            .unwrap();
        assert!(origins.is_empty());
    }

    #[test]
    fn test_rejects_completed_game() {
        let game = rolling_white();
        let done = Game::initialize(crate::game::GameInit {
            id: game.id(),
            state_kind: GameStateKind::Doubled,
            players: game.players().iter().cloned().collect(),
            board: game.board().clone(),
            cube: Cube::default().offer(Color::White).unwrap(),
            active_color: Some(Color::White),
            active_play: None,
        })
        .unwrap()
        .refuse_double(Color::Black)
        .unwrap();

        assert!(matches!(
            RandomSuggester.suggest(&done, Roll::new(1, 2).unwrap(), &mut GameRng::new(1)),
            Err(EngineError::InvalidStateTransition { .. })
        ));
    }
}
