//! Builder for new games.

use crate::board::{Board, BoardImportEntry};
use crate::core::{Cube, Direction, GameId, Players, Result};

use super::state::Game;

/// Builder for creating a `Game` waiting to roll for start.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    id: GameId,
    white_direction: Direction,
    white_robot: bool,
    black_robot: bool,
    import: Option<Vec<BoardImportEntry>>,
    cube: Cube,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            id: GameId::default(),
            white_direction: Direction::Clockwise,
            white_robot: false,
            black_robot: false,
            import: None,
            cube: Cube::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    /// Which way white travels. Black always takes the other direction.
    pub fn white_direction(mut self, direction: Direction) -> Self {
        self.white_direction = direction;
        self
    }

    pub fn white_robot(mut self, is_robot: bool) -> Self {
        self.white_robot = is_robot;
        self
    }

    pub fn black_robot(mut self, is_robot: bool) -> Self {
        self.black_robot = is_robot;
        self
    }

    /// Start from a custom layout instead of the opening position.
    pub fn board_import(mut self, entries: Vec<BoardImportEntry>) -> Self {
        self.import = Some(entries);
        self
    }

    pub fn cube(mut self, cube: Cube) -> Self {
        self.cube = cube;
        self
    }

    /// Build the game.
    ///
    /// Fails when a custom import is invalid or does not place exactly 15
    /// checkers per color.
    pub fn build(self) -> Result<Game> {
        let board = match &self.import {
            Some(entries) => Board::from_import(entries)?,
            None => Board::standard_for(self.white_direction),
        };
        let players =
            Players::with_white_direction(self.white_direction, self.white_robot, self.black_robot);
        Game::from_parts(self.id, players, board, self.cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, EngineError};
    use crate::game::GameStateKind;

    #[test]
    fn test_default_build() {
        let game = GameBuilder::new().build().unwrap();
        assert_eq!(game.kind(), GameStateKind::RollingForStart);
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.players()[Color::White].direction(), Direction::Clockwise);
    }

    #[test]
    fn test_custom_build() {
        let game = GameBuilder::new()
            .id(GameId::new(12))
            .white_direction(Direction::Counterclockwise)
            .black_robot(true)
            .build()
            .unwrap();

        assert_eq!(game.id(), GameId::new(12));
        assert_eq!(game.players()[Color::Black].direction(), Direction::Clockwise);
        assert!(game.players()[Color::Black].is_robot());
        assert!(!game.players()[Color::White].is_robot());
        assert_eq!(game.players()[Color::White].pip_count(), 167);
    }

    #[test]
    fn test_custom_import() {
        let entries = vec![
            BoardImportEntry::point(Direction::Clockwise, 1, Color::White, 15),
            BoardImportEntry::point(Direction::Counterclockwise, 1, Color::Black, 15),
        ];
        let game = GameBuilder::new().board_import(entries).build().unwrap();
        assert_eq!(game.players()[Color::White].pip_count(), 15);
        assert_eq!(game.players()[Color::Black].pip_count(), 15);
    }

    #[test]
    fn test_import_needs_full_sides() {
        let short = GameBuilder::new()
            .board_import(vec![BoardImportEntry::point(
                Direction::Clockwise,
                6,
                Color::White,
                1,
            )])
            .build();
        assert!(matches!(short, Err(EngineError::InvalidBoard { .. })));

        let crowded = GameBuilder::new()
            .board_import(vec![
                BoardImportEntry::point(Direction::Clockwise, 6, Color::White, 16),
                BoardImportEntry::point(Direction::Counterclockwise, 6, Color::Black, 15),
            ])
            .build();
        assert_eq!(
            crowded.unwrap_err().to_string(),
            "Invalid board: white has 16 checkers, expected 15"
        );
    }
}
