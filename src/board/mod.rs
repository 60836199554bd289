//! The board and its move-legality rules.
//!
//! - `container`: checkers, points, and `Location`s
//! - `layout`: the `Board` value and checker movement
//! - `legality`: possible-move generation and dice auto-switching
//! - `import`: board import spec for non-default layouts

pub mod container;
pub mod import;
pub mod layout;
pub mod legality;

pub use container::{Checker, Location, Point, PointPosition, POINT_COUNT};
pub use import::{standard_import, BoardImportEntry, ImportCheckers, ImportPosition, CHECKERS_PER_SIDE};
pub use layout::{Board, BAR_PIPS, HOME_BOARD_SIZE};
pub use legality::{MoveKind, PossibleMove, SwitchedMoves};
