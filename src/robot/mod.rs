//! Robot move selection.
//!
//! `MoveSuggester` is the seam an AI plugs into: given a game and a roll
//! it proposes origins for `Game::make_move`. The engine only ships a
//! uniform random policy.

mod suggester;

pub use suggester::{MoveSuggester, RandomSuggester};
