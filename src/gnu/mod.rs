//! GNU Backgammon interchange.
//!
//! Position IDs are the one bit-exact format the engine shares with
//! external tooling. Export handles every game state; import always
//! rebuilds with white on roll moving clockwise.

mod position_id;

pub use position_id::{
    export_position_id, import_position_id, player_on_roll, ImportedPosition, POSITION_ID_BITS,
    POSITION_ID_LEN,
};
