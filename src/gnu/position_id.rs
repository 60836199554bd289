//! GNU Backgammon Position ID.
//!
//! ## Layout
//!
//! 80 bits. For the player on roll, then the opponent: for each of the
//! player's own positions 1 to 24 and then the bar, one `1` bit per checker
//! followed by a `0`. Short strings are zero-padded.
//!
//! ## Packing
//!
//! Bit `j` of byte `i` holds bit `8 * i + j` of the string. The 10 bytes
//! are then written as 14 base64 characters, most significant sextet first.
//!
//! ```
//! use backgammon_engine::game::Game;
//! use backgammon_engine::core::GameId;
//! use backgammon_engine::gnu::export_position_id;
//!
//! assert_eq!(export_position_id(&Game::new(GameId::new(1))), "4HPwATDgc/ABMA");
//! ```

use tracing::warn;

use crate::board::{Board, BoardImportEntry, CHECKERS_PER_SIDE, POINT_COUNT};
use crate::core::{Color, Direction, EngineError, Players, Result};
use crate::game::{Game, GamePhase};

/// Bits in a position id.
pub const POSITION_ID_BITS: usize = 80;
const POSITION_ID_BYTES: usize = POSITION_ID_BITS / 8;
/// Characters in a position id.
pub const POSITION_ID_LEN: usize = 14;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Board and players rebuilt from a position id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedPosition {
    pub board: Board,
    pub players: Players,
}

/// The color whose checkers are written first.
#[must_use]
pub fn player_on_roll(game: &Game) -> Color {
    match game.phase() {
        GamePhase::RollingForStart => Color::White,
        GamePhase::RolledForStart { active }
        | GamePhase::Rolling { active }
        | GamePhase::Moving { active, .. }
        | GamePhase::Moved { active, .. }
        | GamePhase::Doubled { active } => *active,
        GamePhase::Completed { winner } => *winner,
    }
}

/// Encode the game's board as a 14 character position id.
#[must_use]
pub fn export_position_id(game: &Game) -> String {
    let on_roll = player_on_roll(game);
    let mut bits = Vec::with_capacity(POSITION_ID_BITS);
    for color in [on_roll, on_roll.opponent()] {
        let direction = game.players()[color].direction();
        push_side(&mut bits, game.board(), color, direction);
    }

    if bits.len() > POSITION_ID_BITS {
        warn!(
            bits = bits.len(),
            "position id bit string too long, truncating"
        );
        bits.truncate(POSITION_ID_BITS);
    }
    bits.resize(POSITION_ID_BITS, false);

    encode_base64(&pack_bytes(&bits))
}

fn push_side(bits: &mut Vec<bool>, board: &Board, color: Color, direction: Direction) {
    let runs = (1..=POINT_COUNT)
        .map(|position| {
            board
                .point_at(direction, position)
                .map_or(0, |point| point.count(color))
        })
        .chain(std::iter::once(board.bar_count(color, direction)));
    for run in runs {
        bits.extend(std::iter::repeat(true).take(run));
        bits.push(false);
    }
}

fn pack_bytes(bits: &[bool]) -> [u8; POSITION_ID_BYTES] {
    let mut bytes = [0u8; POSITION_ID_BYTES];
    for (index, _) in bits.iter().enumerate().filter(|(_, &bit)| bit) {
        bytes[index / 8] |= 1 << (index % 8);
    }
    bytes
}

fn unpack_bytes(bytes: &[u8; POSITION_ID_BYTES]) -> Vec<bool> {
    (0..POSITION_ID_BITS)
        .map(|index| bytes[index / 8] & (1 << (index % 8)) != 0)
        .collect()
}

fn encode_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(POSITION_ID_LEN);
    for chunk in bytes.chunks(3) {
        let mut group = [0u8; 3];
        group[..chunk.len()].copy_from_slice(chunk);
        let word = u32::from(group[0]) << 16 | u32::from(group[1]) << 8 | u32::from(group[2]);
        // n bytes fill n + 1 sextets
        for sextet in 0..=chunk.len() {
            let value = (word >> (18 - 6 * sextet)) & 0x3f;
            out.push(char::from(ALPHABET[value as usize]));
        }
    }
    out
}

fn decode_base64(id: &str) -> Result<[u8; POSITION_ID_BYTES]> {
    if id.len() != POSITION_ID_LEN {
        return Err(EngineError::InvalidPositionId {
            reason: format!("expected {POSITION_ID_LEN} characters, got {}", id.len()),
        });
    }

    let mut bytes = [0u8; POSITION_ID_BYTES];
    let mut accumulator: u32 = 0;
    let mut pending_bits: u32 = 0;
    let mut written = 0;
    for ch in id.bytes() {
        let value = ALPHABET
            .iter()
            .position(|&c| c == ch)
            .ok_or_else(|| EngineError::InvalidPositionId {
                reason: format!("invalid character {:?}", char::from(ch)),
            })?;
        accumulator = (accumulator << 6) | value as u32;
        pending_bits += 6;
        if pending_bits >= 8 {
            pending_bits -= 8;
            if written < POSITION_ID_BYTES {
                bytes[written] = (accumulator >> pending_bits) as u8;
                written += 1;
            }
            accumulator &= (1u32 << pending_bits) - 1;
        }
    }
    Ok(bytes)
}

/// Decode a position id, assuming white is on roll and moves clockwise.
pub fn import_position_id(id: &str) -> Result<ImportedPosition> {
    let bits = unpack_bytes(&decode_base64(id)?);
    let mut cursor = bits.into_iter();

    let sides = [
        (Color::White, Direction::Clockwise),
        (Color::Black, Direction::Counterclockwise),
    ];
    let mut entries = Vec::new();
    for (color, direction) in sides {
        let mut placed = 0usize;
        for slot in 1..=POINT_COUNT + 1 {
            let run = read_run(&mut cursor)?;
            if run == 0 {
                continue;
            }
            placed += usize::from(run);
            entries.push(if slot <= POINT_COUNT {
                BoardImportEntry::point(direction, slot, color, run)
            } else {
                BoardImportEntry::bar(direction, color, run)
            });
        }
        let off = CHECKERS_PER_SIDE.checked_sub(placed).ok_or_else(|| {
            EngineError::InvalidPositionId {
                reason: format!("{color} has {placed} checkers"),
            }
        })?;
        if off > 0 {
            entries.push(BoardImportEntry::off(direction, color, off as u8));
        }
    }

    let board = Board::from_import(&entries).map_err(|err| EngineError::InvalidPositionId {
        reason: err.to_string(),
    })?;
    Ok(ImportedPosition {
        board,
        players: Players::with_white_direction(Direction::Clockwise, false, false),
    })
}

fn read_run(cursor: &mut impl Iterator<Item = bool>) -> Result<u8> {
    let mut run = 0u8;
    loop {
        match cursor.next() {
            Some(true) => {
                run += 1;
                if usize::from(run) > CHECKERS_PER_SIDE {
                    return Err(EngineError::InvalidPositionId {
                        reason: "run longer than a full side".to_string(),
                    });
                }
            }
            Some(false) => return Ok(run),
            None => {
                return Err(EngineError::InvalidPositionId {
                    reason: "bit string ended mid-position".to_string(),
                })
            }
        }
    }
}
