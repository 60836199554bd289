//! Checker colors, movement directions, and per-side storage.
//!
//! ## Color / Direction
//!
//! Each player owns one `Color` and travels in one `Direction` for the whole
//! game. The two players always have opposite colors and opposite directions.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Color` or `Direction` for O(1) access.
//! `ColorMap<T>` and `DirectionMap<T>` are the two concrete flavors.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// One of the two sides of a two-valued board concept.
pub trait Side: Copy + Eq + 'static {
    /// Both values, in slot order.
    const ALL: [Self; 2];

    /// Slot index (0 or 1).
    fn slot(self) -> usize;
}

/// Checker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Side for Color {
    const ALL: [Self; 2] = [Color::White, Color::Black];

    fn slot(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Movement direction around the board.
///
/// A player moving `Clockwise` sees points by their clockwise position
/// number, counting down from 24 toward a home board at positions 1-6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

impl Direction {
    /// The other direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::Counterclockwise,
            Direction::Counterclockwise => Direction::Clockwise,
        }
    }
}

impl Side for Direction {
    const ALL: [Self; 2] = [Direction::Clockwise, Direction::Counterclockwise];

    fn slot(self) -> usize {
        match self {
            Direction::Clockwise => 0,
            Direction::Counterclockwise => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::Counterclockwise => write!(f, "counterclockwise"),
        }
    }
}

/// Two-slot storage keyed by a `Side`.
///
/// ## Example
///
/// ```
/// use backgammon_engine::core::{Color, ColorMap};
///
/// let mut borne_off: ColorMap<u8> = ColorMap::with_value(0);
/// borne_off[Color::Black] = 3;
///
/// assert_eq!(borne_off[Color::White], 0);
/// assert_eq!(borne_off[Color::Black], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<K, T> {
    data: [T; 2],
    #[serde(skip)]
    _side: PhantomData<K>,
}

/// Per-color storage.
pub type ColorMap<T> = SideMap<Color, T>;

/// Per-direction storage.
pub type DirectionMap<T> = SideMap<Direction, T>;

impl<K: Side, T> SideMap<K, T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(K) -> T) -> Self {
        Self {
            data: K::ALL.map(factory),
            _side: PhantomData,
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: K) -> &T {
        &self.data[side.slot()]
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: K) -> &mut T {
        &mut self.data[side.slot()]
    }

    /// Iterate over (side, &T) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        K::ALL.into_iter().zip(self.data.iter())
    }
}

impl<K: Side, T> Index<K> for SideMap<K, T> {
    type Output = T;

    fn index(&self, side: K) -> &Self::Output {
        self.get(side)
    }
}

impl<K: Side, T> IndexMut<K> for SideMap<K, T> {
    fn index_mut(&mut self, side: K) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_and_opposite() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Direction::Clockwise.opposite(), Direction::Counterclockwise);
        assert_eq!(Direction::Counterclockwise.opposite(), Direction::Clockwise);
    }

    #[test]
    fn test_side_map_new() {
        let map: DirectionMap<u8> = DirectionMap::new(|d| match d {
            Direction::Clockwise => 1,
            Direction::Counterclockwise => 2,
        });

        assert_eq!(map[Direction::Clockwise], 1);
        assert_eq!(map[Direction::Counterclockwise], 2);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: ColorMap<Vec<u8>> = ColorMap::with_default();
        map[Color::White].push(7);

        assert_eq!(map[Color::White], vec![7]);
        assert!(map[Color::Black].is_empty());
    }

    #[test]
    fn test_side_map_iter_order() {
        let map: ColorMap<i32> = ColorMap::new(|c| c.slot() as i32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Color::White, &0), (Color::Black, &1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Direction::Counterclockwise.to_string(), "counterclockwise");
    }

    #[test]
    fn test_side_map_serialization() {
        let map: ColorMap<u16> = ColorMap::new(|c| if c == Color::White { 167 } else { 160 });
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ColorMap<u16> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
