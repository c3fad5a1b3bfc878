//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two parties of a game: the human at the device and the
//! computer-controlled opponent.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, so per-side counters never
//! need a hash lookup.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player at the device.
    Human,
    /// The computer-controlled opponent.
    Opponent,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Opponent];

    /// Slot index used by `SideMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Opponent => 1,
        }
    }

    /// The side across the board.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    /// Display name used by presentation queries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Human => "Player1",
            Side::Opponent => "Computer",
        }
    }

    /// Iterate over both sides.
    pub fn all() -> impl Iterator<Item = Side> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ayo_engine::core::{Side, SideMap};
///
/// let mut rounds: SideMap<u32> = SideMap::with_value(0);
/// rounds[Side::Human] += 1;
///
/// assert_eq!(rounds[Side::Human], 1);
/// assert_eq!(rounds[Side::Opponent], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Human), factory(Side::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Human.index(), 0);
        assert_eq!(Side::Opponent.index(), 1);
        assert_eq!(Side::Human.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Human);
        assert_eq!(format!("{}", Side::Opponent), "Computer");
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);

        assert_eq!(map[Side::Human], 0);
        assert_eq!(map[Side::Opponent], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<Vec<u8>> = SideMap::default();

        map[Side::Opponent].push(4);
        map.get_mut(Side::Human).push(1);

        assert_eq!(map[Side::Human], vec![1]);
        assert_eq!(map[Side::Opponent], vec![4]);
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Human, &0), (Side::Opponent, &1)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32 + 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
