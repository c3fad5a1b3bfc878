//! Pots: fixed positions on the sowing ring.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::side::Side;
use super::stone::Stone;

/// Number of pots on the ring.
pub const POT_COUNT: usize = 12;

/// Number of pots each side controls.
pub const POTS_PER_SIDE: usize = POT_COUNT / 2;

/// Stable pot identifier: the pot's position on the sowing ring (0..12).
///
/// Displayed 1-based, so ring index 0 is `pot1` and ring index 11 is `pot12`.
/// The opponent controls `pot1`..`pot6`, the human `pot7`..`pot12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PotId(u8);

impl PotId {
    /// Create a pot ID from a ring index.
    ///
    /// Indices past the ring are representable; the board rejects them
    /// with `EngineError::UnknownPot`.
    #[must_use]
    pub const fn new(ring_index: u8) -> Self {
        Self(ring_index)
    }

    /// The ring index (0-based).
    #[must_use]
    pub const fn ring_index(self) -> usize {
        self.0 as usize
    }

    /// Check the ID names a pot on the ring.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < POT_COUNT
    }

    /// The side that controls this pot in the standard layout.
    #[must_use]
    pub const fn default_owner(self) -> Side {
        if (self.0 as usize) < POTS_PER_SIDE {
            Side::Opponent
        } else {
            Side::Human
        }
    }

    /// All pots in ring order.
    pub fn all() -> impl Iterator<Item = PotId> {
        (0..POT_COUNT as u8).map(PotId)
    }
}

impl std::fmt::Display for PotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pot{}", self.0 as usize + 1)
    }
}

/// Error parsing a pot name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a pot name: {0:?}")]
pub struct ParsePotIdError(pub String);

impl FromStr for PotId {
    type Err = ParsePotIdError;

    /// Accepts `pot7` and the scene-object form `pot7hole`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePotIdError(s.to_string());
        let digits = s
            .strip_prefix("pot")
            .map(|rest| rest.strip_suffix("hole").unwrap_or(rest))
            .ok_or_else(err)?;
        let number: usize = digits.parse().map_err(|_| err())?;
        if !(1..=POT_COUNT).contains(&number) {
            return Err(err());
        }
        Ok(PotId((number - 1) as u8))
    }
}

/// A pot on the board and the stones it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pot {
    pub id: PotId,
    /// The side allowed to select this pot.
    pub owner: Side,
    stones: SmallVec<[Stone; 8]>,
}

impl Pot {
    /// Create an empty pot.
    #[must_use]
    pub fn new(id: PotId, owner: Side) -> Self {
        Self {
            id,
            owner,
            stones: SmallVec::new(),
        }
    }

    /// Position on the sowing ring.
    #[must_use]
    pub fn ring_index(&self) -> usize {
        self.id.ring_index()
    }

    /// Number of stones in the pot.
    #[must_use]
    pub fn count(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// The stones currently in the pot.
    #[must_use]
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    pub(crate) fn add(&mut self, stone: Stone) {
        self.stones.push(stone);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Stone> {
        self.stones.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stone::StoneColor;

    #[test]
    fn test_pot_id_display_and_owner() {
        assert_eq!(PotId::new(0).to_string(), "pot1");
        assert_eq!(PotId::new(11).to_string(), "pot12");
        assert_eq!(PotId::new(5).default_owner(), Side::Opponent);
        assert_eq!(PotId::new(6).default_owner(), Side::Human);
        assert!(!PotId::new(12).is_valid());
    }

    #[test]
    fn test_pot_id_parse() {
        assert_eq!("pot1".parse::<PotId>(), Ok(PotId::new(0)));
        assert_eq!("pot12hole".parse::<PotId>(), Ok(PotId::new(11)));
        assert!("pot0".parse::<PotId>().is_err());
        assert!("pot13".parse::<PotId>().is_err());
        assert!("hole7".parse::<PotId>().is_err());
    }

    #[test]
    fn test_pot_add_and_take() {
        let mut pot = Pot::new(PotId::new(3), Side::Opponent);
        assert!(pot.is_empty());

        pot.add(Stone::new(StoneColor::Blue));
        pot.add(Stone::new(StoneColor::Black));
        assert_eq!(pot.count(), 2);

        let taken = pot.take_all();
        assert_eq!(taken.len(), 2);
        assert!(pot.is_empty());
    }
}
