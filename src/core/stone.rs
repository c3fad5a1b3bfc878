//! Stones and the transient hand that carries them during a turn.
//!
//! Stones are fungible: only their count matters to the rules. The color
//! records which side's pots a stone was seeded into and is kept for
//! presentation.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Stone color. Each color is bound to one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneColor {
    /// Seeded into the human's pots.
    Black,
    /// Seeded into the opponent's pots.
    Blue,
}

impl StoneColor {
    /// The color seeded into a side's pots.
    #[must_use]
    pub const fn for_side(side: Side) -> Self {
        match side {
            Side::Human => StoneColor::Black,
            Side::Opponent => StoneColor::Blue,
        }
    }
}

/// A single stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub color: StoneColor,
}

impl Stone {
    #[must_use]
    pub const fn new(color: StoneColor) -> Self {
        Self { color }
    }
}

/// Stones lifted from a pot and not yet sown.
///
/// Exists only between a lift and the end of the turn; stones leave from
/// the front in the order they were lifted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    stones: VecDeque<Stone>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stones in hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Take the next stone to sow.
    pub fn take_front(&mut self) -> Option<Stone> {
        self.stones.pop_front()
    }

    /// Put lifted stones at the back of the hand.
    pub fn extend(&mut self, stones: impl IntoIterator<Item = Stone>) {
        self.stones.extend(stones);
    }
}

impl FromIterator<Stone> for Hand {
    fn from_iter<I: IntoIterator<Item = Stone>>(iter: I) -> Self {
        Self {
            stones: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_fifo() {
        let mut hand: Hand = [Stone::new(StoneColor::Black), Stone::new(StoneColor::Blue)]
            .into_iter()
            .collect();

        assert_eq!(hand.len(), 2);
        assert_eq!(hand.take_front(), Some(Stone::new(StoneColor::Black)));
        assert_eq!(hand.take_front(), Some(Stone::new(StoneColor::Blue)));
        assert_eq!(hand.take_front(), None);
        assert!(hand.is_empty());
    }

    #[test]
    fn test_color_for_side() {
        assert_eq!(StoneColor::for_side(Side::Human), StoneColor::Black);
        assert_eq!(StoneColor::for_side(Side::Opponent), StoneColor::Blue);
    }
}
