//! Point awards.
//!
//! The controller reports discrete `ScoreAward`s to a `ScoreSink`; the sink
//! owns accumulation and persistence. `ScoreTally` is the in-memory default
//! and serializes to bytes so a host can store the running total.
//!
//! All awards are from the human's point of view: the computer's captures
//! earn nothing.

use serde::{Deserialize, Serialize};

/// A fixed-value point award.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreAward {
    /// The human captured a pot.
    PotCaptured,
    /// The human swept the last stones off the board.
    RemainingCaptured,
    RoundWon,
    RoundDraw,
    RoundLost,
    GameWon,
    GameDraw,
    GameLost,
}

impl ScoreAward {
    /// Points this award is worth.
    #[must_use]
    pub const fn points(self) -> u64 {
        match self {
            ScoreAward::PotCaptured => 10,
            ScoreAward::RemainingCaptured => 20,
            ScoreAward::RoundWon => 100,
            ScoreAward::RoundDraw => 50,
            ScoreAward::RoundLost => 0,
            ScoreAward::GameWon => 1000,
            ScoreAward::GameDraw => 500,
            ScoreAward::GameLost => 0,
        }
    }
}

/// Receives point awards in the order they are earned.
pub trait ScoreSink {
    fn award(&mut self, award: ScoreAward);

    /// A new game began.
    fn game_started(&mut self) {}
}

impl<S: ScoreSink + ?Sized> ScoreSink for Box<S> {
    fn award(&mut self, award: ScoreAward) {
        (**self).award(award);
    }

    fn game_started(&mut self) {
        (**self).game_started();
    }
}

/// Records awards without scoring them.
impl ScoreSink for Vec<ScoreAward> {
    fn award(&mut self, award: ScoreAward) {
        self.push(award);
    }
}

/// Stones a single pot capture is worth.
const STONES_PER_POT_CAPTURE: u32 = 4;

/// In-memory running score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    total_points: u64,
    game_score: u64,
    last_award: Option<ScoreAward>,
    pots_captured: u32,
    stones_captured: u32,
}

impl ScoreTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points across every game since the last `reset_total`.
    #[must_use]
    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    /// Points in the current game.
    #[must_use]
    pub fn game_score(&self) -> u64 {
        self.game_score
    }

    #[must_use]
    pub fn last_award(&self) -> Option<ScoreAward> {
        self.last_award
    }

    /// Pots the human captured this game.
    #[must_use]
    pub fn pots_captured(&self) -> u32 {
        self.pots_captured
    }

    /// Stones the human captured from pots this game.
    #[must_use]
    pub fn stones_captured(&self) -> u32 {
        self.stones_captured
    }

    /// Start a new game, keeping the running total.
    pub fn reset_game(&mut self) {
        self.game_score = 0;
        self.last_award = None;
        self.pots_captured = 0;
        self.stones_captured = 0;
    }

    /// Forget everything.
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(data)
    }
}

impl ScoreSink for ScoreTally {
    fn award(&mut self, award: ScoreAward) {
        let points = award.points();
        self.total_points += points;
        self.game_score += points;
        self.last_award = Some(award);

        if award == ScoreAward::PotCaptured {
            self.pots_captured += 1;
            self.stones_captured += STONES_PER_POT_CAPTURE;
        }
    }

    fn game_started(&mut self) {
        self.reset_game();
    }
}
