//! The game controller.
//!
//! `AyoGame` sequences turns, rounds and games:
//!
//! 1. The active side picks a pot (`select` for the human, the difficulty's
//!    `MoveSelector` for the computer).
//! 2. The sowing engine plays the turn.
//! 3. Post-turn checks run in a fixed order:
//!    - at most four stones left and someone has captured this round: the
//!      most recent capturer sweeps the board and the round ends;
//!    - every pot empty: the round ends;
//!    - otherwise the other side moves, skipping any side with no stones.
//! 4. At round end the larger captured pile wins the round, piles are
//!    cleared and the board is reseeded. Odd rounds open with the human,
//!    even rounds with the computer. After the last round the side with
//!    more round wins takes the game.
//!
//! Every step is reported to the `GameObserver` in order, and point awards
//! go to the `ScoreSink`.
//!
//! ## Example
//!
//! ```
//! use ayo_engine::core::{AyoConfig, PotId};
//! use ayo_engine::game::{AyoGame, GameState};
//!
//! let mut game = AyoGame::new(AyoConfig::default()).unwrap();
//! assert_eq!(game.state(), GameState::AwaitingSelection);
//! assert!(game.can_select(PotId::new(6)));
//! assert!(!game.can_select(PotId::new(0)));
//!
//! assert!(game.select(PotId::new(6)).unwrap());
//! ```

use tracing::{debug, info};

use crate::ai::{BoardView, Difficulty};
use crate::core::{
    AyoConfig, Board, ConfigError, EngineError, GameRng, Player, PotId, Side, SideMap, Stone,
    StoneColor, MAX_STONES_PER_POT, POT_COUNT,
};
use crate::events::{EventLog, GameEvent, GameObserver};
use crate::rules::sow;
use crate::score::{ScoreAward, ScoreSink, ScoreTally};

use super::result::{GameWinner, RoundResult};
use super::state::{GameState, Position};

/// Remaining stones at or below which the last capturer sweeps the board.
pub const SWEEP_THRESHOLD: usize = 4;

/// Most stones a game can hold. Keeps every pot count within `PotCounts`.
pub const MAX_TOTAL_STONES: usize = POT_COUNT * MAX_STONES_PER_POT as usize;

/// Side that opens a round: the human on odd rounds, the computer on even.
#[must_use]
pub fn round_starter(round: u32) -> Side {
    if round % 2 == 0 {
        Side::Opponent
    } else {
        Side::Human
    }
}

/// The last capturer of a resumed round, checked against the piles.
fn resumed_capturer(position: &Position) -> Result<Option<Side>, ConfigError> {
    let captured = |side: Side| position.captured[side] > 0;
    match position.last_capturer {
        Some(side) if !captured(side) => Err(ConfigError::Invalid(format!(
            "last capturer {side} has an empty captured pile"
        ))),
        Some(side) => Ok(Some(side)),
        None => match (captured(Side::Human), captured(Side::Opponent)) {
            (false, false) => Ok(None),
            (true, false) => Ok(Some(Side::Human)),
            (false, true) => Ok(Some(Side::Opponent)),
            (true, true) => Err(ConfigError::Invalid(
                "both sides have captured but no last capturer is given".into(),
            )),
        },
    }
}

/// A game of Ayo between the human and the computer.
pub struct AyoGame<O: GameObserver = EventLog, S: ScoreSink = ScoreTally> {
    config: AyoConfig,
    board: Board,
    players: SideMap<Player>,
    state: GameState,
    active: Side,
    round: u32,
    last_capturer: Option<Side>,
    difficulty: Difficulty,
    rng: GameRng,
    winner: Option<GameWinner>,
    observer: O,
    score: S,
}

impl AyoGame {
    /// Start a game that records events in an `EventLog` and scores into a
    /// `ScoreTally`.
    pub fn new(config: AyoConfig) -> Result<Self, ConfigError> {
        Self::with_parts(config, EventLog::new(), ScoreTally::new())
    }

    /// Resume from a position with the default observer and score sink.
    pub fn from_position(config: AyoConfig, position: Position) -> Result<Self, ConfigError> {
        Self::from_position_with(config, position, EventLog::new(), ScoreTally::new())
    }
}

impl<O: GameObserver, S: ScoreSink> AyoGame<O, S> {
    /// Start a game with a custom observer and score sink.
    ///
    /// Emits `RoundStarted` for round 1.
    pub fn with_parts(config: AyoConfig, observer: O, score: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self::assemble(config, observer, score);
        game.score.game_started();
        game.begin_round();
        Ok(game)
    }

    /// Resume a game from `position`, with `position.active` to move.
    ///
    /// Nothing is emitted for the resumed round's start. If the side to
    /// move has no stones it is skipped; if it is the computer and
    /// `auto_play_opponent` is set, the computer moves right away.
    ///
    /// The position must hold at most `MAX_TOTAL_STONES`, and
    /// `last_capturer` must agree with the captured piles. When it is
    /// `None` and exactly one pile is non-empty, that side is taken as the
    /// last capturer.
    pub fn from_position_with(
        config: AyoConfig,
        position: Position,
        observer: O,
        score: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if position.round == 0 || position.round > config.max_rounds {
            return Err(ConfigError::Invalid(format!(
                "position round {} outside 1..={}",
                position.round, config.max_rounds
            )));
        }
        if position.pots.iter().all(|&c| c == 0) {
            return Err(ConfigError::Invalid("position has no stones on the board".into()));
        }
        if position.total_stones() > MAX_TOTAL_STONES {
            return Err(ConfigError::Invalid(format!(
                "position holds {} stones, more than {MAX_TOTAL_STONES}",
                position.total_stones()
            )));
        }
        let last_capturer = resumed_capturer(&position)?;

        let mut game = Self::assemble(config, observer, score);
        let captured_total = position.captured[Side::Human] + position.captured[Side::Opponent];
        game.board = Board::from_counts(position.pots, game.config.direction).with_captured(captured_total);

        for side in Side::all() {
            let player = &mut game.players[side];
            let stones = std::iter::repeat(Stone::new(StoneColor::for_side(side.other())));
            player.capture(stones.take(position.captured[side]));
            player.set_rounds_won(position.rounds_won[side]);
        }
        game.round = position.round;
        game.last_capturer = last_capturer;
        if let Some(rng) = &position.rng {
            game.rng = GameRng::from_state(rng);
        }

        game.score.game_started();
        let settled = game
            .next_mover(position.active.other())
            .and_then(|side| {
                game.active = side;
                game.run_opponent_turns()
            });
        if let Err(err) = settled {
            return Err(ConfigError::Invalid(format!("position cannot be resumed: {err}")));
        }
        Ok(game)
    }

    fn assemble(config: AyoConfig, observer: O, score: S) -> Self {
        let board = Board::new(config.stones_per_pot, config.direction);
        let players = SideMap::new(|side| Player::new(side, board.controlled_pots(side)));
        Self {
            rng: GameRng::new(config.seed),
            difficulty: config.difficulty,
            board,
            players,
            state: GameState::AwaitingSelection,
            active: Side::Human,
            round: 1,
            last_capturer: None,
            winner: None,
            config,
            observer,
            score,
        }
    }

    /// Throw the current game away and start again at round 1.
    ///
    /// The difficulty and the RNG stream carry over.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        self.board.reseed(self.config.stones_per_pot);
        for side in Side::all() {
            self.players[side] = Player::new(side, self.board.controlled_pots(side));
        }
        self.round = 1;
        self.last_capturer = None;
        self.winner = None;
        info!("new game");
        self.score.game_started();
        self.begin_round();
        self.run_opponent_turns()
    }

    // === Selection ===

    /// Check if the human may sow `pot` right now.
    #[must_use]
    pub fn can_select(&self, pot: PotId) -> bool {
        self.state == GameState::AwaitingSelection
            && self.active == Side::Human
            && self.players[Side::Human].controls(pot)
            && !self.board.is_empty(pot)
    }

    /// Play the human's turn from `pot`.
    ///
    /// Returns `Ok(false)` without touching anything when `can_select`
    /// is false. With `auto_play_opponent` set, any computer turns that
    /// follow are played before this returns.
    pub fn select(&mut self, pot: PotId) -> Result<bool, EngineError> {
        if !self.can_select(pot) {
            debug!(%pot, state = ?self.state, active = %self.active, "selection rejected");
            return Ok(false);
        }
        self.play_turn(pot)?;
        self.run_opponent_turns()?;
        Ok(true)
    }

    /// Play one computer turn, if the computer is to move.
    ///
    /// Returns `Ok(false)` when it is not the computer's turn.
    pub fn play_opponent_turn(&mut self) -> Result<bool, EngineError> {
        if self.state != GameState::AwaitingSelection || self.active != Side::Opponent {
            return Ok(false);
        }

        let candidates = self.board.playable_pots(Side::Opponent);
        let view = BoardView::of(&self.board);
        let pot = self
            .difficulty
            .selector()
            .select(&view, Side::Opponent, &candidates, &mut self.rng)
            .ok_or_else(|| EngineError::InvariantViolation("computer has no move".into()))?;

        debug!(%pot, difficulty = %self.difficulty, "computer selected");
        self.emit(GameEvent::OpponentSelected { pot });
        self.play_turn(pot)?;
        Ok(true)
    }

    fn run_opponent_turns(&mut self) -> Result<(), EngineError> {
        if !self.config.auto_play_opponent {
            return Ok(());
        }
        while self.play_opponent_turn()? {}
        Ok(())
    }

    // === Turn sequencing ===

    fn play_turn(&mut self, pot: PotId) -> Result<(), EngineError> {
        self.state = GameState::TurnInProgress;
        let side = self.active;

        let outcome = sow(&mut self.board, &mut self.players[side], pot)?;
        for event in &outcome.events {
            self.observer.on_event(event);
        }

        if outcome.captured_any() {
            self.last_capturer = Some(side);
            if side == Side::Human {
                for _ in &outcome.captures {
                    self.score.award(ScoreAward::PotCaptured);
                }
            }
        }
        self.check_conservation()?;

        self.finish_turn(side)
    }

    fn finish_turn(&mut self, side: Side) -> Result<(), EngineError> {
        let remaining = self.board.total_stones_on_board();

        if remaining <= SWEEP_THRESHOLD {
            if let Some(capturer) = self.last_capturer {
                if remaining > 0 {
                    self.sweep(capturer)?;
                }
                return self.end_round();
            }
        }

        if self.board.is_cleared() {
            return self.end_round();
        }

        self.active = self.next_mover(side)?;
        self.state = GameState::AwaitingSelection;
        Ok(())
    }

    /// The side to move after `side`, skipping sides with no stones.
    fn next_mover(&mut self, side: Side) -> Result<Side, EngineError> {
        let mut next = side.other();
        for _ in 0..Side::ALL.len() {
            if !self.board.all_controlled_pots_empty(next) {
                return Ok(next);
            }
            debug!(side = %next, "no stones, turn skipped");
            self.emit(GameEvent::TurnSkipped { side: next });
            next = next.other();
        }
        Err(EngineError::InvariantViolation(
            "neither side can move on a non-empty board".into(),
        ))
    }

    fn sweep(&mut self, side: Side) -> Result<(), EngineError> {
        let mut stones = 0;
        for pot in PotId::all() {
            if self.board.is_empty(pot) {
                continue;
            }
            let taken = self.board.capture_all(pot)?;
            stones += taken.len();
            self.players[side].capture(taken);
        }

        info!(%side, stones, "remaining stones captured");
        self.emit(GameEvent::RemainingCaptured { side, stones });
        if side == Side::Human {
            self.score.award(ScoreAward::RemainingCaptured);
        }
        self.check_conservation()
    }

    // === Rounds ===

    fn begin_round(&mut self) {
        self.active = round_starter(self.round);
        self.state = GameState::AwaitingSelection;
        info!(round = self.round, starter = %self.active, "round started");
        self.emit(GameEvent::RoundStarted { round: self.round });
    }

    fn end_round(&mut self) -> Result<(), EngineError> {
        self.state = GameState::RoundEnd;

        let human_captured = self.players[Side::Human].captured_count();
        let opponent_captured = self.players[Side::Opponent].captured_count();
        let result = RoundResult::from_captures(human_captured, opponent_captured);

        if let Some(side) = result.winner() {
            self.players[side].win_round();
        }
        self.score.award(match result {
            RoundResult::Win => ScoreAward::RoundWon,
            RoundResult::Lose => ScoreAward::RoundLost,
            RoundResult::Draw => ScoreAward::RoundDraw,
        });

        info!(round = self.round, %result, human_captured, opponent_captured, "round ended");
        self.emit(GameEvent::RoundEnded {
            result,
            human_captured,
            opponent_captured,
            human_rounds_won: self.players[Side::Human].rounds_won(),
            opponent_rounds_won: self.players[Side::Opponent].rounds_won(),
        });

        for side in Side::all() {
            self.players[side].clear_captured();
        }
        self.last_capturer = None;

        if self.round >= self.config.max_rounds {
            self.end_game();
            return Ok(());
        }

        self.round += 1;
        self.board.reseed(self.config.stones_per_pot);
        self.begin_round();
        self.check_conservation()
    }

    fn end_game(&mut self) {
        let winner = GameWinner::from_rounds(
            self.players[Side::Human].rounds_won(),
            self.players[Side::Opponent].rounds_won(),
        );
        self.score.award(match winner {
            GameWinner::Human => ScoreAward::GameWon,
            GameWinner::Opponent => ScoreAward::GameLost,
            GameWinner::Draw => ScoreAward::GameDraw,
        });

        info!(%winner, "game over");
        self.emit(GameEvent::GameOver { winner });
        self.winner = Some(winner);
        self.state = GameState::GameOver;
    }

    fn check_conservation(&self) -> Result<(), EngineError> {
        let captured: usize = Side::all().map(|s| self.players[s].captured_count()).sum();
        self.board.check_conservation(0, captured)
    }

    fn emit(&mut self, event: GameEvent) {
        self.observer.on_event(&event);
    }

    // === Settings ===

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &AyoConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The side to move.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    #[must_use]
    pub fn active_side_name(&self) -> &'static str {
        self.active.name()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    /// Stones a side has captured this round.
    #[must_use]
    pub fn captured(&self, side: Side) -> usize {
        self.players[side].captured_count()
    }

    #[must_use]
    pub fn controlled_pot_count(&self, side: Side) -> usize {
        self.players[side].controlled_pots().len()
    }

    /// Non-empty pots a side could sow.
    #[must_use]
    pub fn playable_pots(&self, side: Side) -> Vec<PotId> {
        self.board.playable_pots(side)
    }

    /// Current round, 1-based.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.config.max_rounds
    }

    #[must_use]
    pub fn rounds_won(&self, side: Side) -> u32 {
        self.players[side].rounds_won()
    }

    #[must_use]
    pub fn last_capturer(&self) -> Option<Side> {
        self.last_capturer
    }

    /// The winner once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<GameWinner> {
        self.winner
    }

    /// Snapshot the game for `from_position`.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        Position {
            pots: self.board.counts(),
            captured: SideMap::new(|side| self.players[side].captured_count()),
            rounds_won: SideMap::new(|side| self.players[side].rounds_won()),
            round: self.round,
            active: self.active,
            last_capturer: self.last_capturer,
            rng: Some(self.rng.state()),
        }
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn score(&self) -> &S {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut S {
        &mut self.score
    }
}
