//! Headless Ayo simulator.
//!
//! Plays full games between the computer opponent and a stand-in human
//! driven by another difficulty tier, logging every event through
//! `tracing`. Set `RUST_LOG=debug` to see each sow.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use ayo_engine::ai::{BoardView, Difficulty};
use ayo_engine::core::{AyoConfig, GameRng, Side};
use ayo_engine::events::{GameEvent, GameObserver};
use ayo_engine::game::{AyoGame, GameWinner};
use ayo_engine::score::ScoreTally;

/// Play simulated Ayo games against the computer opponent
#[derive(Parser, Debug)]
#[command(name = "ayo_sim")]
#[command(version)]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value = "10")]
    games: u32,

    /// Seed for the computer opponent (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Computer difficulty: easy, medium or hard (overrides the config file)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Difficulty tier that plays the human side
    #[arg(long, default_value = "easy")]
    human: Difficulty,

    /// Rounds per game (overrides the config file)
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Abandon a game after this many human turns
    #[arg(long, default_value = "10000")]
    max_turns: u32,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Forwards every event to the log.
#[derive(Default)]
struct LogObserver {
    events: u64,
}

impl GameObserver for LogObserver {
    fn on_event(&mut self, event: &GameEvent) {
        self.events += 1;
        match event {
            GameEvent::RoundEnded { .. } | GameEvent::GameOver { .. } => info!(?event),
            _ => debug!(?event),
        }
    }
}

fn load_config(cli: &Cli) -> Result<AyoConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            AyoConfig::from_toml_str(&source).with_context(|| format!("loading {}", path.display()))?
        }
        None => AyoConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(rounds) = cli.max_rounds {
        config.max_rounds = rounds;
    }
    config.auto_play_opponent = true;
    config.validate()?;
    Ok(config)
}

/// Play one game to the end. Returns `None` if it hit the turn limit.
fn play_game(
    game: &mut AyoGame<LogObserver, ScoreTally>,
    human: Difficulty,
    rng: &mut GameRng,
    max_turns: u32,
) -> Result<Option<GameWinner>> {
    let mut turns = 0;
    while !game.state().is_over() {
        if turns >= max_turns {
            return Ok(None);
        }

        match game.active_side() {
            Side::Human => {
                let candidates = game.playable_pots(Side::Human);
                let view = BoardView::of(game.board());
                let Some(pot) = human.selector().select(&view, Side::Human, &candidates, rng) else {
                    bail!("human side has no move in state {:?}", game.state());
                };
                if !game.select(pot)? {
                    bail!("selection of {pot} rejected");
                }
                turns += 1;
            }
            Side::Opponent => {
                if !game.play_opponent_turn()? {
                    bail!("computer could not move in state {:?}", game.state());
                }
            }
        }
    }
    Ok(game.winner())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(
        games = cli.games,
        difficulty = %config.difficulty,
        human = %cli.human,
        max_rounds = config.max_rounds,
        seed = config.seed,
        "starting simulation"
    );

    let mut human_rng = GameRng::new(config.seed.wrapping_add(1));
    let mut game = AyoGame::with_parts(config, LogObserver::default(), ScoreTally::new())?;

    let (mut human_wins, mut opponent_wins, mut draws, mut abandoned) = (0u32, 0u32, 0u32, 0u32);
    for index in 0..cli.games {
        if index > 0 {
            game.new_game()?;
        }

        match play_game(&mut game, cli.human, &mut human_rng, cli.max_turns)? {
            Some(GameWinner::Human) => human_wins += 1,
            Some(GameWinner::Opponent) => opponent_wins += 1,
            Some(GameWinner::Draw) => draws += 1,
            None => {
                warn!(game = index + 1, "turn limit reached, game abandoned");
                abandoned += 1;
            }
        }
        info!(game = index + 1, score = game.score().game_score(), "game finished");
    }

    info!(
        human_wins,
        opponent_wins,
        draws,
        abandoned,
        total_points = game.score().total_points(),
        events = game.observer().events,
        "simulation complete"
    );
    Ok(())
}
