//! word-battle command line.
//!
//! - `simulate`: run a series of computer games, save their replays and
//!   print the summary
//! - `replay`: print a saved game frame by frame

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use word_battle::core::{Difficulty, PlayerProfile};
use word_battle::game::{Series, SeriesConfig};
use word_battle::replay::store;
use word_battle::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "word-battle", version, about = "Grid word game with rollout-based computer players")]
struct Cli {
    /// Settings file (default: ./word-battle.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play computer-only games and save their replays.
    Simulate {
        /// Board side length
        #[arg(long)]
        length: usize,

        /// Number of games
        #[arg(long, default_value_t = 1)]
        games: u32,

        /// A computer player as NAME:DIFFICULTY (EASY, MEDIUM or HARD); repeat for each seat
        #[arg(long = "player", value_parser = parse_player, required = true)]
        players: Vec<PlayerProfile>,

        /// RNG seed (overrides the settings file and WORD_BATTLE_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Do not write replay files
        #[arg(long)]
        no_save: bool,
    },

    /// Print a replay file frame by frame.
    Replay {
        file: PathBuf,
    },
}

fn parse_player(raw: &str) -> std::result::Result<PlayerProfile, String> {
    let (name, difficulty) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:DIFFICULTY, got {raw:?}"))?;
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(PlayerProfile::computer(name.trim(), difficulty))
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_battle=info"));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref()).context("loading settings")?;

    match cli.command {
        Command::Simulate {
            length,
            games,
            players,
            seed,
            no_save,
        } => simulate(&settings, length, games, players, seed, no_save),
        Command::Replay { file } => replay(&file),
    }
}

fn simulate(
    settings: &Settings,
    length: usize,
    games: u32,
    players: Vec<PlayerProfile>,
    seed: Option<u64>,
    no_save: bool,
) -> Result<()> {
    let length = settings.validate_board_length(length)?;
    anyhow::ensure!(games >= 1, "at least one game must be played");

    let seed = seed.or(settings.seed).unwrap_or_else(clock_seed);
    let vocabularies = settings.vocabulary.load().context("loading vocabularies")?;

    let config = SeriesConfig::default()
        .with_games(games)
        .with_board_length(length)
        .with_seed(seed)
        .with_name_limit(settings.players.name_limit);
    info!(games, length, seed, "starting series");

    let mut series = Series::new(config, players, &vocabularies, settings.agent.clone())?;
    while let Some(game) = series.play_next()? {
        let last = game
            .log
            .last()
            .map(ToString::to_string)
            .unwrap_or_default();
        println!("Game {}: {} | {}", game.log.header.game_number, game.title, last);

        if no_save {
            continue;
        }
        match store::save_log(&settings.replay.dir, &game.title, &settings.replay.extension, &game.log) {
            Ok(path) => println!("  saved {}", path.display()),
            Err(err) => warn!(%err, "replay not saved"),
        }
    }

    println!("\n{}", series.summary());
    Ok(())
}

fn replay(file: &std::path::Path) -> Result<()> {
    let log = store::load(file)?;
    let header = &log.header;
    println!(
        "Replay file: {}\nGame {} | {}x{} board | duration {}\n",
        file.display(),
        header.game_number,
        header.board_length,
        header.board_length,
        header.game_duration
    );

    for (turn, frame) in log.frames()?.iter().enumerate() {
        println!("Turn {}: {}", turn + 1, frame.event);
        println!("{}", frame.board);
    }
    Ok(())
}
