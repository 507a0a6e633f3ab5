use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use tile_core::Status;
use tile_engine::{RuleConfig, WIN_VALUE};
use tile_session::{save_state, simulate, FileStore, Game, Policy};

mod command;

use command::{Command, HELP};

#[derive(Debug, Parser)]
#[command(author, version, about = "2048 in the terminal, plus batch self-play")]
struct Cli {
    /// Board edge length
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Tile value that wins the game
    #[arg(long, default_value_t = WIN_VALUE)]
    win: u32,

    /// RNG seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Interactive game on stdin/stdout
    Play {
        /// Directory to save the game in and resume it from
        #[arg(long, value_name = "DIR")]
        state_dir: Option<PathBuf>,
    },
    /// Play many games with a fixed policy and print a summary
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: usize,

        /// random | corner
        #[arg(long, default_value = "corner")]
        policy: String,

        /// Number of worker threads (defaults to Rayon default)
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = RuleConfig::classic()
        .with_size(cli.size)
        .with_win_value(cli.win);
    config.validate().context("invalid rules")?;
    let seed = cli.seed.unwrap_or_else(clock_seed);

    match cli.cmd.unwrap_or(Cmd::Play { state_dir: None }) {
        Cmd::Play { state_dir } => play(config, seed, state_dir),
        Cmd::Simulate {
            games,
            policy,
            workers,
        } => run_simulation(&config, seed, games, &policy, workers),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn play(config: RuleConfig, seed: u64, state_dir: Option<PathBuf>) -> Result<()> {
    let mut store = state_dir
        .map(FileStore::open)
        .transpose()
        .context("opening state directory")?;

    let mut game = match &store {
        Some(store) => Game::restore(config.clone(), store, seed).or_else(|err| {
            warn!("discarding saved game: {err}");
            Game::new(config.clone(), seed)
        })?,
        None => Game::new(config, seed)?,
    };

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    render(&mut out, &game)?;
    writeln!(out, "{HELP}")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let Some(cmd) = Command::parse(&line) else {
            writeln!(out, "{HELP}")?;
            out.flush()?;
            continue;
        };

        match cmd {
            Command::Quit => break,
            Command::Undo => {
                if !game.undo() {
                    writeln!(out, "nothing to undo")?;
                }
            }
            Command::Restart => game.restart(),
            Command::Move(direction) => {
                let turn = game.play(direction)?;
                if !turn.moved && !turn.status.is_over() {
                    writeln!(out, "can't move {direction}")?;
                }
            }
        }

        if let Some(store) = store.as_mut() {
            save_state(store, game.state()).context("saving game")?;
        }
        render(&mut out, &game)?;
        out.flush()?;
    }

    info!(
        "final score {}, best {}",
        game.state().score,
        game.state().best_score
    );
    Ok(())
}

fn render(out: &mut impl Write, game: &Game) -> io::Result<()> {
    let state = game.state();
    writeln!(out)?;
    write!(out, "{}", state.grid)?;
    writeln!(out, "score {}  best {}", state.score, state.best_score)?;
    match state.status {
        Status::Playing => Ok(()),
        Status::Win => writeln!(
            out,
            "you reached {}! r to restart, u to undo",
            game.config().win_value
        ),
        Status::Lose => writeln!(out, "no moves left. r to restart, u to undo"),
    }
}

fn run_simulation(
    config: &RuleConfig,
    seed: u64,
    games: usize,
    policy: &str,
    workers: Option<usize>,
) -> Result<()> {
    let policy: Policy = policy.parse()?;
    if let Some(n) = workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("configuring worker threads")?;
    }

    let summary = simulate(config, games, seed, policy)
        .with_context(|| format!("simulating {games} games"))?;

    println!("games       {}", summary.games);
    println!("wins        {}", summary.wins);
    println!("mean score  {:.1}", summary.mean_score);
    println!("best score  {}", summary.best_score);
    println!("mean moves  {:.1}", summary.mean_moves);
    println!("highest tile:");
    for (tile, count) in summary.sorted_tiles() {
        println!("  {tile:>6}  {count}");
    }
    Ok(())
}
