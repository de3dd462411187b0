//! UCI front end
//!
//! Speaks UCI on stdin/stdout and logs to stderr. Strength is chosen with
//! `setoption name Difficulty value <level>` or `--difficulty`.

mod session;

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use opponent::{Difficulty, Opponent, OpponentConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use session::{Flow, Session};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  uci_engine [--config <file.toml>] [--difficulty <level>]");
    eprintln!();
    eprintln!("Levels: beginner, easy, hard, master");
    eprintln!("Logging is controlled with RUST_LOG (default: warn).");
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    difficulty: Difficulty,
}

fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config needs a file path");
                };
                options.config = Some(PathBuf::from(path));
                i += 1;
            }
            "--difficulty" | "-d" => {
                let Some(level) = args.get(i + 1) else {
                    bail!("--difficulty needs a level");
                };
                options.difficulty = level.parse()?;
                i += 1;
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument '{other}'"),
        }
        i += 1;
    }
    Ok(Some(options))
}

fn main() -> Result<()> {
    // stdout belongs to the UCI protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let config = match &options.config {
        Some(path) => OpponentConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => OpponentConfig::default(),
    };
    info!(?config, difficulty = %options.difficulty, "starting");

    let mut session = Session::new(Opponent::new(config), options.difficulty);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if session.handle(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    info!(difficulty = %session.difficulty(), fen = %session.position(), "exiting");
    Ok(())
}
