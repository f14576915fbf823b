//! Reads coordinate moves from stdin and plays them on a rules-checked board.

mod config;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use session::{Command, Flow, Session};

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Play chess moves as coordinate pairs, e.g. `e2 e4`")]
struct Cli {
    /// Configuration file (defaults to ./chess.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log_level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!(start = ?config.start, "starting session");

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", session.board())?;
    loop {
        write!(stdout, "{}", session::prompt(session.board().turn_color()))?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(session::CommandError::Empty) => continue,
            Err(e) => {
                writeln!(stdout, "error: {e}")?;
                continue;
            }
        };
        if session.execute(command, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
