//! Command parsing and the interactive session state.

use std::io::Write;

use chess_core::{Color, Square, SquareError};
use chess_rules::Board;
use thiserror::Error;
use tracing::debug;

use crate::config::{CliConfig, StartPosition};

/// A line the user typed, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move whatever stands on `from` to `to`.
    Move { from: Square, to: Square },
    /// Print the board.
    Board,
    /// List the legal targets of the piece on a square.
    Moves(Square),
    /// Restore the configured start position.
    Reset,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error(transparent)]
    Square(#[from] SquareError),
    #[error("unrecognised command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parses `board`, `moves <square>`, `reset`, `quit`, or a coordinate
    /// pair written as `e2 e4` or `e2e4`. Case-insensitive.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim().to_ascii_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["board"] => Ok(Command::Board),
            ["reset"] => Ok(Command::Reset),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["moves", square] => Ok(Command::Moves(square.parse()?)),
            [from, to] => Ok(Command::Move {
                from: from.parse()?,
                to: to.parse()?,
            }),
            [pair] if pair.len() == 4 && pair.is_ascii() => Ok(Command::Move {
                from: pair[..2].parse()?,
                to: pair[2..].parse()?,
            }),
            _ => Err(CommandError::Unknown(line.clone())),
        }
    }
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game in progress plus the host settings that shape its output.
pub struct Session {
    board: Board,
    config: CliConfig,
}

impl Session {
    pub fn new(config: CliConfig) -> Self {
        let board = start_board(config.start);
        Self { board, config }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs one command, writing the response to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Board => writeln!(out, "{}", self.board)?,
            Command::Reset => {
                self.board = start_board(self.config.start);
                writeln!(out, "reset")?;
                self.report_turn(out)?;
            }
            Command::Moves(at) => match self.board.piece_at(at) {
                None => writeln!(out, "no piece on {at}")?,
                Some(piece) => {
                    let targets: Vec<String> = self
                        .board
                        .legal_targets(piece)?
                        .into_iter()
                        .map(|sq| sq.to_algebraic())
                        .collect();
                    if targets.is_empty() {
                        writeln!(out, "{at}: none")?;
                    } else {
                        writeln!(out, "{at}: {}", targets.join(" "))?;
                    }
                }
            },
            Command::Move { from, to } => {
                let Some(piece) = self.board.piece_at(from) else {
                    writeln!(out, "no piece on {from}")?;
                    return Ok(Flow::Continue);
                };
                let moved = self
                    .board
                    .attempt_move(piece, to.rank() as i32, to.file() as i32)?;
                debug!(%from, %to, moved, "move requested");
                if moved {
                    writeln!(out, "ok")?;
                    if self.config.show_board {
                        writeln!(out, "{}", self.board)?;
                    }
                } else {
                    writeln!(out, "illegal")?;
                }
                self.report_turn(out)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn report_turn(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let turn = self.board.turn_color();
        if self.board.is_in_check(turn)? {
            writeln!(out, "{turn} to move, check")?;
        } else {
            writeln!(out, "{turn} to move")?;
        }
        Ok(())
    }
}

fn start_board(start: StartPosition) -> Board {
    let mut board = Board::new();
    if start == StartPosition::Standard {
        board.setup_game();
    }
    board
}

/// Prompt shown before each line is read.
pub fn prompt(turn: Color) -> String {
    match turn {
        Color::White => "white> ".to_string(),
        Color::Black => "black> ".to_string(),
    }
}
