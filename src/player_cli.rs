#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::{
    common::{BoardError, ShotOutcome},
    player::Player,
    ship::Coordinate,
};

/// Why a line typed by the human could not be turned into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two whitespace-separated tokens.
    WrongArity(usize),
    /// A token is not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongArity(_) => {
                write!(f, "Enter the coordinates as two numbers separated by a space.")
            }
            InputError::NotANumber(tok) => write!(
                f,
                "'{}' is not a number. Enter the coordinates as two numbers separated by a space.",
                tok
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a 1-based "row col" pair into a 0-based coordinate.
///
/// `0` is accepted and becomes `-1`, which the grid rejects as out of bounds.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongArity(tokens.len()));
    }
    let parse = |tok: &str| -> Result<i32, InputError> {
        if tok.is_empty() || !tok.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber(tok.to_string()));
        }
        tok.parse::<i32>()
            .map(|n| n - 1)
            .map_err(|_| InputError::NotANumber(tok.to_string()))
    };
    Ok(Coordinate::new(parse(tokens[0])?, parse(tokens[1])?))
}

/// Format a 0-based coordinate the way the human types it.
pub fn coord_to_string(coord: Coordinate) -> String {
    format!("{} {}", coord.row + 1, coord.col + 1)
}

/// Interactive player reading targets from `input` and echoing to `output`.
pub struct CliPlayer<I, O> {
    input: I,
    output: O,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Print `prompt` and return the next line typed, without its newline.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.trim_end().to_string())
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    type Error = io::Error;

    fn request_move(&mut self, _grid_size: usize) -> io::Result<Coordinate> {
        loop {
            write!(self.output, "Shoot at: ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_coordinate(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        let msg = match outcome {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Hit!",
            ShotOutcome::Sunk => "Vessel sunk!",
        };
        let _ = writeln!(self.output, "{}", msg);
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, error: BoardError) {
        let _ = writeln!(self.output, "{}.", error);
    }
}
