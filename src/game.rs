#![cfg(feature = "std")]

//! Turn alternation between two combatants.

use std::convert::Infallible;
use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::{
    board::Grid,
    common::{BoardError, TurnError},
    config::GameConfig,
    fleet::random_grid,
    player::{Combatant, Player},
    player_ai::AiPlayer,
    player_cli::{coord_to_string, CliPlayer},
};

const SEPARATOR: &str = "---------------------------";

const BANNER: &str = "
***********************************
*            SEA  BATTLE          *
*          WELCOME, ADMIRAL!      *
***********************************

Do you know the rules?";

const RULES: &str = "
Rules:
Sea battle is a game for two. Your opponent is the computer.
Each side has one 3-deck, two 2-deck and four 1-deck vessels.
Vessels never touch each other, not even at the corners.

Shoot by typing the row and column as two numbers separated by a
space, e.g. `3 4`. A hit is marked X, a miss T. Hitting or sinking
a vessel earns another shot; a miss passes the turn.

Whoever sinks the whole enemy fleet first wins. Good luck!";

/// Which side of a human-vs-computer game won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Winner {
    Human,
    Computer,
}

/// Side of an automated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

/// Result of [`play_out`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchSummary {
    pub winner: Side,
    /// Number of times the turn passed between sides.
    pub turns: usize,
    /// Accepted shots fired by the first and second side.
    pub shots: [usize; 2],
    /// Vessels sunk by the first and second side.
    pub sunk: [usize; 2],
}

fn widen(err: TurnError<Infallible>) -> BoardError {
    match err {
        TurnError::Input(never) => match never {},
        TurnError::Board(e) => e,
    }
}

/// Fight two automated combatants to the end. The first side shoots first.
pub fn play_out<A, B>(
    first: &mut Combatant<A>,
    second: &mut Combatant<B>,
) -> Result<MatchSummary, BoardError>
where
    A: Player<Error = Infallible>,
    B: Player<Error = Infallible>,
{
    let mut turns = 0;
    let mut shots = [0usize; 2];
    let mut first_to_move = true;
    loop {
        let repeat = if first_to_move {
            shots[0] += 1;
            first.execute_turn(second.grid_mut()).map_err(widen)?
        } else {
            shots[1] += 1;
            second.execute_turn(first.grid_mut()).map_err(widen)?
        };

        let winner = if second.grid().is_defeated() {
            Some(Side::First)
        } else if first.grid().is_defeated() {
            Some(Side::Second)
        } else {
            None
        };
        if let Some(winner) = winner {
            return Ok(MatchSummary {
                winner,
                turns,
                shots,
                sunk: [second.grid().sunk_count(), first.grid().sunk_count()],
            });
        }
        if !repeat {
            first_to_move = !first_to_move;
            turns += 1;
        }
    }
}

/// Interactive game: a console human against a random computer.
pub struct Game<I, O, R> {
    human: Combatant<CliPlayer<I, O>>,
    computer: Combatant<AiPlayer<R>>,
}

impl<I: BufRead, O: Write, R: Rng> Game<I, O, R> {
    /// Generate both fleets with `setup_rng` and hide the computer's grid.
    pub fn new<S: Rng + ?Sized>(
        config: &GameConfig,
        setup_rng: &mut S,
        human: CliPlayer<I, O>,
        computer: AiPlayer<R>,
    ) -> Result<Self, BoardError> {
        let human_grid = random_grid(setup_rng, config)?;
        let mut computer_grid = random_grid(setup_rng, config)?;
        computer_grid.set_hidden(true);
        Ok(Self::from_grids(human_grid, human, computer_grid, computer))
    }

    /// Start from grids that have already left setup.
    pub fn from_grids(
        human_grid: Grid,
        human: CliPlayer<I, O>,
        computer_grid: Grid,
        computer: AiPlayer<R>,
    ) -> Self {
        Self {
            human: Combatant::new(human_grid, human),
            computer: Combatant::new(computer_grid, computer),
        }
    }

    pub fn human(&self) -> &Combatant<CliPlayer<I, O>> {
        &self.human
    }

    pub fn computer(&self) -> &Combatant<AiPlayer<R>> {
        &self.computer
    }

    fn out(&mut self) -> &mut O {
        self.human.player_mut().output_mut()
    }

    /// Print the banner and ask whether the rules are known.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out(), "{}", BANNER)?;
        loop {
            let answer = self.human.player_mut().ask("Type yes or no: ")?;
            match answer.trim().to_lowercase().as_str() {
                "yes" => {
                    writeln!(self.out(), "Okay, let's begin!")?;
                    return Ok(());
                }
                "no" => {
                    writeln!(self.out(), "{}", RULES)?;
                    return Ok(());
                }
                _ => writeln!(self.out(), "Sorry, I need a yes or a no.")?,
            }
        }
    }

    fn print_grids(&mut self) -> io::Result<()> {
        let mine = self.human.grid().to_string();
        let theirs = self.computer.grid().to_string();
        let out = self.out();
        writeln!(out, "{}\nYour board:\n{}", SEPARATOR, mine)?;
        writeln!(out, "{}\nComputer's board:\n{}", SEPARATOR, theirs)
    }

    /// Alternate turns until one fleet is sunk. A hit or a sinking keeps the
    /// turn with the shooter.
    pub fn run(&mut self) -> Result<Winner, TurnError<io::Error>> {
        let mut human_to_move = true;
        loop {
            self.print_grids().map_err(TurnError::Input)?;
            let repeat = if human_to_move {
                writeln!(self.out(), "{}\nYour move!", SEPARATOR).map_err(TurnError::Input)?;
                self.human.execute_turn(self.computer.grid_mut())?
            } else {
                writeln!(self.out(), "{}\nComputer moves!", SEPARATOR)
                    .map_err(TurnError::Input)?;
                let repeat = self
                    .computer
                    .execute_turn(self.human.grid_mut())
                    .map_err(|e| TurnError::Board(widen(e)))?;
                self.announce_computer_shot().map_err(TurnError::Input)?;
                repeat
            };

            if self.computer.grid().is_defeated() {
                self.print_grids().map_err(TurnError::Input)?;
                writeln!(self.out(), "{}\nHooray! You won!", SEPARATOR).map_err(TurnError::Input)?;
                return Ok(Winner::Human);
            }
            if self.human.grid().is_defeated() {
                self.print_grids().map_err(TurnError::Input)?;
                writeln!(self.out(), "{}\nThe computer won.", SEPARATOR)
                    .map_err(TurnError::Input)?;
                return Ok(Winner::Computer);
            }
            if !repeat {
                human_to_move = !human_to_move;
            }
        }
    }

    fn announce_computer_shot(&mut self) -> io::Result<()> {
        for (target, error) in self.computer.player_mut().take_rejected() {
            writeln!(
                self.out(),
                "Computer fires at {}: {}.",
                coord_to_string(target),
                error
            )?;
        }
        let ai = self.computer.player();
        let (Some(target), Some(outcome)) = (ai.last_move(), ai.last_outcome()) else {
            return Ok(());
        };
        writeln!(
            self.out(),
            "Computer fires at {}: {:?}",
            coord_to_string(target),
            outcome
        )
    }
}
