//! The read-eval-print loop that forwards commands to the engine.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use cubello_core::engine;
use tracing::{debug, warn};

use crate::command::{self, Command};
use crate::render;

/// Whether the loop keeps reading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive game plus the display toggle.
#[derive(Debug)]
pub struct Session {
    game: engine::Game,
    hints: bool,
}

impl Session {
    pub fn new(hints: bool) -> Self {
        Self {
            game: engine::Game::new(),
            hints,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", command::HELP)?;
        self.show(&mut out)?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if self.handle(&line, &mut out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }

        Ok(())
    }

    /// Handles one line of input.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let parsed = match command::parse(line) {
            Ok(parsed) => parsed,
            Err(command::ParseError::Empty) => return Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?parsed, "command");

        match parsed {
            Command::Place(x, y, z) => self.place(x, y, z, out)?,
            Command::Moves => {
                let moves = self.game.legal_moves(self.game.side_to_move());
                writeln!(out, "legal moves: {}", render::coord_list(&moves))?;
            }
            Command::Hints => {
                self.hints = !self.hints;
                self.show(out)?;
            }
            Command::Score => writeln!(out, "{}", render::status(&self.game))?,
            Command::Reset => {
                self.game.reset();
                self.show(out)?;
            }
            Command::Help => writeln!(out, "{}", command::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn place<W: Write>(&mut self, x: i32, y: i32, z: i32, out: &mut W) -> Result<()> {
        let outcome = match self.game.apply_move(x, y, z) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(x, y, z, %err, "move refused");
                writeln!(out, "{err}")?;
                return Ok(());
            }
        };

        writeln!(
            out,
            "{} placed at {}, flipping {}",
            outcome.mover,
            outcome.placed,
            render::coord_list(&outcome.flipped)
        )?;
        if let Some(passed) = outcome.passed {
            writeln!(out, "{}", render::pass_notice(passed))?;
        }
        self.show(out)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", render::board(&self.game, self.hints))?;
        writeln!(out, "{}", render::status(&self.game))?;
        Ok(())
    }
}
