//! Interactive solving session
//!
//! The loop renders the puzzle next to its current decipherment, reads one
//! command per line and dispatches it to the [`CipherEngine`]. A rejected
//! command is reported and the session carries on with the mapping untouched.
//! The session ends on `quit` or end of input.

use crate::cipher::{CipherEngine, CipherError, Command, ExportFormat};
use crate::render::Renderer;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw and read the next command
    Continue,
    /// Print the cipher in the given format, then continue
    Export(ExportFormat),
    /// End the session
    Quit,
}

/// One solving session over a fixed puzzle
#[derive(Debug)]
pub struct Repl {
    puzzle: String,
    engine: CipherEngine,
    renderer: Renderer,
}

impl Repl {
    pub fn new(puzzle: impl Into<String>, renderer: Renderer) -> Self {
        Self {
            puzzle: puzzle.into(),
            engine: CipherEngine::new(),
            renderer,
        }
    }

    /// The puzzle with the current cipher applied
    pub fn solution(&self) -> String {
        self.engine.apply_cipher(&self.puzzle)
    }

    /// Parse and apply one line of input
    pub fn process_command(&mut self, input: &str) -> Result<Outcome, CipherError> {
        match Command::parse(input)? {
            Command::Substitute { from, to } => {
                self.engine.substitute(&from, &to)?;
                self.warn_on_collisions();
                Ok(Outcome::Continue)
            }
            Command::Revert { letters } => {
                self.engine.revert(&letters)?;
                Ok(Outcome::Continue)
            }
            Command::Export { format } => Ok(Outcome::Export(format)),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn warn_on_collisions(&self) {
        for (target, sources) in self.engine.collisions() {
            let sources: String = sources.into_iter().collect();
            warn!(%target, %sources, "several letters map to the same target");
        }
    }

    fn write_export<W: Write>(&self, format: ExportFormat, out: &mut W) -> Result<()> {
        let pairs = self.engine.export();
        match format {
            ExportFormat::Table => write!(out, "{}", self.renderer.export_table(&pairs))?,
            ExportFormat::Json => writeln!(
                out,
                "{}",
                serde_json::to_string(&pairs).context("Failed to serialize cipher")?
            )?,
        }
        Ok(())
    }

    /// Run the session until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        loop {
            write!(out, "{}", self.renderer.board(&self.puzzle, &self.solution()))?;
            write!(out, "{}", self.renderer.prompt())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line).context("Failed to read command")? == 0 {
                writeln!(out)?;
                break;
            }
            debug!(command = line.trim_end(), "read command");

            match self.process_command(&line) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Export(format)) => self.write_export(format, &mut out)?,
                Ok(Outcome::Quit) => break,
                Err(e) => writeln!(out, "{}", self.renderer.error(&e))?,
            }
        }

        writeln!(out, "Quitting")?;
        Ok(())
    }
}
