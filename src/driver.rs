use std::io;
use std::io::BufRead;
use std::io::Write;

use crossterm::queue;
use crossterm::style;
use thiserror::Error;
use tracing::info;
use tracing::warn;

use crate::grid::GridError;
use crate::simulation::Simulation;

/// Size of the demo grid, as `(rows, columns)`
pub const DEMO_SIZE: (usize, usize) = (5, 3);

/// Living cells the demo starts with
pub const DEMO_SEED: [(usize, usize); 4] = [(0, 1), (1, 0), (1, 1), (1, 2)];

const EXTINCT: &str = "Sorry - everyone died!\n";

/// How the driver gets its starting grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Run a fixed pattern until it dies out, without asking anything
    Demo,

    /// Ask for the grid size and seed cells, then ask before every day
    Interactive,
}

impl Mode {
    /// Pick the mode from the program arguments (without the program name). A single `demo`
    /// argument, in any case, selects `Mode::Demo`.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        match (args.next(), args.next()) {
            (Some(arg), None) if arg.as_ref().eq_ignore_ascii_case("demo") => Mode::Demo,
            _ => Mode::Interactive,
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Input closed before the game finished")]
    InputClosed,
}

/// Runs a game over some input and output, usually stdin and stdout.
pub struct Driver<R, W> {
    input: R,
    output: W,
}

impl<R, W> Driver<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, mode: Mode) -> Result<(), DriverError> {
        info!(?mode, "starting game");

        match mode {
            Mode::Demo => self.run_demo(),
            Mode::Interactive => self.run_interactive(),
        }
    }

    fn run_demo(&mut self) -> Result<(), DriverError> {
        let (rows, columns) = DEMO_SIZE;

        let mut sim = Simulation::new(rows, columns)?;

        for (row, column) in DEMO_SEED {
            sim.add_life(row, column)?;
        }

        while sim.has_life() {
            self.print_day(&sim)?;
            sim.advance_day();
        }

        self.print_day(&sim)?;
        self.print(EXTINCT)?;

        Ok(())
    }

    fn run_interactive(&mut self) -> Result<(), DriverError> {
        let mut sim = loop {
            let rows = self.read_usize("Enter the number of rows: ")?;
            let columns = self.read_usize("Enter the number of columns: ")?;

            match Simulation::new(rows, columns) {
                Ok(sim) => break sim,
                Err(e) => self.print(&format!("{e}\n"))?,
            }
        };

        if sim.grid().cells().is_empty() {
            warn!("Grid has no cells, skipping seeding");
        } else {
            self.seed(&mut sim)?;
        }

        loop {
            self.print_day(&sim)?;
            sim.advance_day();

            if !self.read_bool("Do you want to see the next day?(y/n): ")? || !sim.has_life() {
                break;
            }
        }

        if !sim.has_life() {
            self.print_day(&sim)?;
            self.print(EXTINCT)?;
        }

        Ok(())
    }

    fn seed(&mut self, sim: &mut Simulation) -> Result<(), DriverError> {
        loop {
            let row = self.read_usize("Enter row of live cell: ")?;
            let column = self.read_usize("Enter column of live cell: ")?;

            if let Err(e) = sim.add_life(row, column) {
                self.print(&format!("{e}\n"))?;
                continue;
            }

            if !self.read_bool("More live cells to enter?(y/n): ")? {
                return Ok(());
            }
        }
    }

    fn print_day(&mut self, sim: &Simulation) -> io::Result<()> {
        queue!(
            self.output,
            style::Print(format!("Day {}\n", sim.day())),
            style::Print(sim.render()),
            style::Print("\n"),
        )?;

        self.output.flush()
    }

    fn print(&mut self, s: &str) -> io::Result<()> {
        queue!(self.output, style::Print(s))?;

        self.output.flush()
    }

    /// Show `prompt` and read back one trimmed line
    fn prompt(&mut self, prompt: &str) -> Result<String, DriverError> {
        self.print(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DriverError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    fn read_usize(&mut self, prompt: &str) -> Result<usize, DriverError> {
        loop {
            let line = self.prompt(prompt)?;

            match line.parse() {
                Ok(n) => return Ok(n),
                Err(e) => warn!("Ignoring \"{line}\": {e}"),
            }
        }
    }

    fn read_bool(&mut self, prompt: &str) -> Result<bool, DriverError> {
        loop {
            let line = self.prompt(prompt)?;

            match line.to_lowercase().as_str() {
                "y" | "yes" | "true" => return Ok(true),
                "n" | "no" | "false" => return Ok(false),
                _ => warn!("Ignoring \"{line}\": expected y or n"),
            }
        }
    }
}
