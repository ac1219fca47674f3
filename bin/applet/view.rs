use crate::io::Io;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use derive_more::{Display, Error};
use lib::load::{Filesystem, Load, Selection};
use lib::render::{Diagram, Style};
use lib::sequence::Sequence;
use std::io::{stdin, stdout, Read, Write};
use std::{fmt, path::PathBuf, str::FromStr};
use tracing::{instrument, warn};

/// Steps through a file of placements, one per line.
///
/// Reads commands from the standard input:
/// `next`, `prev`, `open <path>`, `cancel` and `quit`.
#[derive(Debug, Default, Parser)]
#[clap(disable_version_flag = true)]
pub struct View {
    /// How boards are drawn, e.g. `(glyphs: letters, coordinates: false)`.
    #[clap(short, long, default_value_t)]
    style: Style,

    /// The file to open.
    file: Option<PathBuf>,
}

impl View {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut viewer = Viewer::new(Filesystem, Io::new(stdout(), stdin()), self.style);

        if let Some(path) = self.file {
            viewer.open(Selection::Path(path));
        }

        viewer.run()
    }
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unknown command `{}`", _0)]
struct ParseCommandError(#[error(not(source))] String);

/// An instruction to the [`Viewer`].
#[derive(Debug, Clone, Eq, PartialEq)]
enum Command {
    Next,
    Previous,
    Open(PathBuf),
    Cancel,
    Quit,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "next" | "n" | ">" => Ok(Command::Next),
            "prev" | "p" | "<" => Ok(Command::Previous),
            "cancel" => Ok(Command::Cancel),
            "quit" | "q" => Ok(Command::Quit),
            _ => match s.split_once(char::is_whitespace) {
                Some(("open", path)) if !path.trim().is_empty() => {
                    Ok(Command::Open(path.trim().into()))
                }
                _ => Err(ParseCommandError(s.into())),
            },
        }
    }
}

/// The state of the navigation controls.
struct Status<'a>(&'a Sequence);

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Status(sequence) = self;

        if sequence.is_empty() {
            return f.write_str("no positions loaded");
        }

        let previous = if sequence.has_previous() { '<' } else { ' ' };
        let next = if sequence.has_next() { '>' } else { ' ' };

        write!(
            f,
            "{} {}/{} {}",
            previous,
            sequence.cursor() + 1,
            sequence.len(),
            next
        )
    }
}

/// Draws the current board of a [`Sequence`] after every [`Command`].
struct Viewer<L, W: Write, R: Read> {
    loader: L,
    io: Io<W, R>,
    style: Style,
    sequence: Sequence,
}

impl<L: Load, W: Write, R: Read> Viewer<L, W, R> {
    fn new(loader: L, io: Io<W, R>, style: Style) -> Self {
        Viewer {
            loader,
            io,
            style,
            sequence: Sequence::new(),
        }
    }

    fn open(&mut self, selection: Selection) {
        let result = self
            .sequence
            .open(&self.loader, selection)
            .context("failed to open file");

        if let Err(e) = result {
            warn!("{:?}", e);
        }
    }

    fn draw(&mut self) -> Result<(), Anyhow> {
        let diagram = Diagram::new(self.sequence.current(), self.style);
        self.io.send(diagram)?;
        self.io.send(Status(&self.sequence))?;
        self.io.flush()?;
        Ok(())
    }

    fn run(mut self) -> Result<(), Anyhow> {
        self.draw()?;

        while let Some(line) = self.io.recv()? {
            if line.trim().is_empty() {
                continue;
            }

            match line.parse() {
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }

                Ok(Command::Quit) => break,
                Ok(Command::Next) => {
                    self.sequence.step_forward();
                }

                Ok(Command::Previous) => {
                    self.sequence.step_back();
                }

                Ok(Command::Cancel) => self.open(Selection::Cancelled),
                Ok(Command::Open(path)) => self.open(Selection::Path(path)),
            }

            self.draw()?;
        }

        Ok(())
    }
}
