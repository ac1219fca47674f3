use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Board;
use lib::render::{Diagram, Style};
use tracing::{info, instrument};

/// Prints placements given in notation.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct Show {
    /// How boards are drawn, e.g. `(glyphs: letters, coordinates: false)`.
    #[clap(short, long, default_value_t)]
    style: Style,

    /// Placements such as `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    #[clap(required = true)]
    boards: Vec<Board>,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        for board in self.boards {
            info!(%board);
            println!("{}\n", Diagram::new(board, self.style));
        }

        Ok(())
    }
}
