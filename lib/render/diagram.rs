use crate::chess::Board;
use crate::render::{Sprites, Style};
use std::fmt::{self, Write};

const FILES: [char; Board::SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const BORDER: &str = "+---+---+---+---+---+---+---+---+";

/// Draws a [`Board`] as a text diagram, the first row on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Diagram {
    board: Board,
    style: Style,
}

impl Diagram {
    pub fn new(board: Board, style: Style) -> Self {
        Diagram { board, style }
    }

    fn margin(&self) -> &'static str {
        if self.style.coordinates {
            "   "
        } else {
            ""
        }
    }

    fn files(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.margin())?;
        for file in FILES {
            write!(f, "  {} ", file)?;
        }

        Ok(())
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sprites = Sprites::get();

        if self.style.coordinates {
            self.files(f)?;
            f.write_char('\n')?;
        }

        for (i, cells) in self.board.rows().iter().enumerate() {
            let rank = Board::SIZE - i;

            writeln!(f, "{}{}", self.margin(), BORDER)?;

            if self.style.coordinates {
                write!(f, " {} ", rank)?;
            }

            f.write_char('|')?;
            for cell in cells {
                match cell {
                    Some(p) => write!(f, " {} |", sprites[*p].glyph(self.style.glyphs))?,
                    None => f.write_str("   |")?,
                }
            }

            if self.style.coordinates {
                write!(f, " {}", rank)?;
            }

            f.write_char('\n')?;
        }

        write!(f, "{}{}", self.margin(), BORDER)?;

        if self.style.coordinates {
            f.write_char('\n')?;
            self.files(f)?;
        }

        Ok(())
    }
}
