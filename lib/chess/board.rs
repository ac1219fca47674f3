use crate::chess::Piece;
use arrayvec::ArrayString;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr, sync::OnceLock};

/// The notation of the board without any pieces.
pub const EMPTY_NOTATION: &str = "8/8/8/8/8/8/8/8";

/// The reason why a grid of cells does not make up a [`Board`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum StructureError {
    #[display(fmt = "incomplete board")]
    IncompleteBoard,
    #[display(fmt = "incomplete row")]
    IncompleteRow,
}

/// An 8x8 placement of pieces.
///
/// Cells are addressed by column and row, both in `0..8`.
/// Row 0 is the first segment of the notation, column 0 its leftmost cell.
///
/// This type does not validate whether the placement it holds is valid
/// according to any set of chess rules.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    rows: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<Option<Piece>>(), Board::SIZE * Board::SIZE)
            .prop_map(|cells| {
                let mut board = Board::default();

                board
                    .rows
                    .iter_mut()
                    .flatten()
                    .zip(cells)
                    .for_each(|(c, p)| *c = p);

                board
            })
            .boxed()
    }
}

impl Board {
    /// The number of rows, as well as the number of columns.
    pub const SIZE: usize = 8;

    #[inline(always)]
    pub(crate) fn new(rows: [[Option<Piece>; 8]; 8]) -> Self {
        Board { rows }
    }

    /// The board without any pieces.
    ///
    /// Decoded from [`EMPTY_NOTATION`] the first time it's needed.
    pub fn empty() -> Self {
        static EMPTY: OnceLock<Board> = OnceLock::new();

        *EMPTY.get_or_init(|| {
            let board = Board::from_str(EMPTY_NOTATION);
            debug_assert!(board.is_ok());
            board.unwrap_or_default()
        })
    }

    /// The [`Piece`] at the given column and row, if any.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in `0..8`.
    #[inline(always)]
    pub fn get(&self, col: usize, row: usize) -> Option<Piece> {
        self.rows[row][col]
    }

    /// The rows of this board, in notation order.
    #[inline(always)]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.rows
    }

    /// An iterator over occupied cells as `(piece, col, row)`.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, &cell)| Some((cell?, col, row)))
        })
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Retrieves the [`Piece`] at a given `(col, row)`, if any.
impl Index<(usize, usize)> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

/// Builds a [`Board`] from rows of cells, checking that the grid is 8x8.
impl TryFrom<Vec<Vec<Option<Piece>>>> for Board {
    type Error = StructureError;

    fn try_from(rows: Vec<Vec<Option<Piece>>>) -> Result<Self, Self::Error> {
        let rows: Vec<[Option<Piece>; 8]> = rows
            .into_iter()
            .map(|cells| cells.try_into().map_err(|_| StructureError::IncompleteRow))
            .collect::<Result<_, _>>()?;

        let rows = rows
            .try_into()
            .map_err(|_| StructureError::IncompleteBoard)?;

        Ok(Board::new(rows))
    }
}

/// Writes the board in placement notation, compressing runs of empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cells) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            let mut segment = ArrayString::<8>::new();
            let mut skip = 0;

            for cell in cells {
                match cell {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(segment, "{}", skip)?;
                            skip = 0;
                        }

                        segment.push(p.letter());
                    }
                }
            }

            if skip > 0 {
                write!(segment, "{}", skip)?;
            }

            f.write_str(&segment)?;
        }

        Ok(())
    }
}
