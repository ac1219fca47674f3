use crate::chess::{Board, Piece};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// The reason why a line is not valid placement notation.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum FormatError {
    #[display(fmt = "incomplete board")]
    IncompleteBoard,
    #[display(fmt = "incomplete row")]
    IncompleteRow,
    #[display(fmt = "{} is not a valid chess piece", _0)]
    InvalidPiece(#[error(not(source))] char),
}

/// Decodes one line of placement notation into a [`Board`].
///
/// The line holds 8 segments separated by `/`, one per row.
/// Within a segment, a digit from `1` to `9` stands for that many empty cells
/// and a letter in `pnbrqk` for a piece, uppercase for white and lowercase for black.
/// Every character of every segment is checked before the length of any row,
/// and every segment must add up to exactly 8 cells.
#[instrument(level = "trace", ret, err)]
pub fn decode(line: &str) -> Result<Board, FormatError> {
    let segments: Vec<_> = line.split('/').collect();
    let segments: [&str; 8] = segments
        .try_into()
        .map_err(|_| FormatError::IncompleteBoard)?;

    let mut expanded: [Vec<Option<Piece>>; 8] = Default::default();
    for (cells, segment) in expanded.iter_mut().zip(segments) {
        *cells = expand(segment)?;
    }

    let mut rows = [[None; 8]; 8];
    for (row, cells) in rows.iter_mut().zip(expanded) {
        *row = cells.try_into().map_err(|_| FormatError::IncompleteRow)?;
    }

    Ok(Board::new(rows))
}

fn expand(segment: &str) -> Result<Vec<Option<Piece>>, FormatError> {
    let mut cells = Vec::with_capacity(Board::SIZE);

    for c in segment.chars() {
        match c {
            '1'..='9' => cells.extend((0..c as u8 - b'0').map(|_| None)),
            _ => match Piece::from_letter(c) {
                Some(p) => cells.push(Some(p)),
                None => return Err(FormatError::InvalidPiece(c)),
            },
        }
    }

    Ok(cells)
}

impl FromStr for Board {
    type Err = FormatError;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
