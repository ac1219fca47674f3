use crate::chess::{decode, Board, FormatError};
use crate::load::{Load, LoadError, Selection};
use tracing::{debug, instrument};

/// An ordered sequence of [`Board`]s and a cursor pointing at the current one.
///
/// The cursor never leaves `0..len`, except when the sequence is empty,
/// in which case it is 0 and [`Sequence::current`] is the empty board.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Sequence {
    boards: Vec<Board>,
    cursor: usize,
}

impl Sequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// The position of the cursor.
    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The number of boards.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether there are no boards.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// All boards, in order.
    #[inline(always)]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// The board at the cursor, or the empty board if there are none.
    pub fn current(&self) -> Board {
        self.boards
            .get(self.cursor)
            .copied()
            .unwrap_or_else(Board::empty)
    }

    /// Whether [`Sequence::step_back`] would move the cursor.
    #[inline(always)]
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`Sequence::step_forward`] would move the cursor.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.boards.len()
    }

    /// Moves the cursor to the previous board, if there is one.
    ///
    /// Returns whether the cursor moved.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn step_back(&mut self) -> bool {
        if self.has_previous() {
            self.cursor -= 1;
            debug!(cursor = self.cursor, "previous");
            true
        } else {
            false
        }
    }

    /// Moves the cursor to the next board, if there is one.
    ///
    /// Returns whether the cursor moved.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn step_forward(&mut self) -> bool {
        if self.has_next() {
            self.cursor += 1;
            debug!(cursor = self.cursor, "next");
            true
        } else {
            false
        }
    }

    /// Replaces all boards by the decoding of `lines` and resets the cursor.
    ///
    /// Either every line decodes and the sequence is replaced,
    /// or the first [`FormatError`] is returned and the sequence is left as it was.
    #[instrument(level = "debug", skip(self, lines), err)]
    pub fn replace_all<I>(&mut self, lines: I) -> Result<(), FormatError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let boards = lines
            .into_iter()
            .map(|l| decode(l.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(boards = boards.len(), "replaced");

        self.boards = boards;
        self.cursor = 0;
        Ok(())
    }

    /// Removes all boards and resets the cursor.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.boards.clear();
        self.cursor = 0;
    }

    /// Applies the outcome of a file-open action.
    ///
    /// A cancelled selection clears the sequence, a chosen file replaces it.
    /// If the file cannot be read or decoded, the sequence is left as it was.
    #[instrument(level = "debug", skip(self, loader), err)]
    pub fn open<L: Load>(&mut self, loader: &L, selection: Selection) -> Result<(), LoadError> {
        match selection {
            Selection::Cancelled => self.clear(),
            Selection::Path(path) => self.replace_all(loader.read_lines(&path)?)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::MockLoad;
    use proptest::{arbitrary::any, collection::vec};
    use std::io;
    use std::path::PathBuf;
    use test_strategy::proptest;

    fn sequence(boards: Vec<Board>, cursor: usize) -> Sequence {
        Sequence { boards, cursor }
    }

    #[test]
    fn empty_sequence_falls_back_to_the_empty_board() {
        let s = Sequence::new();
        assert_eq!(s.current(), Board::empty());
        assert_eq!(s.cursor(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn empty_sequence_cannot_step() {
        let mut s = Sequence::new();
        assert!(!s.step_forward());
        assert!(!s.step_back());
        assert_eq!(s.cursor(), 0);
    }

    #[proptest]
    fn current_returns_board_at_cursor(
        #[strategy(vec(any::<Board>(), 1..8))] boards: Vec<Board>,
        #[strategy(0..#boards.len())] cursor: usize,
    ) {
        let s = sequence(boards.clone(), cursor);
        assert_eq!(s.current(), boards[cursor]);
    }

    #[proptest]
    fn step_forward_moves_cursor_until_the_last_board(
        #[strategy(vec(any::<Board>(), 1..8))] boards: Vec<Board>,
    ) {
        let n = boards.len();
        let mut s = sequence(boards, 0);

        for i in 1..n {
            assert!(s.step_forward());
            assert_eq!(s.cursor(), i);
        }

        assert!(!s.step_forward());
        assert_eq!(s.cursor(), n - 1);
    }

    #[proptest]
    fn step_back_moves_cursor_until_the_first_board(
        #[strategy(vec(any::<Board>(), 1..8))] boards: Vec<Board>,
    ) {
        let n = boards.len();
        let mut s = sequence(boards, n - 1);

        for i in (0..n - 1).rev() {
            assert!(s.step_back());
            assert_eq!(s.cursor(), i);
        }

        assert!(!s.step_back());
        assert_eq!(s.cursor(), 0);
    }

    #[proptest]
    fn stepping_agrees_with_boundary_checks(
        #[strategy(vec(any::<Board>(), 0..8))] boards: Vec<Board>,
        forward: bool,
    ) {
        let mut s = sequence(boards, 0);

        if forward {
            let expected = s.has_next();
            assert_eq!(s.step_forward(), expected);
        } else {
            let expected = s.has_previous();
            assert_eq!(s.step_back(), expected);
        }
    }

    #[proptest]
    fn replace_all_installs_decoded_boards_and_resets_cursor(
        #[strategy(vec(any::<Board>(), 1..8))] old: Vec<Board>,
        #[strategy(0..#old.len())] cursor: usize,
        #[strategy(vec(any::<Board>(), 0..8))] new: Vec<Board>,
    ) {
        let mut s = sequence(old, cursor);
        let lines: Vec<_> = new.iter().map(Board::to_string).collect();

        assert_eq!(s.replace_all(&lines), Ok(()));
        assert_eq!(s.boards(), &new[..]);
        assert_eq!(s.cursor(), 0);
    }

    #[proptest]
    fn replace_all_is_all_or_nothing(
        #[strategy(vec(any::<Board>(), 1..8))] old: Vec<Board>,
        #[strategy(0..#old.len())] cursor: usize,
        #[strategy(vec(any::<Board>(), 1..8))] new: Vec<Board>,
        #[strategy(0..#new.len())] bad: usize,
    ) {
        let mut s = sequence(old.clone(), cursor);
        let mut lines: Vec<_> = new.iter().map(Board::to_string).collect();
        lines[bad] = "8/8/8".into();

        assert_eq!(s.replace_all(&lines), Err(FormatError::IncompleteBoard));
        assert_eq!(s, sequence(old, cursor));
    }

    #[proptest]
    fn clear_empties_the_sequence(
        #[strategy(vec(any::<Board>(), 0..8))] boards: Vec<Board>,
    ) {
        let n = boards.len();
        let mut s = sequence(boards, n.saturating_sub(1));
        s.clear();
        assert_eq!(s, Sequence::new());
    }

    #[test]
    fn open_clears_sequence_if_cancelled() {
        let mut s = Sequence::new();
        s.replace_all(["8/8/8/8/8/8/8/8", "k7/8/8/8/8/8/8/7K"]).unwrap();
        s.step_forward();

        let mut loader = MockLoad::new();
        loader.expect_read_lines().never();

        assert!(s.open(&loader, Selection::Cancelled).is_ok());
        assert_eq!(s, Sequence::new());
    }

    #[test]
    fn open_replaces_sequence_with_file_contents() {
        let mut s = Sequence::new();

        let mut loader = MockLoad::new();
        loader
            .expect_read_lines()
            .once()
            .withf(|p| p.ends_with("games.txt"))
            .returning(|_| Ok(vec!["8/8/8/8/8/8/8/8".into(), "k7/8/8/8/8/8/8/7K".into()]));

        assert!(s.open(&loader, PathBuf::from("games.txt").into()).is_ok());
        assert_eq!(s.len(), 2);
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.current(), Board::empty());
    }

    #[test]
    fn open_keeps_sequence_if_file_cannot_be_read() {
        let mut s = Sequence::new();
        s.replace_all(["k7/8/8/8/8/8/8/7K"]).unwrap();
        let before = s.clone();

        let mut loader = MockLoad::new();
        loader
            .expect_read_lines()
            .once()
            .returning(|_| Err(io::ErrorKind::NotFound.into()));

        let selection = Selection::Path("missing.txt".into());
        assert!(matches!(s.open(&loader, selection), Err(LoadError::Io(_))));
        assert_eq!(s, before);
    }

    #[test]
    fn open_keeps_sequence_if_file_is_malformed() {
        let mut s = Sequence::new();
        s.replace_all(["k7/8/8/8/8/8/8/7K"]).unwrap();
        let before = s.clone();

        let mut loader = MockLoad::new();
        loader
            .expect_read_lines()
            .once()
            .returning(|_| Ok(vec!["8/8/8/8/8/8/8/8".into(), "8/8/8/8/8/8/8/xxxxxxxx".into()]));

        let selection = Selection::Path("bad.txt".into());
        assert!(matches!(
            s.open(&loader, selection),
            Err(LoadError::Format(FormatError::InvalidPiece('x')))
        ));
        assert_eq!(s, before);
    }
}
