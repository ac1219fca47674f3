use derive_more::Display;

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Casts from the index of a variant.
    #[inline(always)]
    pub(crate) const fn from_index(i: usize) -> Self {
        Self::ALL[i]
    }
}
