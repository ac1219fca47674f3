use crate::chess::{Color, Piece, Role};
use crate::render::Glyphs;
use std::{ops::Index, sync::OnceLock};

/// How a [`Piece`] is drawn.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Sprite {
    piece: Piece,
    figure: char,
    asset: String,
}

impl Sprite {
    fn new(piece: Piece) -> Self {
        use Color::*;
        use Role::*;

        let figure = match (piece.role(), piece.color()) {
            (Pawn, White) => '♙',
            (Knight, White) => '♘',
            (Bishop, White) => '♗',
            (Rook, White) => '♖',
            (Queen, White) => '♕',
            (King, White) => '♔',
            (Pawn, Black) => '♟',
            (Knight, Black) => '♞',
            (Bishop, Black) => '♝',
            (Rook, Black) => '♜',
            (Queen, Black) => '♛',
            (King, Black) => '♚',
        };

        let asset = format!("pieces/{}/{}.png", piece.color(), piece.role().name());

        Sprite {
            piece,
            figure,
            asset,
        }
    }

    /// The [`Piece`] this sprite draws.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The character that stands for this piece in a text diagram.
    #[inline(always)]
    pub fn glyph(&self, glyphs: Glyphs) -> char {
        match glyphs {
            Glyphs::Unicode => self.figure,
            Glyphs::Letters => self.piece.letter(),
        }
    }

    /// The path of the image of this piece, relative to the asset directory.
    #[inline(always)]
    pub fn asset(&self) -> &str {
        &self.asset
    }
}

/// The [`Sprite`] of every [`Piece`].
#[derive(Debug)]
pub struct Sprites(Vec<Sprite>);

impl Sprites {
    /// The table of sprites, built the first time it's needed.
    pub fn get() -> &'static Sprites {
        static SPRITES: OnceLock<Sprites> = OnceLock::new();
        SPRITES.get_or_init(|| Sprites(Piece::iter().map(Sprite::new).collect()))
    }

    /// An iterator over all sprites.
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.0.iter()
    }
}

impl Index<Piece> for Sprites {
    type Output = Sprite;

    #[inline(always)]
    fn index(&self, p: Piece) -> &Self::Output {
        &self.0[p as usize]
    }
}
