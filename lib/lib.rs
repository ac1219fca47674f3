/// Chess domain types and the placement notation.
pub mod chess;
/// Reading sequences of placements from files.
pub mod load;
/// Drawing boards as text.
pub mod render;
/// Navigation over a sequence of boards.
pub mod sequence;
