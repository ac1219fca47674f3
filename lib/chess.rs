mod board;
mod color;
mod notation;
mod piece;
mod role;

pub use board::*;
pub use color::*;
pub use notation::*;
pub use piece::*;
pub use role::*;
