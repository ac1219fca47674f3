mod diagram;
mod sprite;
mod style;

pub use diagram::*;
pub use sprite::*;
pub use style::*;
