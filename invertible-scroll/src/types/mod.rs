mod enums;
mod inversion;
mod style;

pub use enums::{Direction, Overflow, Size};
pub use inversion::Inversion;
pub use style::{resolve_styles, Style, Transform};
