mod color;
mod style;
mod theme;

pub use color::{Color, ColorOp, Rgb};
pub use style::{Border, Direction, Edges, Size, Style, TextStyle};
pub use theme::{ColorContext, DefaultTheme, Theme};
