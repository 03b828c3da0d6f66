mod chromaticity;
pub mod color;
mod color_deserializer;
mod gamut;
mod mired;
mod rgb_color;

pub use chromaticity::Chromaticity;
pub use color::{Color, ColorError};
pub use gamut::{ColorGamut, GamutType};
pub use mired::{MiredColor, MiredRange};
pub use rgb_color::RgbColor;
