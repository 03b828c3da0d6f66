use crate::conversion::{ConversionError, clamp_to_gamut, to_rgb};
use crate::domain::{Chromaticity, ColorGamut, RgbColor};
use thiserror::Error;

/// A color as a user expresses it, before it is bound to a specific light's gamut.
#[derive(PartialEq, Clone, Debug)]
pub enum Color {
    Rgb(RgbColor),
    Hex(String),
    Xy { xy: Chromaticity, brightness: f64 },
}

impl Color {
    pub fn to_rgb(&self, gamut: &ColorGamut) -> Result<RgbColor, ColorError> {
        match self {
            Color::Rgb(rgb) => Ok(*rgb),
            Color::Hex(value) => RgbColor::from_hex(value),
            Color::Xy { xy, brightness } => Ok(to_rgb(*xy, gamut, *brightness)?),
        }
    }

    pub fn to_hex(&self, gamut: &ColorGamut) -> Result<String, ColorError> {
        match self {
            Color::Hex(value) => Ok(RgbColor::from_hex(value)?.to_hex()),
            _ => Ok(self.to_rgb(gamut)?.to_hex()),
        }
    }

    /// The chromaticity to send to a light with the given gamut, always inside that gamut.
    pub fn to_chromaticity(&self, gamut: &ColorGamut) -> Result<Chromaticity, ColorError> {
        match self {
            Color::Rgb(rgb) => Ok(rgb.to_chromaticity(gamut)?),
            Color::Hex(value) => Ok(RgbColor::from_hex(value)?.to_chromaticity(gamut)?),
            Color::Xy { xy, .. } => Ok(clamp_to_gamut(*xy, gamut)?),
        }
    }
}

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Self {
        Color::Rgb(rgb)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("invalid hexadecimal value '{0}'")]
    InvalidHexFormat(String),
    #[error("unknown color preset '{0}'")]
    UnknownPreset(String),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
