use crate::conversion::{ConversionError, from_rgb};
use crate::domain::color::ColorError;
use crate::domain::{Chromaticity, ColorGamut};
use lazy_static::lazy_static;
use rand::Rng;
use std::collections::HashMap;
use std::str::FromStr;

/// An 8-bit sRGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

lazy_static! {
    static ref PRESETS: HashMap<&'static str, RgbColor> = HashMap::from([
        ("red", RgbColor::RED),
        ("green", RgbColor::GREEN),
        ("blue", RgbColor::BLUE),
        ("white", RgbColor::WHITE),
        ("yellow", RgbColor::YELLOW),
        ("purple", RgbColor::PURPLE),
        ("orange", RgbColor::ORANGE),
        ("pink", RgbColor::PINK),
        ("brown", RgbColor::BROWN),
        ("cyan", RgbColor::CYAN),
        ("lavender", RgbColor::LAVENDER),
        ("gold", RgbColor::GOLD),
        ("silver", RgbColor::SILVER),
        ("maroon", RgbColor::MAROON),
        ("teal", RgbColor::TEAL),
        ("olive", RgbColor::OLIVE),
    ]);
}

impl RgbColor {
    pub const RED: RgbColor = RgbColor::new(255, 0, 0);
    pub const GREEN: RgbColor = RgbColor::new(0, 255, 0);
    pub const BLUE: RgbColor = RgbColor::new(0, 0, 255);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    pub const YELLOW: RgbColor = RgbColor::new(255, 255, 0);
    pub const PURPLE: RgbColor = RgbColor::new(128, 0, 128);
    pub const ORANGE: RgbColor = RgbColor::new(255, 165, 0);
    pub const PINK: RgbColor = RgbColor::new(255, 192, 203);
    pub const BROWN: RgbColor = RgbColor::new(165, 42, 42);
    pub const CYAN: RgbColor = RgbColor::new(0, 255, 255);
    pub const LAVENDER: RgbColor = RgbColor::new(230, 230, 250);
    pub const GOLD: RgbColor = RgbColor::new(255, 215, 0);
    pub const SILVER: RgbColor = RgbColor::new(192, 192, 192);
    pub const MAROON: RgbColor = RgbColor::new(128, 0, 0);
    pub const TEAL: RgbColor = RgbColor::new(0, 128, 128);
    pub const OLIVE: RgbColor = RgbColor::new(128, 128, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Looks up a named preset, ignoring case.
    pub fn preset(name: &str) -> Option<RgbColor> {
        PRESETS.get(name.to_lowercase().as_str()).copied()
    }

    pub fn presets() -> &'static HashMap<&'static str, RgbColor> {
        &PRESETS
    }

    /// Draws each channel uniformly from the given random source.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        RgbColor::new(rng.random(), rng.random(), rng.random())
    }

    /// Parses `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexFormat(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHexFormat(hex.to_string()));

        Ok(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_chromaticity(&self, gamut: &ColorGamut) -> Result<Chromaticity, ConversionError> {
        from_rgb(*self, gamut)
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RgbColor::from_hex(s).or_else(|_| RgbColor::preset(s).ok_or_else(|| ColorError::UnknownPreset(s.to_string())))
    }
}
