use crate::domain::{Chromaticity, Color, RgbColor};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawColor {
            Text(String),
            Rgb {
                r: u8,
                g: u8,
                b: u8,
            },
            XyY {
                x: f64,
                y: f64,
                brightness: f64,
            },
            #[allow(non_snake_case)]
            XyYAlt {
                x: f64,
                y: f64,
                Y: f64,
            },
        }

        match RawColor::deserialize(deserializer)? {
            RawColor::Text(s) => match RgbColor::from_hex(&s) {
                Ok(rgb) => Ok(Color::Hex(rgb.to_hex())),
                Err(_) => RgbColor::preset(&s)
                    .map(Color::Rgb)
                    .ok_or_else(|| Error::invalid_value(Unexpected::Str(&s), &"a 6-digit hex color or a preset name")),
            },
            RawColor::Rgb { r, g, b } => Ok(Color::Rgb(RgbColor::new(r, g, b))),
            RawColor::XyY { x, y, brightness } => Ok(Color::Xy {
                xy: Chromaticity::new(x, y),
                brightness,
            }),
            RawColor::XyYAlt { x, y, Y } => Ok(Color::Xy {
                xy: Chromaticity::new(x, y),
                brightness: Y,
            }),
        }
    }
}
