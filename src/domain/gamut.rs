use crate::domain::Chromaticity;
use serde::Deserialize;

/// The triangle of chromaticities a light can reproduce, spanned by its three primaries.
///
/// The vertices must not be collinear. This is checked by the conversion routines, which fail with
/// [`ConversionError::DegenerateGamut`](crate::conversion::ConversionError::DegenerateGamut).
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
pub struct ColorGamut {
    red: Chromaticity,
    green: Chromaticity,
    blue: Chromaticity,
}

impl ColorGamut {
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Self {
        ColorGamut { red, green, blue }
    }

    pub fn red(&self) -> &Chromaticity {
        &self.red
    }

    pub fn green(&self) -> &Chromaticity {
        &self.green
    }

    pub fn blue(&self) -> &Chromaticity {
        &self.blue
    }
}

// API: https://developers.meethue.com/develop/application-design-guidance/color-conversion-formulas-rgb-to-xy-and-back/
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
pub enum GamutType {
    A,
    B,
    C,
}

const GAMUT_A: ColorGamut = ColorGamut::new(Chromaticity::new(0.704, 0.296), Chromaticity::new(0.2151, 0.7106), Chromaticity::new(0.138, 0.08));
const GAMUT_B: ColorGamut = ColorGamut::new(Chromaticity::new(0.675, 0.322), Chromaticity::new(0.4091, 0.518), Chromaticity::new(0.167, 0.04));
const GAMUT_C: ColorGamut = ColorGamut::new(Chromaticity::new(0.692, 0.308), Chromaticity::new(0.17, 0.7), Chromaticity::new(0.153, 0.048));

impl GamutType {
    pub fn gamut(self) -> ColorGamut {
        match self {
            GamutType::A => GAMUT_A,
            GamutType::B => GAMUT_B,
            GamutType::C => GAMUT_C,
        }
    }
}

impl From<GamutType> for ColorGamut {
    fn from(gamut_type: GamutType) -> Self {
        gamut_type.gamut()
    }
}
