use crate::conversion::ConversionError;
use crate::conversion::gamut_clamp::clamp_to_gamut;
use crate::conversion::geometry::gamut_area;
use crate::domain::{Chromaticity, ColorGamut, RgbColor};

// Wide gamut RGB (D65) to CIE XYZ, as used by the bridge
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.664511, 0.154324, 0.162028],
    [0.283881, 0.668433, 0.047685],
    [0.000088, 0.072310, 0.986039],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [1.656492, -0.354851, -0.255038],
    [-0.707196, 1.655397, 0.036152],
    [0.051713, -0.121364, 1.011530],
];

/// Converts an sRGB color to the chromaticity closest to it within `gamut`.
///
/// Black has no chromaticity and maps to `(0, 0)`. The gamut is validated regardless.
pub fn from_rgb(rgb: RgbColor, gamut: &ColorGamut) -> Result<Chromaticity, ConversionError> {
    to_xyy(rgb, gamut).map(|(xy, _)| xy)
}

/// Like [`from_rgb`], but also returns the linear luminance `Y` of the color.
///
/// Passing that luminance back as the brightness of [`to_rgb`] reconstructs colors that are not at
/// full brightness.
#[allow(non_snake_case)]
pub fn to_xyy(rgb: RgbColor, gamut: &ColorGamut) -> Result<(Chromaticity, f64), ConversionError> {
    let linear = [linearize(rgb.r()), linearize(rgb.g()), linearize(rgb.b())];
    let [X, Y, Z] = multiply(RGB_TO_XYZ, linear);

    let sum = X + Y + Z;
    if sum == 0.0 {
        // Black never needs clamping, but a degenerate gamut is still an error
        gamut_area(gamut)?;
        return Ok((Chromaticity::new(0.0, 0.0), 0.0));
    }

    let xy = clamp_to_gamut(Chromaticity::new(X / sum, Y / sum), gamut)?;
    Ok((xy, Y))
}

/// Converts a chromaticity and linear brightness back to sRGB.
///
/// The chromaticity is clamped into `gamut` first. Components that fall outside the displayable range
/// are floored at zero and, if any exceeds one, all are scaled down by the largest, so the hue is kept
/// at the cost of brightness. Channels are truncated, not rounded, to 8 bits.
#[allow(non_snake_case)]
pub fn to_rgb(xy: Chromaticity, gamut: &ColorGamut, brightness: f64) -> Result<RgbColor, ConversionError> {
    let xy = clamp_to_gamut(xy, gamut)?;
    if xy.y() == 0.0 {
        return Err(ConversionError::DegenerateColor { x: xy.x(), y: xy.y() });
    }

    let Y = brightness;
    let X = Y / xy.y() * xy.x();
    let Z = Y / xy.y() * (1.0 - xy.x() - xy.y());

    let [r, g, b] = multiply(XYZ_TO_RGB, [X, Y, Z]).map(|channel| gamma_encode(channel).max(0.0));

    let max_component = r.max(g).max(b);
    let [r, g, b] = if max_component > 1.0 {
        [r / max_component, g / max_component, b / max_component]
    } else {
        [r, g, b]
    };

    Ok(RgbColor::new(to_byte(r), to_byte(g), to_byte(b)))
}

fn multiply(matrix: [[f64; 3]; 3], vector: [f64; 3]) -> [f64; 3] {
    matrix.map(|row| row[0] * vector[0] + row[1] * vector[1] + row[2] * vector[2])
}

/// Inverse sRGB companding of an 8-bit channel.
fn linearize(channel: u8) -> f64 {
    let channel = channel as f64 / 255.0;
    if channel > 0.04045 { ((channel + 0.055) / 1.055).powf(2.4) } else { channel / 12.92 }
}

fn gamma_encode(channel: f64) -> f64 {
    if channel <= 0.0031308 {
        channel * 12.92
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

// Truncates rather than rounds
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0) as u8
}
