use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error("gamut vertices are collinear or coincide")]
    DegenerateGamut,
    #[error("chromaticity ({x}, {y}) has no luminance component, y must not be 0")]
    DegenerateColor { x: f64, y: f64 },
}
