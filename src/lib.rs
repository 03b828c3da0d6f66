//! Color handling for Hue lights: converting 8-bit RGB colors to the CIE xy chromaticities a light
//! understands and back, constrained to the light's gamut, and building the light-state bodies that
//! carry them.

pub mod conversion;
pub mod domain;
pub mod hue;
