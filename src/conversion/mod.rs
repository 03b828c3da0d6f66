//! Conversion between 8-bit sRGB and the CIE xy chromaticities a light understands, constrained to
//! the light's gamut.
//!
//! Every function here is pure: identical inputs always give bit-identical outputs.

mod colorimetry;
mod conversion_error;
mod gamut_clamp;
mod geometry;

pub use colorimetry::{from_rgb, to_rgb, to_xyy};
pub use conversion_error::ConversionError;
pub use gamut_clamp::clamp_to_gamut;
pub use geometry::{closest_point_on_segment, cross_product, distance, gamut_area, point_in_triangle};
