use crate::conversion::ConversionError;
use crate::domain::{Chromaticity, ColorGamut};

/// The z component of the 2D cross product, twice the signed area of the triangle (0, p1, p2).
pub fn cross_product(p1: &Chromaticity, p2: &Chromaticity) -> f64 {
    p1.x() * p2.y() - p1.y() * p2.x()
}

pub fn distance(p1: &Chromaticity, p2: &Chromaticity) -> f64 {
    (p1.x() - p2.x()).hypot(p1.y() - p2.y())
}

/// Twice the signed area of the gamut triangle, failing when the triangle has no area.
pub fn gamut_area(gamut: &ColorGamut) -> Result<f64, ConversionError> {
    let area = cross_product(&(*gamut.green() - *gamut.red()), &(*gamut.blue() - *gamut.red()));
    if area == 0.0 || !area.is_finite() {
        return Err(ConversionError::DegenerateGamut);
    }
    Ok(area)
}

/// Check if a point lies within the gamut triangle or on one of its edges.
pub fn point_in_triangle(point: &Chromaticity, gamut: &ColorGamut) -> Result<bool, ConversionError> {
    let denominator = gamut_area(gamut)?;
    let v1 = *gamut.green() - *gamut.red();
    let v2 = *gamut.blue() - *gamut.red();

    // Express the point in the basis spanned by the two edges leaving the red vertex
    let q = *point - *gamut.red();
    let s = cross_product(&q, &v2) / denominator;
    let t = cross_product(&v1, &q) / denominator;

    Ok(s >= 0.0 && t >= 0.0 && s + t <= 1.0)
}

/// Find the point on the segment `a`-`b` closest to `point`.
pub fn closest_point_on_segment(point: &Chromaticity, a: &Chromaticity, b: &Chromaticity) -> Chromaticity {
    let ap = *point - *a;
    let ab = *b - *a;

    let ab2 = ab.x() * ab.x() + ab.y() * ab.y();
    if ab2 == 0.0 {
        return *a;
    }

    let t = ((ap.x() * ab.x() + ap.y() * ab.y()) / ab2).clamp(0.0, 1.0);
    Chromaticity::new(a.x() + ab.x() * t, a.y() + ab.y() * t)
}
