use crate::conversion::ConversionError;
use crate::conversion::geometry::{closest_point_on_segment, distance, point_in_triangle};
use crate::domain::{Chromaticity, ColorGamut};

/// Clamp the xy coordinate to the given gamut.
///
/// Points inside the gamut or on its boundary are returned unchanged. Any other point is replaced by
/// the nearest point on the gamut's boundary. When two edges are equally close, the first in the
/// order red-green, blue-red, green-blue wins.
pub fn clamp_to_gamut(point: Chromaticity, gamut: &ColorGamut) -> Result<Chromaticity, ConversionError> {
    if point_in_triangle(&point, gamut)? {
        return Ok(point);
    }

    // Find the closest point on each edge of the gamut triangle
    let point_red_green = closest_point_on_segment(&point, gamut.red(), gamut.green());
    let point_blue_red = closest_point_on_segment(&point, gamut.blue(), gamut.red());
    let point_green_blue = closest_point_on_segment(&point, gamut.green(), gamut.blue());

    let distance_red_green = distance(&point, &point_red_green);
    let distance_blue_red = distance(&point, &point_blue_red);
    let distance_green_blue = distance(&point, &point_green_blue);

    if distance_red_green <= distance_blue_red && distance_red_green <= distance_green_blue {
        Ok(point_red_green)
    } else if distance_blue_red <= distance_green_blue {
        Ok(point_blue_red)
    } else {
        Ok(point_green_blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GamutType;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn triangle() -> ColorGamut {
        ColorGamut::new(Chromaticity::new(0.5, 0.25), Chromaticity::new(0.25, 0.75), Chromaticity::new(0.125, 0.125))
    }

    fn outside_points() -> Vec<Chromaticity> {
        vec![
            Chromaticity::new(0.8, 0.3),
            Chromaticity::new(0.1, 0.9),
            Chromaticity::new(0.0, 0.0),
            Chromaticity::new(0.5, 0.6),
            Chromaticity::new(0.3, 0.01),
            Chromaticity::new(0.9, 0.05),
            Chromaticity::new(0.7, 0.2),
            Chromaticity::new(0.05, 0.3),
            Chromaticity::new(0.6, 0.4),
            Chromaticity::new(0.2, 0.75),
        ]
    }

    fn distance_to_boundary(point: &Chromaticity, gamut: &ColorGamut) -> f64 {
        [
            closest_point_on_segment(point, gamut.red(), gamut.green()),
            closest_point_on_segment(point, gamut.blue(), gamut.red()),
            closest_point_on_segment(point, gamut.green(), gamut.blue()),
        ]
        .iter()
        .map(|candidate| distance(point, candidate))
        .fold(f64::INFINITY, f64::min)
    }

    #[rstest]
    #[case::interior(Chromaticity::new(0.3, 0.4))]
    #[case::vertex(Chromaticity::new(0.25, 0.75))]
    #[case::red_green_edge(Chromaticity::new(0.375, 0.5))]
    fn keeps_points_inside_or_on_the_boundary(#[case] point: Chromaticity) {
        assert_eq!(clamp_to_gamut(point, &triangle()).unwrap(), point);
    }

    #[rstest]
    #[case::nearest_red_green_edge(Chromaticity::new(0.5, 0.75), Chromaticity::new(0.3, 0.65))]
    #[case::nearest_blue_red_edge(Chromaticity::new(0.25, 0.0), Chromaticity::new(0.2, 0.15))]
    #[case::beyond_red_vertex(Chromaticity::new(1.0, 0.25), Chromaticity::new(0.5, 0.25))]
    #[case::beyond_green_vertex(Chromaticity::new(0.0, 1.0), Chromaticity::new(0.25, 0.75))]
    #[case::beyond_blue_vertex(Chromaticity::new(0.0, 0.0), Chromaticity::new(0.125, 0.125))]
    fn moves_outside_points_to_nearest_edge(#[case] point: Chromaticity, #[case] expected: Chromaticity) {
        let clamped = clamp_to_gamut(point, &triangle()).unwrap();

        assert_abs_diff_eq!(clamped.x(), expected.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(clamped.y(), expected.y(), epsilon = 1e-12);
    }

    #[rstest]
    fn is_idempotent(#[values(GamutType::A, GamutType::B, GamutType::C)] gamut_type: GamutType) {
        let gamut = gamut_type.gamut();

        for point in outside_points() {
            let once = clamp_to_gamut(point, &gamut).unwrap();
            let twice = clamp_to_gamut(once, &gamut).unwrap();

            assert_abs_diff_eq!(once.x(), twice.x(), epsilon = 1e-12);
            assert_abs_diff_eq!(once.y(), twice.y(), epsilon = 1e-12);
        }
    }

    #[rstest]
    fn lands_on_the_boundary_at_the_nearest_point(#[values(GamutType::A, GamutType::B, GamutType::C)] gamut_type: GamutType) {
        let gamut = gamut_type.gamut();
        let edges = [
            (gamut.red(), gamut.green()),
            (gamut.blue(), gamut.red()),
            (gamut.green(), gamut.blue()),
        ];

        for point in outside_points() {
            let clamped = clamp_to_gamut(point, &gamut).unwrap();
            let clamped_distance = distance(&point, &clamped);

            assert!(distance_to_boundary(&clamped, &gamut) < 1e-12, "{:?} is not on the boundary", clamped);

            // Sample every edge densely, no boundary point may be strictly closer
            for (a, b) in edges {
                for step in 0..=1000 {
                    let t = step as f64 / 1000.0;
                    let sample = Chromaticity::new(a.x() + (b.x() - a.x()) * t, a.y() + (b.y() - a.y()) * t);
                    assert!(distance(&point, &sample) >= clamped_distance - 1e-12);
                }
            }
        }
    }

    #[test]
    fn prefers_red_green_edge_on_ties() {
        // Beyond the red vertex both edges meeting there project onto it
        let clamped = clamp_to_gamut(Chromaticity::new(1.0, 0.25), &triangle()).unwrap();

        assert_eq!(clamped, *triangle().red());
    }

    #[test]
    fn fails_for_degenerate_gamut() {
        let point = Chromaticity::new(0.3, 0.3);

        assert_eq!(clamp_to_gamut(point, &ColorGamut::new(point, point, point)), Err(ConversionError::DegenerateGamut));
    }
}
