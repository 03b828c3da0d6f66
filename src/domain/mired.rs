use serde::{Deserialize, Serialize};

/// A color temperature in mirek, see https://en.wikipedia.org/wiki/Mired.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MiredColor {
    mirek: u32,
}

impl MiredColor {
    pub const fn new(mirek: u32) -> Self {
        MiredColor { mirek }
    }

    /// Returns `None` for 0 K, which has no mirek equivalent.
    pub fn from_kelvin(kelvin: u32) -> Option<Self> {
        reciprocal_mega(kelvin).map(MiredColor::new)
    }

    pub fn mirek(&self) -> u32 {
        self.mirek
    }

    pub fn kelvin(&self) -> Option<u32> {
        reciprocal_mega(self.mirek)
    }
}

fn reciprocal_mega(value: u32) -> Option<u32> {
    1_000_000u32.checked_div(value)
}

/// The mirek range a light supports, inclusive on both ends.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
pub struct MiredRange {
    #[serde(rename = "mirek_minimum")]
    minimum: MiredColor,
    #[serde(rename = "mirek_maximum")]
    maximum: MiredColor,
}

impl MiredRange {
    pub fn new(minimum: MiredColor, maximum: MiredColor) -> Self {
        MiredRange { minimum, maximum }
    }

    pub fn minimum(&self) -> MiredColor {
        self.minimum
    }

    pub fn maximum(&self) -> MiredColor {
        self.maximum
    }

    pub fn contains(&self, color: MiredColor) -> bool {
        self.minimum <= color && color <= self.maximum
    }

    pub fn clamp(&self, color: MiredColor) -> MiredColor {
        color.max(self.minimum).min(self.maximum)
    }
}

impl Default for MiredRange {
    // Bridge-wide range, roughly 6500 K down to 2000 K
    fn default() -> Self {
        MiredRange::new(MiredColor::new(153), MiredColor::new(500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(153, Some(6535))]
    #[case(500, Some(2000))]
    #[case(0, None)]
    fn converts_mirek_to_kelvin(#[case] mirek: u32, #[case] expected: Option<u32>) {
        assert_eq!(MiredColor::new(mirek).kelvin(), expected);
    }

    #[rstest]
    #[case(6535, Some(MiredColor::new(153)))]
    #[case(2000, Some(MiredColor::new(500)))]
    #[case(0, None)]
    fn converts_kelvin_to_mirek(#[case] kelvin: u32, #[case] expected: Option<MiredColor>) {
        assert_eq!(MiredColor::from_kelvin(kelvin), expected);
    }

    #[rstest]
    #[case::below(100, 153)]
    #[case::inside(300, 300)]
    #[case::above(650, 500)]
    fn clamps_into_default_range(#[case] mirek: u32, #[case] expected: u32) {
        assert_eq!(MiredRange::default().clamp(MiredColor::new(mirek)), MiredColor::new(expected));
    }

    #[test]
    fn contains_is_inclusive() {
        let range = MiredRange::default();

        assert!(range.contains(MiredColor::new(153)));
        assert!(range.contains(MiredColor::new(500)));
        assert!(!range.contains(MiredColor::new(501)));
    }

    #[test]
    fn deserializes_mirek_schema() {
        let json = r#"{ "mirek_minimum": 153, "mirek_maximum": 454 }"#;

        let range = serde_json::from_str::<MiredRange>(json).unwrap();

        assert_eq!(range, MiredRange::new(MiredColor::new(153), MiredColor::new(454)));
    }
}
