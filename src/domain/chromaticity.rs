use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A point in the CIE 1931 xy chromaticity diagram.
///
/// Physically meaningful points have both coordinates in `[0, 1]` and `x + y <= 1`, but this is not
/// enforced here. The conversion routines check the preconditions they depend on.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Chromaticity {
    x: f64,
    y: f64,
}

impl Chromaticity {
    pub const fn new(x: f64, y: f64) -> Self {
        Chromaticity { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Sub for Chromaticity {
    type Output = Chromaticity;

    fn sub(self, rhs: Self) -> Self::Output {
        Chromaticity::new(self.x - rhs.x, self.y - rhs.y)
    }
}
