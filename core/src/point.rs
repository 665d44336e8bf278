use serde::{Deserialize, Serialize};

/// A single click location.
///
/// Coordinates arrive already normalized by the client into whatever
/// coordinate space the deployment enrolled with (see
/// [`crate::params::CoordinateSpace`]); this type does not convert between
/// spaces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Scan for a pair of points whose x-values are closer than `epsilon`.
///
/// Unique polynomial interpolation needs pairwise-distinct x-values; this is
/// the precondition check the enrollment path runs before touching the
/// solver. Returns the offending index pair, earliest first.
pub fn find_duplicate_x(
    points: &[Point],
    epsilon: f64,
) -> Option<(usize, usize)> {
    for first in 0..points.len() {
        for second in first + 1..points.len() {
            if (points[first].x - points[second].x).abs() <= epsilon {
                return Some((first, second));
            }
        }
    }
    None
}
