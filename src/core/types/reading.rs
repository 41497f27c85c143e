//! Three-ray range reading.

use serde::{Deserialize, Serialize};

/// Measured distances of the three-ray sensor fan.
///
/// `center` is cast along the pose heading, `right` at heading + offset,
/// `left` at heading - offset. Distances saturate at
/// [`crate::map::NO_HIT_RANGE`] when no wall is hit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeReading {
    /// Distance along the heading.
    pub center: f32,
    /// Distance at heading - beam offset.
    pub left: f32,
    /// Distance at heading + beam offset.
    pub right: f32,
}

impl RangeReading {
    /// Create a reading from its three distances.
    #[inline]
    pub fn new(center: f32, left: f32, right: f32) -> Self {
        Self {
            center,
            left,
            right,
        }
    }
}
