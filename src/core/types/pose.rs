//! Pose and point types for 2D localization.

use serde::{Deserialize, Serialize};

/// A 2D point in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in map units
    pub x: f32,
    /// Y coordinate in map units
    pub y: f32,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, other: &Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Agent pose in 2D space.
///
/// Position (x, y) in map units and heading (theta) in radians.
/// Theta is kept in [0, 2π) by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in map units
    pub x: f32,
    /// Y position in map units
    pub y: f32,
    /// Heading in radians, wrapped to [0, 2π)
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose with theta wrapped to [0, 2π).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: crate::core::math::wrap_angle(theta),
        }
    }

    /// Pose at the origin with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Position component of the pose.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Euclidean distance between this pose's position and another's.
    #[inline]
    pub fn position_error(&self, other: &Pose2D) -> f32 {
        self.position().distance(&other.position())
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}
