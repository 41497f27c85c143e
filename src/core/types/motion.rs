//! Motion estimate consumed by the prediction step.

use serde::{Deserialize, Serialize};

/// Accumulated displacement since the last prediction step.
///
/// Owned transiently by the driver: built up from odometry or input handling
/// during a tick, handed to [`crate::ParticleFilter::predict`], then reset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionEstimate {
    /// Linear displacement along the current heading, in map units.
    /// Negative values drive backward.
    pub linear: f32,
    /// Angular displacement in radians (positive = CCW).
    pub angular: f32,
}

impl MotionEstimate {
    /// Create a motion estimate from its components.
    #[inline]
    pub fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// No motion this tick.
    #[inline]
    pub fn stationary() -> Self {
        Self::default()
    }

    /// Straight drive at the given displacement.
    #[inline]
    pub fn forward(linear: f32) -> Self {
        Self {
            linear,
            angular: 0.0,
        }
    }

    /// Turn in place by the given angle.
    #[inline]
    pub fn turn(angular: f32) -> Self {
        Self {
            linear: 0.0,
            angular,
        }
    }
}
