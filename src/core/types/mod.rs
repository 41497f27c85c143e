//! Core data types shared across the crate.

mod motion;
mod pose;
mod reading;

pub use motion::MotionEstimate;
pub use pose::{Point2D, Pose2D};
pub use reading::RangeReading;
