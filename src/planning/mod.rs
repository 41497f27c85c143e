//! Obstacle-avoiding path refinement.

mod path;
mod planner;

pub use path::{Path, PathSegment};
pub use planner::{segment_intersection, PathPlanner, SplitHint, SPLIT_EPS};
