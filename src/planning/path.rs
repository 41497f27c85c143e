//! Path representation: an ordered polyline of directed segments.

use crate::core::types::Point2D;
use serde::{Deserialize, Serialize};

/// A directed straight-line piece of the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: Point2D,
    pub end: Point2D,
}

impl PathSegment {
    /// Create a segment from its endpoints.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Segment length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }
}

/// Polyline from the agent toward the goal.
///
/// Rebuilt from scratch every tick by the planner, so segments are always
/// contiguous: each segment starts where the previous one ends.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub(crate) segments: Vec<PathSegment>,
}

impl Path {
    /// Single straight segment from `start` to `goal`.
    pub fn straight(start: Point2D, goal: Point2D) -> Self {
        Self {
            segments: vec![PathSegment::new(start, goal)],
        }
    }

    /// The segments in travel order.
    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start point (the agent's position at rebuild time).
    pub fn start(&self) -> Option<Point2D> {
        self.segments.first().map(|s| s.start)
    }

    /// Final endpoint (the goal).
    pub fn goal(&self) -> Option<Point2D> {
        self.segments.last().map(|s| s.end)
    }

    /// Total polyline length.
    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(|s| s.length()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_path() {
        let path = Path::straight(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
        assert_eq!(path.len(), 1);
        assert_eq!(path.start(), Some(Point2D::new(0.0, 0.0)));
        assert_eq!(path.goal(), Some(Point2D::new(3.0, 4.0)));
        assert_relative_eq!(path.total_length(), 5.0);
    }

    #[test]
    fn test_segment_length() {
        let seg = PathSegment::new(Point2D::new(1.0, 1.0), Point2D::new(1.0, 7.0));
        assert_relative_eq!(seg.length(), 6.0);
    }

    #[test]
    fn test_empty_path() {
        let path = Path::default();
        assert!(path.is_empty());
        assert_eq!(path.start(), None);
        assert_eq!(path.goal(), None);
    }
}
