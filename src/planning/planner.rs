//! Greedy obstacle-avoiding path refinement.
//!
//! The planner keeps a goal and, every tick, rebuilds a straight path from
//! the agent's position to that goal, then splits the first wall-crossing
//! segment at the intersected wall's start corner. One split per tick: as
//! the agent advances the route is progressively bent around obstacles.
//! This is deliberately greedy and not a shortest-path algorithm.

use super::path::{Path, PathSegment};
use crate::core::types::Point2D;
use crate::map::WorldMap;

/// Minimum parametric distance from a segment's endpoints for a wall contact
/// to count as blocking. A freshly split path runs exactly through a wall
/// corner, so the leading segment ends on that wall and its successor starts
/// on it; without this margin at both ends the same corner would be
/// re-reported forever (at the start exactly, at the end through f32
/// rounding of the intersection distance).
pub const SPLIT_EPS: f32 = 1e-3;

/// The wall contact a blocked segment should detour through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitHint {
    /// Corner to route through: the intersected wall's start endpoint.
    pub corner: Point2D,
    /// Index of the intersected wall.
    pub wall_idx: usize,
    /// Parametric distance from the segment start to the intersection.
    pub distance: f32,
}

/// Find the nearest wall crossing of a path segment.
///
/// Same determinant method as the ray caster, with the ray parameter bounded
/// to `(SPLIT_EPS, segment length - SPLIT_EPS)` instead of `[0, inf)`.
/// Zero-length segments cannot intersect anything.
pub fn segment_intersection(map: &WorldMap, segment: &PathSegment) -> Option<SplitHint> {
    let length = segment.length();
    if length <= 2.0 * SPLIT_EPS {
        return None;
    }
    let dx = (segment.end.x - segment.start.x) / length;
    let dy = (segment.end.y - segment.start.y) / length;

    let mut best: Option<SplitHint> = None;
    for (idx, wall) in map.walls().iter().enumerate() {
        let ex = wall.end.x - wall.start.x;
        let ey = wall.end.y - wall.start.y;

        let det = dx * ey - dy * ex;
        if det == 0.0 {
            continue;
        }

        let ox = wall.start.x - segment.start.x;
        let oy = wall.start.y - segment.start.y;
        let ray_len = (ox * ey - oy * ex) / det;
        let wall_len = (dy * ox - dx * oy) / det;

        if (0.0..=1.0).contains(&wall_len)
            && ray_len > SPLIT_EPS
            && ray_len < length - SPLIT_EPS
            && best.map_or(true, |b| ray_len < b.distance)
        {
            best = Some(SplitHint {
                corner: wall.start,
                wall_idx: idx,
                distance: ray_len,
            });
        }
    }
    best
}

/// Path planner owning the goal and the current polyline.
#[derive(Debug, Clone)]
pub struct PathPlanner {
    goal: Point2D,
    path: Path,
}

impl PathPlanner {
    /// Create a planner aiming at `goal`.
    pub fn new(goal: Point2D) -> Self {
        Self {
            goal,
            path: Path::default(),
        }
    }

    /// Current goal.
    pub fn goal(&self) -> Point2D {
        self.goal
    }

    /// Retarget the path's final endpoint (e.g. from a pointer click).
    pub fn set_goal(&mut self, goal: Point2D) {
        self.goal = goal;
    }

    /// The polyline from the last refactor.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebuild and refine the path from `start` to the goal.
    ///
    /// The path is reset to a single straight segment, then walked in travel
    /// order; the first segment that crosses a wall is split in place (its
    /// end shrinks to the intersected wall's start corner and a new segment
    /// from that corner to the original end is inserted after it) and the
    /// pass stops. Later ticks re-evaluate the shortened pieces.
    pub fn refactor(&mut self, map: &WorldMap, start: Point2D) -> &Path {
        self.path = Path::straight(start, self.goal);

        let mut i = 0;
        while i < self.path.segments.len() {
            if let Some(hit) = segment_intersection(map, &self.path.segments[i]) {
                let original_end = self.path.segments[i].end;
                self.path.segments[i].end = hit.corner;
                self.path
                    .segments
                    .insert(i + 1, PathSegment::new(hit.corner, original_end));
                break;
            }
            i += 1;
        }
        &self.path
    }
}
