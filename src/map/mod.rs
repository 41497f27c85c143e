//! Wall-segment map of the environment.
//!
//! The map is an ordered, immutable collection of line-segment walls plus a
//! cached axis-aligned bounding rectangle. All geometric queries (ray casting,
//! path intersection) iterate the walls exhaustively.

mod raycast;

pub use raycast::{cast, cast_detailed, RaycastHit, NO_HIT_RANGE};

use crate::core::types::Point2D;
use crate::error::{DishaError, Result};
use serde::{Deserialize, Serialize};

/// A wall as a directed line segment between two endpoints.
///
/// Direction only matters for path refinement, which routes split paths
/// through a wall's `start` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point2D,
    pub end: Point2D,
}

impl Wall {
    /// Create a wall from its endpoints.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Create a wall from raw coordinates.
    #[inline]
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    /// Wall length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }
}

/// Axis-aligned bounding rectangle of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds {
    /// Whether a point lies inside the rectangle (inclusive).
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Rectangle width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Immutable wall map with its bounding rectangle.
#[derive(Debug, Clone)]
pub struct WorldMap {
    walls: Vec<Wall>,
    bounds: Bounds,
}

impl WorldMap {
    /// Build a map from walls, validating them.
    ///
    /// Fails on an empty wall list, non-finite coordinates, or zero-length
    /// walls. Enclosure of the reachable area is a caller precondition; rays
    /// that escape the walls saturate at [`NO_HIT_RANGE`].
    pub fn new(walls: Vec<Wall>) -> Result<Self> {
        if walls.is_empty() {
            return Err(DishaError::InvalidMap("no walls".into()));
        }
        for (i, wall) in walls.iter().enumerate() {
            let coords = [wall.start.x, wall.start.y, wall.end.x, wall.end.y];
            if coords.iter().any(|c| !c.is_finite()) {
                return Err(DishaError::InvalidMap(format!(
                    "wall {} has non-finite coordinates",
                    i
                )));
            }
            if wall.length() == 0.0 {
                return Err(DishaError::InvalidMap(format!("wall {} has zero length", i)));
            }
        }

        let mut bounds = Bounds {
            min: walls[0].start,
            max: walls[0].start,
        };
        for wall in &walls {
            for p in [wall.start, wall.end] {
                bounds.min.x = bounds.min.x.min(p.x);
                bounds.min.y = bounds.min.y.min(p.y);
                bounds.max.x = bounds.max.x.max(p.x);
                bounds.max.y = bounds.max.y.max(p.y);
            }
        }

        Ok(Self { walls, bounds })
    }

    /// The walls in construction order.
    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Bounding rectangle over all wall endpoints.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether a point lies inside the bounding rectangle.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        self.bounds.contains(p)
    }
}
