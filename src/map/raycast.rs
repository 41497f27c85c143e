//! Ray casting against the wall map.
//!
//! Computes the distance from a point in a given direction to the first wall
//! hit. This is the hot path of the weighing step (particles × 3 rays per
//! tick), so it allocates nothing and walks the wall list linearly.

use super::WorldMap;
use crate::core::types::Point2D;

/// Saturating distance returned when a ray hits no wall.
///
/// Finite so that downstream kernel comparisons square it without
/// overflowing; a reading equal to `NO_HIT_RANGE` compares equal between the
/// agent and a particle whose ray also escapes.
pub const NO_HIT_RANGE: f32 = 1.0e6;

/// Result of a detailed ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Distance to the hit point, or [`NO_HIT_RANGE`] on a miss.
    pub distance: f32,
    /// Index of the wall that was hit, if any.
    pub wall_idx: Option<usize>,
}

impl RaycastHit {
    /// Whether a wall was hit.
    #[inline]
    pub fn hit(&self) -> bool {
        self.wall_idx.is_some()
    }
}

/// Cast a ray from `origin` at `angle` and return the distance to the
/// nearest forward wall intersection.
///
/// For each wall the ray's parametric line and the wall's parametric segment
/// form a 2x2 linear system. A wall is hit when the wall parameter lies in
/// [0, 1] and the ray parameter is non-negative; the minimum ray parameter
/// over all walls wins. Parallel walls (zero determinant) are skipped.
#[inline]
pub fn cast(map: &WorldMap, origin: Point2D, angle: f32) -> f32 {
    cast_detailed(map, origin, angle).distance
}

/// Cast a ray and also report which wall was hit.
pub fn cast_detailed(map: &WorldMap, origin: Point2D, angle: f32) -> RaycastHit {
    let (dy, dx) = angle.sin_cos();

    let mut best = NO_HIT_RANGE;
    let mut best_idx = None;

    for (idx, wall) in map.walls().iter().enumerate() {
        let ex = wall.end.x - wall.start.x;
        let ey = wall.end.y - wall.start.y;

        let det = dx * ey - dy * ex;
        if det == 0.0 {
            continue;
        }

        let ox = wall.start.x - origin.x;
        let oy = wall.start.y - origin.y;
        let ray_len = (ox * ey - oy * ex) / det;
        let wall_len = (dy * ox - dx * oy) / det;

        if (0.0..=1.0).contains(&wall_len) && ray_len >= 0.0 && ray_len < best {
            best = ray_len;
            best_idx = Some(idx);
        }
    }

    RaycastHit {
        distance: best,
        wall_idx: best_idx,
    }
}
