//! Segment-plane intersection test
//!
//! Pure geometry, independent of any rendering: the frame loop calls this
//! once per frame on the raw world-space segment and plane.

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Denominators below this are treated as parallel (no intersection). Also
/// covers degenerate zero-length segments.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Oriented finite line in world space
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// Plane given by a point on it and a normal.
///
/// The normal does not have to be pre-normalized; the intersection test
/// normalizes it defensively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// A valid segment-plane intersection
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Intersection point in world space
    pub point: Vec3,
    /// Parameter along the segment, in [0, 1] from start to end
    pub t: f32,
}

/// Intersect a finite segment with a plane.
///
/// Returns the parametric hit when it lies within the segment, boundary
/// inclusive. A segment parallel to the plane (or degenerate) reports no
/// intersection.
pub fn segment_plane_hit(seg: &Segment, plane: &Plane) -> Option<Hit> {
    let n = plane.normal.normalize();
    let dir = seg.end - seg.start;

    let denom = n.dot(dir);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let dist = n.dot(plane.point - seg.start);
    let t = dist / denom;

    if (0.0..=1.0).contains(&t) {
        Some(Hit {
            point: seg.start + dir * t,
            t,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground_plane() -> Plane {
        Plane::new(Vec3::ZERO, Vec3::UP)
    }

    #[test]
    fn test_parallel_segment_misses() {
        // Direction lies in the plane
        let seg = Segment::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(segment_plane_hit(&seg, &ground_plane()).is_none());
    }

    #[test]
    fn test_crossing_segment_hits_midpoint() {
        let seg = Segment::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        let hit = segment_plane_hit(&seg, &ground_plane()).expect("should hit");
        assert!((hit.t - 0.5).abs() < 1e-5);
        assert!(hit.point.len() < 1e-5);
    }

    #[test]
    fn test_start_on_plane_is_inclusive() {
        let seg = Segment::new(Vec3::ZERO, Vec3::new(0.0, -2.0, 0.0));
        let hit = segment_plane_hit(&seg, &ground_plane()).expect("boundary counts");
        assert!(hit.t.abs() < 1e-5);
        assert!(hit.point.len() < 1e-5);
    }

    #[test]
    fn test_end_on_plane_is_inclusive() {
        let seg = Segment::new(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO);
        let hit = segment_plane_hit(&seg, &ground_plane()).expect("boundary counts");
        assert!((hit.t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_range_misses() {
        // Would intersect the infinite line, but t is outside [0, 1]
        let seg = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert!(segment_plane_hit(&seg, &ground_plane()).is_none());
    }

    #[test]
    fn test_degenerate_segment_misses() {
        let p = Vec3::new(0.5, 1.0, 0.5);
        let seg = Segment::new(p, p);
        assert!(segment_plane_hit(&seg, &ground_plane()).is_none());
    }

    #[test]
    fn test_unnormalized_normal_same_hit() {
        let seg = Segment::new(Vec3::new(0.3, 2.0, -0.7), Vec3::new(-0.2, -1.0, 0.4));
        let unit = segment_plane_hit(&seg, &ground_plane()).expect("hit");
        let scaled = Plane::new(Vec3::ZERO, Vec3::new(0.0, 17.5, 0.0));
        let hit = segment_plane_hit(&seg, &scaled).expect("hit");
        assert!((hit.t - unit.t).abs() < 1e-5);
        assert!((hit.point - unit.point).len() < 1e-5);
    }

    #[test]
    fn test_tilted_plane() {
        let plane = Plane::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        // Segment straight down the x axis crosses x + y = 1 at x = 1
        let seg = Segment::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        let hit = segment_plane_hit(&seg, &plane).expect("hit");
        assert!((hit.point.x - 1.0).abs() < 1e-5);
        assert!((hit.t - 0.5).abs() < 1e-5);
    }
}
