//! Line drawing for the 3D scene
//!
//! Every world-space point goes through the view-projection matrix, then the
//! viewport matrix, and the resulting pixel coordinates are handed to
//! macroquad's `draw_line`.

use macroquad::prelude::{draw_line, Color};

use crate::collision::{Plane, Segment};
use crate::math::{transform_point, Mat4, Vec3};

const GRID_HALF_WIDTH: f32 = 2.0;
const GRID_SUBDIVISIONS: u32 = 10;
const PLANE_HALF_SIZE: f32 = 2.0;
const LINE_THICKNESS: f32 = 1.0;

/// Project a world point all the way to pixel coordinates
pub fn world_to_pixel(p: Vec3, view_projection: &Mat4, viewport: &Mat4) -> Vec3 {
    transform_point(transform_point(p, view_projection), viewport)
}

fn line_3d(a: Vec3, b: Vec3, view_projection: &Mat4, viewport: &Mat4, color: Color) {
    let a = world_to_pixel(a, view_projection, viewport);
    let b = world_to_pixel(b, view_projection, viewport);
    draw_line(a.x, a.y, b.x, b.y, LINE_THICKNESS, color);
}

/// Draw the ground-plane grid at y = 0
pub fn draw_grid(view_projection: &Mat4, viewport: &Mat4, color: Color) {
    let step = (GRID_HALF_WIDTH * 2.0) / GRID_SUBDIVISIONS as f32;

    // Lines along Z (varying X)
    for i in 0..=GRID_SUBDIVISIONS {
        let x = -GRID_HALF_WIDTH + i as f32 * step;
        line_3d(
            Vec3::new(x, 0.0, -GRID_HALF_WIDTH),
            Vec3::new(x, 0.0, GRID_HALF_WIDTH),
            view_projection,
            viewport,
            color,
        );
    }

    // Lines along X (varying Z)
    for i in 0..=GRID_SUBDIVISIONS {
        let z = -GRID_HALF_WIDTH + i as f32 * step;
        line_3d(
            Vec3::new(-GRID_HALF_WIDTH, 0.0, z),
            Vec3::new(GRID_HALF_WIDTH, 0.0, z),
            view_projection,
            viewport,
            color,
        );
    }
}

/// Draw the plane as an XZ quad outline centered on its point
pub fn draw_plane(plane: &Plane, view_projection: &Mat4, viewport: &Mat4, color: Color) {
    let p = plane.point;
    let corners = [
        Vec3::new(p.x - PLANE_HALF_SIZE, p.y, p.z - PLANE_HALF_SIZE),
        Vec3::new(p.x + PLANE_HALF_SIZE, p.y, p.z - PLANE_HALF_SIZE),
        Vec3::new(p.x + PLANE_HALF_SIZE, p.y, p.z + PLANE_HALF_SIZE),
        Vec3::new(p.x - PLANE_HALF_SIZE, p.y, p.z + PLANE_HALF_SIZE),
    ];

    for i in 0..4 {
        line_3d(
            corners[i],
            corners[(i + 1) % 4],
            view_projection,
            viewport,
            color,
        );
    }
}

/// Draw the segment
pub fn draw_segment(seg: &Segment, view_projection: &Mat4, viewport: &Mat4, color: Color) {
    line_3d(seg.start, seg.end, view_projection, viewport, color);
}

/// Mark the intersection point with a small screen-space cross
pub fn draw_hit_marker(point: Vec3, view_projection: &Mat4, viewport: &Mat4, color: Color) {
    const ARM: f32 = 6.0;
    let p = world_to_pixel(point, view_projection, viewport);
    draw_line(p.x - ARM, p.y, p.x + ARM, p.y, LINE_THICKNESS, color);
    draw_line(p.x, p.y - ARM, p.x, p.y + ARM, LINE_THICKNESS, color);
}
