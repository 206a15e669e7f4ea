//! Camera pose and view-projection construction
//!
//! The camera is a raw pose (world translation + Euler angles) with no state
//! carried between frames; the combined world-to-clip matrix is rebuilt from
//! it every frame.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::math::{mat4_mul, Mat4, Vec3};

const FOV_Y: f32 = 60.0 * (PI / 180.0);
const ASPECT: f32 = 1280.0 / 720.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Camera pose: world position plus Euler angles in radians.
///
/// Rotation is applied Y first, then X, then Z (the matrices compose as
/// `rotZ * rotX * rotY` under the row-vector convention).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub translate: Vec3,
    pub rotate: Vec3,
}

impl Camera {
    /// Starting pose: pulled back and slightly above, pitched down at the grid
    pub fn new() -> Self {
        Self {
            translate: Vec3::new(0.0, -4.0, -20.0),
            rotate: Vec3::new(-0.2, 0.0, 0.0),
        }
    }

    /// Build the combined world-to-clip matrix for this pose.
    ///
    /// `view = trans * rot` — translate-then-rotate. Swapping that order
    /// breaks camera placement, so it is pinned by a test.
    pub fn view_projection(&self) -> Mat4 {
        let (sin_y, cos_y) = self.rotate.y.sin_cos();
        let (sin_x, cos_x) = self.rotate.x.sin_cos();
        let (sin_z, cos_z) = self.rotate.z.sin_cos();

        let rot_y: Mat4 = [
            [cos_y, 0.0, sin_y, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin_y, 0.0, cos_y, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];

        let rot_x: Mat4 = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos_x, -sin_x, 0.0],
            [0.0, sin_x, cos_x, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];

        let rot_z: Mat4 = [
            [cos_z, -sin_z, 0.0, 0.0],
            [sin_z, cos_z, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];

        let rot = mat4_mul(&mat4_mul(&rot_z, &rot_x), &rot_y);

        let mut trans = [[0.0; 4]; 4];
        trans[0][0] = 1.0;
        trans[1][1] = 1.0;
        trans[2][2] = 1.0;
        trans[3][3] = 1.0;
        trans[3][0] = -self.translate.x;
        trans[3][1] = -self.translate.y;
        trans[3][2] = -self.translate.z;

        let view = mat4_mul(&trans, &rot);

        mat4_mul(&view, &projection())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Perspective projection from the fixed lens constants, depth mapped into
/// [0, 1] (`far/(far-near)` convention).
fn projection() -> Mat4 {
    let f = 1.0 / (FOV_Y / 2.0).tan();
    [
        [f / ASPECT, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, FAR / (FAR - NEAR), (-NEAR * FAR) / (FAR - NEAR)],
        [0.0, 0.0, 1.0, 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::transform_point;

    fn mat4_close(a: &Mat4, b: &Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if (a[i][j] - b[i][j]).abs() > 1e-4 {
                    return false;
                }
            }
        }
        true
    }

    fn rot_matrices(rotate: Vec3) -> (Mat4, Mat4, Mat4) {
        let (sy, cy) = rotate.y.sin_cos();
        let (sx, cx) = rotate.x.sin_cos();
        let (sz, cz) = rotate.z.sin_cos();
        let ry = [
            [cy, 0.0, sy, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sy, 0.0, cy, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let rx = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cx, -sx, 0.0],
            [0.0, sx, cx, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let rz = [
            [cz, -sz, 0.0, 0.0],
            [sz, cz, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        (ry, rx, rz)
    }

    #[test]
    fn test_rotation_composition_order() {
        // Fixed pitch/yaw, nonzero roll: the result must match the
        // rotZ * rotX * rotY composition and no other order.
        let cam = Camera {
            translate: Vec3::ZERO,
            rotate: Vec3::new(0.4, 0.9, 1.3),
        };
        let vp = cam.view_projection();

        let (ry, rx, rz) = rot_matrices(cam.rotate);
        let zxy = mat4_mul(&mat4_mul(&rz, &rx), &ry);
        let expected = mat4_mul(&zxy, &projection());
        assert!(mat4_close(&vp, &expected));

        let yxz = mat4_mul(&mat4_mul(&ry, &rx), &rz);
        let wrong = mat4_mul(&yxz, &projection());
        assert!(!mat4_close(&vp, &wrong));
    }

    #[test]
    fn test_roll_only_varies_z_axis() {
        // With only Z rotation the composition degenerates to rotZ alone
        let cam = Camera {
            translate: Vec3::ZERO,
            rotate: Vec3::new(0.0, 0.0, 0.7),
        };
        let vp = cam.view_projection();
        let (_, _, rz) = rot_matrices(cam.rotate);
        let expected = mat4_mul(&rz, &projection());
        assert!(mat4_close(&vp, &expected));
    }

    #[test]
    fn test_translate_applied_before_rotation() {
        // The camera's own position must map to the view-space origin no
        // matter how the camera is rotated. With view = trans * rot that
        // holds; with rot * trans it does not.
        let cam = Camera {
            translate: Vec3::new(3.0, -2.0, 7.0),
            rotate: Vec3::new(0.5, -1.1, 0.3),
        };
        let vp = cam.view_projection();

        // View-space origin projects to clip (0, 0, 1) with w = 0, which the
        // transform passes through undivided.
        let p = transform_point(cam.translate, &vp);
        assert!(p.x.abs() < 1e-3);
        assert!(p.y.abs() < 1e-3);
        assert!((p.z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_projection_constants() {
        let proj = projection();
        let f = 1.0 / (FOV_Y / 2.0).tan();
        assert!((proj[0][0] - f / ASPECT).abs() < 1e-5);
        assert!((proj[1][1] - f).abs() < 1e-5);
        assert!((proj[2][2] - FAR / (FAR - NEAR)).abs() < 1e-5);
        assert!((proj[2][3] - (-NEAR * FAR) / (FAR - NEAR)).abs() < 1e-5);
        assert!((proj[3][2] - 1.0).abs() < 1e-5);
        assert!(proj[3][3].abs() < 1e-5);
    }
}
