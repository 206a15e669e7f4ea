//! Vector and matrix math for the 3D view
//!
//! Row-vector convention throughout: points are `(x, y, z, 1)` row vectors
//! multiplied on the left of a `Mat4`, so translation lives in row 3.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Vectors shorter than this are left untouched by `normalize` instead of
/// blowing up the division.
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// 3D vector, used both as a point and as a free vector depending on context
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length. Near-zero vectors come back unchanged.
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l <= NORMALIZE_EPSILON {
            return self;
        }
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

// =============================================================================
// 4x4 matrix operations
// =============================================================================

/// 4x4 homogeneous transform, row-major
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub fn mat4_identity() -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Multiply two 4x4 matrices
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Viewport matrix mapping normalized device coordinates to pixels.
///
/// Y is flipped (screen Y grows downward) and depth is mapped linearly into
/// `[min_depth, max_depth]`.
pub fn mat4_viewport(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
) -> Mat4 {
    let mut m = [[0.0; 4]; 4];
    m[0][0] = width * 0.5;
    m[1][1] = -height * 0.5;
    m[2][2] = max_depth - min_depth;
    m[3][0] = left + width * 0.5;
    m[3][1] = top + height * 0.5;
    m[3][2] = min_depth;
    m[3][3] = 1.0;
    m
}

/// Transform a point by a 4x4 matrix with perspective divide.
///
/// The point is treated as homogeneous `(x, y, z, 1)`. When the resulting
/// `w` is zero the raw coordinates are returned undivided; this is the only
/// divide-by-zero guard in the projection path.
pub fn transform_point(p: Vec3, m: &Mat4) -> Vec3 {
    let x = p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0];
    let y = p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1];
    let z = p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2];
    let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];
    if w != 0.0 {
        Vec3::new(x / w, y / w, z / w)
    } else {
        Vec3::new(x, y, z)
    }
}
