//! Math utilities and types
//!
//! Provides the fundamental math types for 2D graphics. Everything is `f32`
//! because the data ends up in GPU buffers and shader uniforms.

pub use nalgebra::{Matrix4, Rotation2, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create an OpenGL-style orthographic projection matrix
    ///
    /// Maps the box `[left, right] x [bottom, top] x [-near, -far]` onto the
    /// canonical clip volume. The element layout matches the classic
    /// `glOrtho` formula:
    ///
    /// ```text
    /// [2/(r-l)   0         0          -(r+l)/(r-l)]
    /// [0         2/(t-b)   0          -(t+b)/(t-b)]
    /// [0         0         -2/(f-n)   -(f+n)/(f-n)]
    /// [0         0         0          1           ]
    /// ```
    ///
    /// Unlike `nalgebra::Orthographic3`, no ordering between `near` and `far`
    /// is asserted, so inverted depth ranges are accepted as given.
    fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4;

    /// Create a translation + non-uniform scale matrix in the XY plane
    fn translation_scale_2d(position: Vec3, size: Vec2) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let mut result = Mat4::identity();
        result[(0, 0)] = 2.0 / width;
        result[(1, 1)] = 2.0 / height;
        result[(2, 2)] = -2.0 / depth;
        result[(0, 3)] = -(right + left) / width;
        result[(1, 3)] = -(top + bottom) / height;
        result[(2, 3)] = -(far + near) / depth;
        result
    }

    fn translation_scale_2d(position: Vec3, size: Vec2) -> Mat4 {
        Mat4::new_translation(&position)
            * Mat4::new_nonuniform_scaling(&Vec3::new(size.x, size.y, 1.0))
    }
}

/// Rotate a 2D vector counter-clockwise by `angle` radians
pub fn rotate_2d(vector: Vec2, angle: f32) -> Vec2 {
    Rotation2::new(angle) * vector
}
