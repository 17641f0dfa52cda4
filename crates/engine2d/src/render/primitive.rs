//! Drawable primitives
//!
//! [`TrianglesPrimitive`] is the textured triangle list that text and other
//! 2D geometry hand to the draw queue.

use crate::foundation::math::{Mat4, Mat4Ext, Vec2, Vec3};
use crate::render::{DrawCommand, DrawQueue, ShaderHandle, TextureHandle};

/// Anything that can put itself into a [`DrawQueue`]
pub trait Drawable {
    /// Queue this object for drawing in the current frame
    fn enqueue_for_drawing(&self, queue: &mut DrawQueue);
}

/// Textured triangle list
///
/// Vertices and UVs are flat `f32` buffers with two floats per vertex and
/// three vertices per triangle. Geometry is in local units and scaled by
/// `size`, then moved to `position`.
#[derive(Debug, Clone)]
pub struct TrianglesPrimitive {
    vertices: Vec<f32>,
    uv_coords: Vec<f32>,
    texture: TextureHandle,
    shader: ShaderHandle,
    position: Vec3,
    size: Vec2,
}

impl TrianglesPrimitive {
    /// Create a new triangle list primitive
    pub fn new(
        vertices: Vec<f32>,
        uv_coords: Vec<f32>,
        texture: TextureHandle,
        position: Vec3,
        size: Vec2,
        shader: ShaderHandle,
    ) -> Self {
        Self {
            vertices,
            uv_coords,
            texture,
            shader,
            position,
            size,
        }
    }

    /// Replace the vertex buffer
    pub fn set_vertices(&mut self, vertices: Vec<f32>) {
        self.vertices = vertices;
    }

    /// Replace the UV buffer
    pub fn set_uv_coords(&mut self, uv_coords: Vec<f32>) {
        self.uv_coords = uv_coords;
    }

    /// Current vertex buffer
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Current UV buffer
    pub fn uv_coords(&self) -> &[f32] {
        &self.uv_coords
    }

    /// Texture sampled when drawing
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Shader program used when drawing
    pub fn shader(&self) -> ShaderHandle {
        self.shader
    }

    /// World position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Scale applied to local geometry
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Model matrix from position and size
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation_scale_2d(self.position, self.size)
    }
}

impl Drawable for TrianglesPrimitive {
    fn enqueue_for_drawing(&self, queue: &mut DrawQueue) {
        queue.enqueue(DrawCommand {
            vertices: self.vertices.clone(),
            uv_coords: self.uv_coords.clone(),
            texture: self.texture,
            shader: self.shader,
            model: self.model_matrix(),
        });
    }
}
