//! # Draw Queue
//!
//! Collects the draw commands of one frame. Drawables enqueue themselves
//! here; the backend drains the queue and submits it to the GPU.

use crate::foundation::math::Mat4;
use crate::render::{ShaderHandle, TextureHandle};

/// Everything needed to draw one textured triangle list
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Flat `x, y` vertex positions, three vertices per triangle
    pub vertices: Vec<f32>,
    /// Flat `u, v` texture coordinates matching `vertices`
    pub uv_coords: Vec<f32>,
    /// Texture sampled by the shader
    pub texture: TextureHandle,
    /// Program used to draw
    pub shader: ShaderHandle,
    /// Model matrix placing the local geometry in the world
    pub model: Mat4,
}

impl DrawCommand {
    /// Number of vertices described by this command
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Vertex positions as raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Texture coordinates as raw bytes for buffer upload
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uv_coords)
    }
}

/// Per-frame list of draw commands
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn enqueue(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Commands queued so far, in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been queued
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take all commands out of the queue for submission
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }

    /// Drop all queued commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> DrawCommand {
        DrawCommand {
            vertices: vec![0.0; 12],
            uv_coords: vec![0.0; 12],
            texture: TextureHandle(1),
            shader: ShaderHandle(2),
            model: Mat4::identity(),
        }
    }

    #[test]
    fn test_enqueue_and_drain() {
        let mut queue = DrawQueue::new();
        queue.enqueue(command());
        queue.enqueue(command());
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_command_sizes() {
        let command = command();
        assert_eq!(command.vertex_count(), 6);
        assert_eq!(command.vertex_bytes().len(), 48);
        assert_eq!(command.uv_bytes().len(), 48);
    }
}
