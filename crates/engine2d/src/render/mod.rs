//! # Rendering Core
//!
//! The parts of the renderer this crate owns: the 2D orthographic camera,
//! and the thin boundary towards the GPU-facing collaborators (shader
//! compilation, texture loading, drawable primitives and the per-frame draw
//! queue).
//!
//! ## Frame Flow
//!
//! 1. Application code configures a [`Camera2D`] and builds drawables
//! 2. Each frame the renderer reads [`Camera2D::projection_matrix`]
//! 3. Drawables push [`DrawCommand`]s into the [`DrawQueue`]
//! 4. The backend drains the queue and submits it to the GPU

pub mod backend;
pub mod camera;
pub mod draw_queue;
pub mod primitive;
pub mod shaders;

pub use backend::{HeadlessBackend, ShaderCompiler, ShaderHandle, TextureHandle, TextureLoader};
pub use camera::{Camera2D, CameraUniform, ViewBounds};
pub use draw_queue::{DrawCommand, DrawQueue};
pub use primitive::{Drawable, TrianglesPrimitive};

/// Errors that can occur during rendering operations
///
/// Provides categorized error types for the camera and the collaborator
/// boundary. Parameter validation failures are programming errors on the
/// caller's side and are reported before any state changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// A caller-supplied parameter is outside its valid range
    ///
    /// Raised for non-positive zoom or viewport dimensions.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Resource creation or management failed
    ///
    /// Occurs when shaders or textures cannot be created by the backend.
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
