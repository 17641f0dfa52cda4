//! # Engine2D
//!
//! Geometry and layout core of a 2D rendering engine. Turns scene intent
//! (camera framing, text strings) into the vertex/UV buffers and matrices a
//! rendering backend consumes.
//!
//! ## Features
//!
//! - **Camera2D**: Orthographic camera with a lazily rebuilt projection matrix
//! - **Text Layout**: Bitmap font shaping with kerning and line feeds
//! - **Geometry**: Circle-to-polygon approximation and bounding boxes
//! - **Configuration**: TOML/RON settings for cameras and text
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use engine2d::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut backend = HeadlessBackend::new();
//!     let descriptor = "common lineHeight=16 scaleW=128 scaleH=128\n\
//!                       char id=72 x=0 y=0 width=8 height=16 xoffset=0 yoffset=0 xadvance=9";
//!     let font = Arc::new(Font::from_bmfont(descriptor, TextureHandle(0))?);
//!
//!     let size = Vec2::new(16.0, 16.0);
//!     let text = font.new_text(&mut backend, "HH", Vec3::zeros(), size, FontProps::default())?;
//!
//!     let mut camera = Camera2D::new(800, 600, 1.0, false)?;
//!     let mut queue = DrawQueue::new();
//!     text.enqueue_for_drawing(&mut queue);
//!     let _projection = camera.projection_matrix();
//!     assert_eq!(queue.len(), 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod geometry;
pub mod render;
pub mod text;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CameraConfig, Config, ConfigError, TextConfig},
        foundation::math::{Mat4, Vec2, Vec3},
        geometry::{bounding_box, circle_to_polygon, BoundingBox, GeometryError},
        render::{
            Camera2D, DrawQueue, Drawable, HeadlessBackend, RenderError, ShaderCompiler,
            TextureHandle, TextureLoader,
        },
        text::{Font, FontError, FontProps, GlyphMetrics, Text},
    };
}
