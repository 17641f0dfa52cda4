//! Renderable text
//!
//! A [`Text`] owns the laid out buffers of one string and the triangle
//! primitive that draws them with the signed distance field font shader.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::layout::{layout_string, TextBuffers};
use super::{Font, FontResult};
use crate::foundation::math::{Vec2, Vec3};
use crate::render::shaders::{FRAGMENT_DISTANCE_FIELD_FONT, VERTEX_SHADER_PRIMITIVE_2D};
use crate::render::{DrawQueue, Drawable, ShaderCompiler, TrianglesPrimitive};

/// Font rendering properties
///
/// Stored with every [`Text`]. The distance field shader does not read them
/// yet and always uses a fixed black fill with a `(0.5, 0.1)` edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontProps {
    /// Fill color, RGBA in 0.0-1.0
    pub color: [f32; 4],
    /// Distance field threshold of the glyph outline
    pub stroke_width: f32,
    /// Width of the smoothed edge band
    pub stroke_edge: f32,
}

impl Default for FontProps {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
            stroke_width: 0.5,
            stroke_edge: 0.1,
        }
    }
}

/// UI element that renders a string
///
/// The vertex and UV buffers always hold `12 * chars` floats for the current
/// string, and the owned drawable always holds the same buffers.
#[derive(Debug)]
pub struct Text {
    drawable: TrianglesPrimitive,
    position: Vec3,
    size: Vec2,
    font_props: FontProps,
    text: String,
    font: Arc<Font>,
    buffers: TextBuffers,
}

impl Font {
    /// Create a [`Text`] showing `text` with this font
    ///
    /// Lays the string out immediately and compiles the distance field font
    /// program through `compiler`. `size` scales the line-unit layout, so it is
    /// effectively the font size in world units.
    ///
    /// # Errors
    /// Fails only when the shader program cannot be created.
    pub fn new_text(
        self: &Arc<Self>,
        compiler: &mut dyn ShaderCompiler,
        text: impl Into<String>,
        position: Vec3,
        size: Vec2,
        font_props: FontProps,
    ) -> FontResult<Text> {
        let text = text.into();
        let buffers = layout_string(&text, self);

        let shader =
            compiler.compile_program(VERTEX_SHADER_PRIMITIVE_2D, "", FRAGMENT_DISTANCE_FIELD_FONT)?;

        let drawable = TrianglesPrimitive::new(
            buffers.vertices.clone(),
            buffers.uv_coords.clone(),
            self.texture(),
            position,
            size,
            shader,
        );

        log::debug!("Text created: {:?} ({} glyphs)", text, buffers.glyph_count);

        Ok(Text {
            drawable,
            position,
            size,
            font_props,
            text,
            font: Arc::clone(self),
            buffers,
        })
    }
}

impl Text {
    /// Change the rendered string
    ///
    /// Relays out the whole string and replaces the drawable's geometry.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.buffers = layout_string(&self.text, &self.font);
        self.drawable.set_vertices(self.buffers.vertices.clone());
        self.drawable.set_uv_coords(self.buffers.uv_coords.clone());

        log::debug!("Text relaid out: {:?} ({} glyphs)", self.text, self.buffers.glyph_count);
    }

    /// Current string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Laid out vertex buffer
    pub fn vertices(&self) -> &[f32] {
        &self.buffers.vertices
    }

    /// Laid out UV buffer
    pub fn uv_coords(&self) -> &[f32] {
        &self.buffers.uv_coords
    }

    /// Number of glyph quads that were actually laid out
    pub fn glyph_count(&self) -> usize {
        self.buffers.glyph_count
    }

    /// World position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Layout scale
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Rendering properties
    pub fn font_props(&self) -> &FontProps {
        &self.font_props
    }

    /// Font the text is laid out with
    pub fn font(&self) -> &Arc<Font> {
        &self.font
    }

    /// Primitive that draws the text
    pub fn drawable(&self) -> &TrianglesPrimitive {
        &self.drawable
    }
}

impl Drawable for Text {
    fn enqueue_for_drawing(&self, queue: &mut DrawQueue) {
        self.drawable.enqueue_for_drawing(queue);
    }
}
