//! Bitmap font text rendering
//!
//! Glyph metrics, string layout and the renderable [`Text`] element.

pub mod font;
pub mod layout;
pub mod renderable;

pub use font::{Font, FontError, FontResult, GlyphMetrics};
pub use layout::{layout_glyph_quad, layout_string, TextBuffers, FLOATS_PER_GLYPH};
pub use renderable::{FontProps, Text};
