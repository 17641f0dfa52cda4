//! Text layout engine
//!
//! Converts strings into flat vertex and UV buffers of glyph quads, two
//! triangles (six vertices, twelve floats) per character.
//!
//! # Layout Coordinate System
//!
//! - Origin (0, 0) is the top-left of the first line
//! - +X axis points right
//! - +Y axis points down, one unit per line
//!
//! A line feed moves the cursor to the start of the next line. It always
//! advances by exactly one unit, independent of the glyph heights.

use super::Font;

/// Floats per glyph quad: 6 vertices, 2 floats each
pub const FLOATS_PER_GLYPH: usize = 12;

/// Vertex and UV buffers for a laid out string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBuffers {
    /// Quad corner positions in line units
    pub vertices: Vec<f32>,
    /// Matching atlas coordinates
    pub uv_coords: Vec<f32>,
    /// Number of quads actually written, from the start of the buffers
    pub glyph_count: usize,
}

/// Build the two triangles covering `[x, x + width] x [y, y + height]`
///
/// Corner order is bottom-left, bottom-right, top-left, top-left,
/// bottom-right, top-right, where "bottom" is the larger y. The same routine
/// generates UV quads, so positions and atlas corners always line up.
pub fn layout_glyph_quad(
    offset_x: f32,
    offset_y: f32,
    width: f32,
    height: f32,
) -> [f32; FLOATS_PER_GLYPH] {
    [
        offset_x, offset_y + height,         // bl
        offset_x + width, offset_y + height, // br
        offset_x, offset_y,                  // tl
        offset_x, offset_y,                  // tl
        offset_x + width, offset_y + height, // br
        offset_x + width, offset_y,          // tr
    ]
}

/// Lay out `text` with the glyph metrics of `font`
///
/// Buffers are sized for every character of `text`, line feeds and missing
/// glyphs included. Quads are written contiguously from the start, so
/// characters that produce no quad leave zero-filled slots at the end; those
/// render as zero-area triangles. `glyph_count` tells how many quads are real.
///
/// A character missing from the font is logged and skipped: the cursor does
/// not move and the kerning context stays on the previous drawn character.
pub fn layout_string(text: &str, font: &Font) -> TextBuffers {
    let capacity = text.chars().count() * FLOATS_PER_GLYPH;
    let mut vertices = vec![0.0; capacity];
    let mut uv_coords = vec![0.0; capacity];

    let mut index = 0;
    let mut cursor_x = 0.0_f32;
    let mut cursor_y = 0.0_f32;
    let mut previous: Option<char> = None;

    for ch in text.chars() {
        if ch == '\n' {
            cursor_x = 0.0;
            cursor_y += 1.0;
            previous = None;
            continue;
        }

        let Some(glyph) = font.glyph(ch) else {
            log::warn!("char {:?} (U+{:04X}) not found in font map", ch, u32::from(ch));
            continue;
        };

        let kerning = glyph.kerning(previous);

        vertices[index..index + FLOATS_PER_GLYPH].copy_from_slice(&layout_glyph_quad(
            cursor_x + glyph.offset_x + kerning,
            cursor_y + glyph.offset_y,
            glyph.line_width,
            glyph.line_height,
        ));
        uv_coords[index..index + FLOATS_PER_GLYPH].copy_from_slice(&layout_glyph_quad(
            glyph.atlas_x,
            glyph.atlas_y,
            glyph.atlas_width,
            glyph.atlas_height,
        ));

        index += FLOATS_PER_GLYPH;
        cursor_x += glyph.advance_x;
        previous = Some(ch);
    }

    TextBuffers {
        vertices,
        uv_coords,
        glyph_count: index / FLOATS_PER_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextureHandle;
    use crate::text::GlyphMetrics;
    use std::collections::HashMap;

    fn glyph(advance_x: f32, offset_x: f32, size: f32) -> GlyphMetrics {
        GlyphMetrics {
            atlas_x: 0.25,
            atlas_y: 0.5,
            atlas_width: 0.125,
            atlas_height: 0.25,
            offset_x,
            offset_y: 0.0,
            line_width: size,
            line_height: size,
            advance_x,
            kernings: HashMap::new(),
        }
    }

    fn font() -> Font {
        let mut b = glyph(6.0, 1.0, 8.0);
        b.kernings.insert('A', -2.0);

        let mut glyphs = HashMap::new();
        glyphs.insert('A', glyph(10.0, 0.0, 8.0));
        glyphs.insert('B', b);
        Font::new(TextureHandle(0), glyphs)
    }

    fn quad(buffers: &TextBuffers, n: usize) -> &[f32] {
        &buffers.vertices[n * FLOATS_PER_GLYPH..(n + 1) * FLOATS_PER_GLYPH]
    }

    #[test]
    fn test_glyph_quad_winding() {
        let q = layout_glyph_quad(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, [1.0, 6.0, 4.0, 6.0, 1.0, 2.0, 1.0, 2.0, 4.0, 6.0, 4.0, 2.0]);
    }

    #[test]
    fn test_single_glyph() {
        let buffers = layout_string("A", &font());

        assert_eq!(buffers.vertices.len(), FLOATS_PER_GLYPH);
        assert_eq!(buffers.glyph_count, 1);
        assert_eq!(quad(&buffers, 0), &layout_glyph_quad(0.0, 0.0, 8.0, 8.0));
        assert_eq!(&buffers.uv_coords[..], &layout_glyph_quad(0.25, 0.5, 0.125, 0.25));
    }

    #[test]
    fn test_line_feed_resets_cursor_and_kerning() {
        let buffers = layout_string("A\nB", &font());

        // Sized per character, the line feed included
        assert_eq!(buffers.vertices.len(), 3 * FLOATS_PER_GLYPH);
        assert_eq!(buffers.glyph_count, 2);
        // B starts the second line with no kerning against A
        assert_eq!(quad(&buffers, 1), &layout_glyph_quad(1.0, 1.0, 8.0, 8.0));
        assert!(quad(&buffers, 2).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_second_line_starts_at_origin() {
        let buffers = layout_string("A\nA", &font());
        assert_eq!(quad(&buffers, 0), &layout_glyph_quad(0.0, 0.0, 8.0, 8.0));
        assert_eq!(quad(&buffers, 1), &layout_glyph_quad(0.0, 1.0, 8.0, 8.0));
    }

    #[test]
    fn test_kerning_applies_to_following_glyph() {
        let buffers = layout_string("AB", &font());
        // advance(A) + offset_x(B) + kerning(A -> B)
        assert_eq!(quad(&buffers, 1)[0], 10.0 + 1.0 - 2.0);
    }

    #[test]
    fn test_missing_glyph_is_skipped() {
        let buffers = layout_string("A?B", &font());

        assert_eq!(buffers.vertices.len(), 3 * FLOATS_PER_GLYPH);
        assert_eq!(buffers.glyph_count, 2);
        // Cursor did not move and kerning still sees A
        assert_eq!(quad(&buffers, 1)[0], 10.0 + 1.0 - 2.0);
        assert!(quad(&buffers, 2).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_capacity_counts_characters_not_bytes() {
        let buffers = layout_string("Aé", &font());
        assert_eq!(buffers.vertices.len(), 2 * FLOATS_PER_GLYPH);
        assert_eq!(buffers.uv_coords.len(), 2 * FLOATS_PER_GLYPH);
    }

    #[test]
    fn test_empty_string() {
        let buffers = layout_string("", &font());
        assert!(buffers.vertices.is_empty());
        assert_eq!(buffers.glyph_count, 0);
    }
}
