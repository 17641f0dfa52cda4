//! Bitmap font metrics
//!
//! A [`Font`] is an atlas texture plus a table of per-character
//! [`GlyphMetrics`]. The table is read-only once built, so a font is shared
//! between any number of [`Text`](super::Text) objects through an `Arc`.
//!
//! Fonts are usually loaded from an AngelCode BMFont text descriptor. All
//! metrics are normalised while loading: atlas rectangles by the atlas size,
//! and offsets, sizes, advances and kernings by the line height. One layout
//! unit is therefore one line of text.

use std::collections::HashMap;
use std::path::Path;

use crate::render::{RenderError, TextureHandle, TextureLoader};

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read a font descriptor
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Font descriptor is malformed
    #[error("Font descriptor parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the descriptor
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Font data is well-formed but unusable
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Requested character was not found in the font
    #[error("Character '{0}' not found in font")]
    GlyphNotFound(char),

    /// Creating a GPU resource for the font failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Layout and atlas data for a single character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Atlas rectangle origin, x (UV units)
    pub atlas_x: f32,
    /// Atlas rectangle origin, y (UV units)
    pub atlas_y: f32,
    /// Atlas rectangle width (UV units)
    pub atlas_width: f32,
    /// Atlas rectangle height (UV units)
    pub atlas_height: f32,

    /// Quad offset from the cursor, x (line units)
    pub offset_x: f32,
    /// Quad offset from the cursor, y (line units)
    pub offset_y: f32,
    /// Quad width (line units)
    pub line_width: f32,
    /// Quad height (line units)
    pub line_height: f32,

    /// Horizontal cursor advance after this glyph (line units)
    pub advance_x: f32,

    /// Horizontal adjustment keyed by the preceding character
    pub kernings: HashMap<char, f32>,
}

impl GlyphMetrics {
    /// Kerning to apply when this glyph follows `previous`
    ///
    /// Zero when there is no previous character or no entry for it.
    pub fn kerning(&self, previous: Option<char>) -> f32 {
        previous
            .and_then(|ch| self.kernings.get(&ch))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Bitmap font: atlas texture plus glyph metrics
#[derive(Debug, Clone)]
pub struct Font {
    texture: TextureHandle,
    glyphs: HashMap<char, GlyphMetrics>,
}

impl Font {
    /// Create a font from an already built metrics table
    pub fn new(texture: TextureHandle, glyphs: HashMap<char, GlyphMetrics>) -> Self {
        Self { texture, glyphs }
    }

    /// Parse a BMFont text descriptor
    ///
    /// Only `common`, `char` and `kerning` lines are interpreted; the atlas
    /// itself is provided as `texture`. Kerning pairs naming an unknown glyph
    /// are skipped with a warning.
    ///
    /// # Errors
    /// [`FontError::Parse`] for malformed lines or a missing `common` line,
    /// [`FontError::InvalidParameter`] for a line height or atlas size that is
    /// not a finite positive number.
    ///
    /// # Example
    /// ```rust
    /// use engine2d::render::TextureHandle;
    /// use engine2d::text::Font;
    ///
    /// let descriptor = "common lineHeight=32 base=26 scaleW=256 scaleH=256\n\
    ///                   char id=65 x=0 y=0 width=16 height=32 xoffset=0 yoffset=0 xadvance=16";
    /// let font = Font::from_bmfont(descriptor, TextureHandle(0)).unwrap();
    /// assert_eq!(font.glyph('A').unwrap().advance_x, 0.5);
    /// ```
    pub fn from_bmfont(descriptor: &str, texture: TextureHandle) -> FontResult<Self> {
        let mut common: Option<CommonBlock> = None;
        let mut raw_chars = Vec::new();
        let mut raw_kernings = Vec::new();

        for (index, line) in descriptor.lines().enumerate() {
            let line_number = index + 1;
            let line = line.trim();
            let (tag, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            match tag {
                "common" => {
                    let attributes = parse_attributes(rest, line_number)?;
                    common = Some(CommonBlock {
                        line_height: attributes.number("lineHeight")?,
                        scale_w: attributes.number("scaleW")?,
                        scale_h: attributes.number("scaleH")?,
                    });
                }
                "char" => raw_chars.push(RawChar::parse(&parse_attributes(rest, line_number)?)?),
                "kerning" => {
                    let attributes = parse_attributes(rest, line_number)?;
                    raw_kernings.push((
                        attributes.character("first")?,
                        attributes.character("second")?,
                        attributes.number("amount")?,
                    ));
                }
                _ => {}
            }
        }

        let common = common.ok_or_else(|| FontError::Parse {
            line: 0,
            message: "missing 'common' line".to_string(),
        })?;
        let dimensions = [common.line_height, common.scale_w, common.scale_h];
        if !dimensions.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(FontError::InvalidParameter(format!(
                "line height and atlas size must be finite and > 0, \
                 got lineHeight={} scaleW={} scaleH={}",
                common.line_height, common.scale_w, common.scale_h
            )));
        }

        let mut glyphs: HashMap<char, GlyphMetrics> = raw_chars
            .into_iter()
            .map(|raw| (raw.ch, raw.normalise(&common)))
            .collect();

        for (first, second, amount) in raw_kernings {
            match glyphs.get_mut(&second) {
                Some(glyph) => {
                    glyph.kernings.insert(first, amount / common.line_height);
                }
                None => log::warn!(
                    "kerning pair ({:?}, {:?}) refers to a missing glyph",
                    first,
                    second
                ),
            }
        }

        log::info!(
            "Loaded bitmap font: {} glyphs, line height {}px",
            glyphs.len(),
            common.line_height
        );
        Ok(Self::new(texture, glyphs))
    }

    /// Load a BMFont descriptor from disk together with its atlas
    ///
    /// The atlas path comes from the descriptor's `page id=0` line and is
    /// resolved relative to the descriptor file.
    pub fn load_bmfont(path: impl AsRef<Path>, loader: &mut dyn TextureLoader) -> FontResult<Self> {
        let path = path.as_ref();
        let descriptor = std::fs::read_to_string(path)?;

        let atlas_file = descriptor
            .lines()
            .enumerate()
            .filter(|(_, line)| line.trim_start().starts_with("page "))
            .map(|(index, line)| {
                let rest = line.trim_start().trim_start_matches("page").trim_start();
                parse_attributes(rest, index + 1)
            })
            .find_map(|attributes| match attributes {
                Ok(attributes) if attributes.get("id") == Some("0") => {
                    attributes.get("file").map(|file| Ok(file.to_string()))
                }
                Ok(_) => None,
                Err(err) => Some(Err(err)),
            })
            .transpose()?
            .ok_or_else(|| FontError::Parse {
                line: 0,
                message: "missing 'page id=0' line".to_string(),
            })?;

        let atlas_path = path.parent().unwrap_or_else(|| Path::new("")).join(atlas_file);
        let texture = loader.load_texture(&atlas_path)?;
        Self::from_bmfont(&descriptor, texture)
    }

    /// Get glyph metrics for a character
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(&ch)
    }

    /// Get glyph metrics for a character, failing when it is absent
    pub fn try_glyph(&self, ch: char) -> FontResult<&GlyphMetrics> {
        self.glyph(ch).ok_or(FontError::GlyphNotFound(ch))
    }

    /// Atlas texture
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Number of glyphs in the font
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the font has no glyphs at all
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

struct CommonBlock {
    line_height: f32,
    scale_w: f32,
    scale_h: f32,
}

struct RawChar {
    ch: char,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    xoffset: f32,
    yoffset: f32,
    xadvance: f32,
}

impl RawChar {
    fn parse(attributes: &Attributes<'_>) -> FontResult<Self> {
        Ok(Self {
            ch: attributes.character("id")?,
            x: attributes.number("x")?,
            y: attributes.number("y")?,
            width: attributes.number("width")?,
            height: attributes.number("height")?,
            xoffset: attributes.number("xoffset")?,
            yoffset: attributes.number("yoffset")?,
            xadvance: attributes.number("xadvance")?,
        })
    }

    fn normalise(self, common: &CommonBlock) -> GlyphMetrics {
        GlyphMetrics {
            atlas_x: self.x / common.scale_w,
            atlas_y: self.y / common.scale_h,
            atlas_width: self.width / common.scale_w,
            atlas_height: self.height / common.scale_h,
            offset_x: self.xoffset / common.line_height,
            offset_y: self.yoffset / common.line_height,
            line_width: self.width / common.line_height,
            line_height: self.height / common.line_height,
            advance_x: self.xadvance / common.line_height,
            kernings: HashMap::new(),
        }
    }
}

/// `key=value` pairs of one descriptor line
struct Attributes<'a> {
    line: usize,
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Attributes<'a> {
    fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    fn required(&self, key: &str) -> FontResult<&'a str> {
        self.get(key).ok_or_else(|| FontError::Parse {
            line: self.line,
            message: format!("missing attribute '{key}'"),
        })
    }

    fn number(&self, key: &str) -> FontResult<f32> {
        let value = self.required(key)?;
        value.parse::<f32>().map_err(|_| FontError::Parse {
            line: self.line,
            message: format!("attribute '{key}' is not a number: '{value}'"),
        })
    }

    fn character(&self, key: &str) -> FontResult<char> {
        let value = self.required(key)?;
        value
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| FontError::Parse {
                line: self.line,
                message: format!("attribute '{key}' is not a character code: '{value}'"),
            })
    }
}

/// Split `key=value key="quoted value"` into pairs
fn parse_attributes(input: &str, line: usize) -> FontResult<Attributes<'_>> {
    let mut pairs = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let (key, after_key) = rest.split_once('=').ok_or_else(|| FontError::Parse {
            line,
            message: format!("expected key=value, found '{rest}'"),
        })?;

        let (value, remainder) = if let Some(quoted) = after_key.strip_prefix('"') {
            quoted.split_once('"').ok_or_else(|| FontError::Parse {
                line,
                message: format!("unterminated quote after '{key}='"),
            })?
        } else {
            after_key
                .split_once(char::is_whitespace)
                .unwrap_or((after_key, ""))
        };

        pairs.push((key.trim(), value));
        rest = remainder.trim_start();
    }

    Ok(Attributes { line, pairs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeadlessBackend;
    use approx::assert_relative_eq;

    const DESCRIPTOR: &str = r#"info face="Dejavu Sans" size=32 bold=0 italic=0
common lineHeight=32 base=26 scaleW=256 scaleH=128 pages=1 packed=0
page id=0 file="dejavu.png"
chars count=2
char id=65  x=0  y=0  width=16 height=32 xoffset=0 yoffset=4 xadvance=20 page=0 chnl=15
char id=86  x=16 y=64 width=32 height=16 xoffset=2 yoffset=8 xadvance=24 page=0 chnl=15
kernings count=2
kerning first=65 second=86 amount=-4
kerning first=65 second=90 amount=-2
"#;

    #[test]
    fn test_bmfont_metrics_are_normalised() {
        let font = Font::from_bmfont(DESCRIPTOR, TextureHandle(9)).unwrap();
        assert_eq!(font.len(), 2);
        assert_eq!(font.texture(), TextureHandle(9));

        let v = font.glyph('V').unwrap();
        assert_relative_eq!(v.atlas_x, 16.0 / 256.0);
        assert_relative_eq!(v.atlas_y, 0.5);
        assert_relative_eq!(v.atlas_width, 0.125);
        assert_relative_eq!(v.atlas_height, 0.125);
        assert_relative_eq!(v.offset_x, 2.0 / 32.0);
        assert_relative_eq!(v.offset_y, 0.25);
        assert_relative_eq!(v.line_width, 1.0);
        assert_relative_eq!(v.line_height, 0.5);
        assert_relative_eq!(v.advance_x, 0.75);
    }

    #[test]
    fn test_kerning_lookup() {
        let font = Font::from_bmfont(DESCRIPTOR, TextureHandle(0)).unwrap();
        let v = font.glyph('V').unwrap();

        assert_relative_eq!(v.kerning(Some('A')), -0.125);
        assert_eq!(v.kerning(Some('V')), 0.0);
        assert_eq!(v.kerning(None), 0.0);
    }

    #[test]
    fn test_missing_glyph_lookup() {
        let font = Font::from_bmfont(DESCRIPTOR, TextureHandle(0)).unwrap();
        assert!(font.glyph('Z').is_none());
        assert!(matches!(font.try_glyph('Z'), Err(FontError::GlyphNotFound('Z'))));
    }

    #[test]
    fn test_missing_common_line() {
        let descriptor = "char id=65 x=0 y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=1";
        let result = Font::from_bmfont(descriptor, TextureHandle(0));
        assert!(matches!(result, Err(FontError::Parse { .. })));
    }

    #[test]
    fn test_zero_line_height_is_rejected() {
        let result =
            Font::from_bmfont("common lineHeight=0 scaleW=256 scaleH=256", TextureHandle(0));
        assert!(matches!(result, Err(FontError::InvalidParameter(_))));
    }

    #[test]
    fn test_non_finite_dimensions_are_rejected() {
        let glyph = "char id=65 x=0 y=0 width=16 height=32 xoffset=0 yoffset=0 xadvance=16";
        for common in [
            "common lineHeight=nan scaleW=256 scaleH=256",
            "common lineHeight=inf scaleW=256 scaleH=256",
            "common lineHeight=32 scaleW=NaN scaleH=256",
            "common lineHeight=32 scaleW=256 scaleH=-inf",
        ] {
            let result = Font::from_bmfont(&format!("{common}\n{glyph}"), TextureHandle(0));
            assert!(
                matches!(result, Err(FontError::InvalidParameter(_))),
                "{common} was accepted"
            );
        }
    }

    #[test]
    fn test_malformed_number_reports_line() {
        let descriptor = "common lineHeight=32 scaleW=256 scaleH=256\n\
                          char id=65 x=abc y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=1";
        match Font::from_bmfont(descriptor, TextureHandle(0)) {
            Err(FontError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_quoted_attributes() {
        let attributes = parse_attributes(r#"face="Times New Roman" size=12"#, 1).unwrap();
        assert_eq!(attributes.get("face"), Some("Times New Roman"));
        assert_eq!(attributes.get("size"), Some("12"));
    }

    #[test]
    fn test_load_bmfont_resolves_atlas_next_to_descriptor() {
        let dir = std::env::temp_dir().join(format!("engine2d-font-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let descriptor_path = dir.join("dejavu.fnt");
        std::fs::write(&descriptor_path, DESCRIPTOR).unwrap();

        let mut backend = HeadlessBackend::new();
        let font = Font::load_bmfont(&descriptor_path, &mut backend).unwrap();

        assert_eq!(backend.texture_path(font.texture()), Some(dir.join("dejavu.png").as_path()));
        assert_eq!(font.len(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_bmfont_missing_file() {
        let mut backend = HeadlessBackend::new();
        let result = Font::load_bmfont("/nonexistent/font.fnt", &mut backend);
        assert!(matches!(result, Err(FontError::Io(_))));
    }
}
