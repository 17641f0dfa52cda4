//! Headless text demo
//!
//! Lays out a few strings with a small embedded bitmap font, pans and zooms a
//! 2D camera across several frames and logs what would be submitted to the
//! GPU. Pass a `.toml` or `.ron` camera config as the first argument to
//! override the default viewport.

use std::sync::Arc;

use engine2d::config::{CameraConfig, Config, ConfigError};
use engine2d::foundation::logging;
use engine2d::foundation::math::{Vec2, Vec3};
use engine2d::geometry::{bounding_box, circle_to_polygon, GeometryError};
use engine2d::render::{DrawQueue, Drawable, HeadlessBackend, RenderError, TextureLoader};
use engine2d::text::{Font, FontError, FontProps};

const FRAMES: u32 = 3;

// Monospaced 16px glyphs on a 128x128 atlas, no '!' on purpose
const DEMO_FONT: &str = r#"info face="demo" size=16
common lineHeight=16 base=13 scaleW=128 scaleH=128 pages=1 packed=0
page id=0 file="demo.png"
char id=32  x=0   y=0  width=0  height=0  xoffset=0 yoffset=0 xadvance=8
char id=72  x=0   y=0  width=8  height=12 xoffset=0 yoffset=2 xadvance=9
char id=87  x=8   y=0  width=10 height=12 xoffset=0 yoffset=2 xadvance=11
char id=100 x=18  y=0  width=7  height=12 xoffset=0 yoffset=2 xadvance=8
char id=101 x=25  y=0  width=7  height=9  xoffset=0 yoffset=5 xadvance=8
char id=108 x=32  y=0  width=3  height=12 xoffset=1 yoffset=2 xadvance=5
char id=111 x=35  y=0  width=7  height=9  xoffset=0 yoffset=5 xadvance=8
char id=114 x=42  y=0  width=5  height=9  xoffset=0 yoffset=5 xadvance=6
kernings count=1
kerning first=87 second=111 amount=-1
"#;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Font(#[from] FontError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

fn main() {
    logging::init_with_default("info");

    log::info!("Starting headless text demo");

    if let Err(err) = run(std::env::args().nth(1)) {
        log::error!("Demo failed: {}", err);
        std::process::exit(1);
    }
}

fn run(config_path: Option<String>) -> Result<(), DemoError> {
    let camera_config = match config_path {
        Some(path) => CameraConfig::load_from_file(&path)?,
        None => CameraConfig::default(),
    };
    let mut camera = camera_config.build()?;

    let mut backend = HeadlessBackend::new();
    let atlas = backend.load_texture("demo.png".as_ref())?;
    let font = Arc::new(Font::from_bmfont(DEMO_FONT, atlas)?);

    let mut title = font.new_text(
        &mut backend,
        "Hello\nWorld",
        Vec3::new(40.0, 40.0, 0.0),
        Vec2::new(32.0, 32.0),
        FontProps::default(),
    )?;

    let marker = circle_to_polygon(Vec2::new(400.0, 300.0), 24.0, 12, 0.0)?;
    let marker_bounds = bounding_box(&marker)?;
    log::info!(
        "Marker polygon: {} points, bounds {:?} .. {:?}",
        marker.len(),
        marker_bounds.min,
        marker_bounds.max
    );

    let mut queue = DrawQueue::new();
    for frame in 0..FRAMES {
        camera.set_position(frame as f32 * 10.0, 0.0);
        camera.set_zoom(1.0 + frame as f32 * 0.5)?;

        if frame == FRAMES - 1 {
            // '!' is not in the atlas: logged and skipped
            title.set_text("Hello World!");
        }

        let projection = camera.projection_matrix();
        title.enqueue_for_drawing(&mut queue);

        for command in queue.drain() {
            log::info!(
                "frame {}: {} vertices ({} bytes), texture {:?}, shader {:?}, \
                 projection scale ({:.4}, {:.4})",
                frame,
                command.vertex_count(),
                command.vertex_bytes().len(),
                command.texture,
                command.shader,
                projection[(0, 0)],
                projection[(1, 1)],
            );
        }
    }

    log::info!(
        "Done: {} glyphs laid out for {:?}, {} camera rebuilds",
        title.glyph_count(),
        title.text(),
        camera.rebuild_count()
    );
    Ok(())
}
