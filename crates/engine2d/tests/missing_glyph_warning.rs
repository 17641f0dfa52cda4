//! Layout reports characters absent from the font through `log::warn!`
//!
//! Kept in its own test binary: it installs a process-wide logger.

use std::sync::Mutex;

use engine2d::render::TextureHandle;
use engine2d::text::{layout_string, Font};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

const DESCRIPTOR: &str = "\
common lineHeight=10 scaleW=100 scaleH=100
char id=65 x=0 y=0 width=8 height=8 xoffset=0 yoffset=0 xadvance=10
";

#[test]
fn missing_glyph_is_logged_once_per_occurrence() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let font = Font::from_bmfont(DESCRIPTOR, TextureHandle(0)).unwrap();
    let buffers = layout_string("A?A\u{e9}", &font);
    assert_eq!(buffers.glyph_count, 2);

    let warnings: Vec<String> = LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message.clone())
        .collect();

    assert_eq!(warnings.len(), 2, "unexpected warnings: {warnings:?}");
    assert!(warnings[0].contains("'?'") && warnings[0].contains("U+003F"));
    assert!(warnings[1].contains("U+00E9"));
}
