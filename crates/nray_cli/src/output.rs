//! PNG export.

use std::path::Path;

use anyhow::{Context, Result};
use image::ColorType;
use nray_renderer::PixelBuffer;

/// Write `buffer` as an 8-bit RGBA PNG, channels clamped to [0, 1].
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &buffer.to_rgba8_bytes(),
        buffer.width(),
        buffer.height(),
        ColorType::Rgba8,
    )
    .with_context(|| format!("failed to write {}", path.display()))
}
