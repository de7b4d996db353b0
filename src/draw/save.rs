use crate::draw::composite::RgbaBuffer;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const FRAME_SUFFIX: &str = "boxes";

pub fn timestamped_stem(now: chrono::DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

pub fn build_filename(stem: &str, suffix: &str) -> String {
    format!("{}_{}.png", stem, suffix)
}

pub fn write_png(buffer: &RgbaBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create frame output folder {}", parent.display()))?;
    }
    let image = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.pixels.clone())
        .ok_or_else(|| {
            anyhow!(
                "pixel buffer does not match {}x{} frame",
                buffer.width,
                buffer.height
            )
        })?;
    image
        .save(path)
        .with_context(|| format!("write frame {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported frame");
    Ok(())
}

/// Writes the frame into `output_dir` under a timestamped name.
pub fn export_frame(
    buffer: &RgbaBuffer,
    output_dir: &Path,
    now: chrono::DateTime<Local>,
) -> Result<PathBuf> {
    let path = output_dir.join(build_filename(&timestamped_stem(now), FRAME_SUFFIX));
    write_png(buffer, &path)?;
    Ok(path)
}
