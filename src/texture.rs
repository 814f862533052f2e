use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::structs::TextureInfo;

/// Expands three-channel RGB pixel data to the four-channel RGBA layout the
/// renderer uploads, alpha forced to 255.
///
/// The source is walked from the last pixel to the first while the output is
/// written front to back, so the pixel order comes out reversed. The demo's
/// texture sampling depends on that 180-degree rotation.
pub fn format_texture(width: u32, height: u32, rgb: &[u8]) -> TextureInfo {
    debug_assert_eq!(rgb.len(), (width * height * 3) as usize);

    let mut pixels = vec![0u8; (width * height * 4) as usize];
    for (dst, src) in pixels.chunks_exact_mut(4).zip(rgb.chunks_exact(3).rev()) {
        dst[..3].copy_from_slice(src);
        dst[3] = 0xff;
    }

    TextureInfo {
        pixels,
        width,
        height,
        stride: 4,
    }
}

/// Loads an image from disk and reformats it for upload.
pub fn load_texture(path: &Path) -> Result<TextureInfo> {
    let image = image::open(path)
        .with_context(|| format!("could not load image {}", path.display()))?
        .to_rgb8();

    let info = format_texture(image.width(), image.height(), image.as_raw());
    info!(
        "loaded texture {}: {}x{}, {} bytes",
        path.display(),
        info.width,
        info.height,
        info.pixels.len()
    );
    Ok(info)
}
