use anyhow::Context;

use crate::{foundation::core::Canvas, foundation::error::StickerResult};

#[derive(Clone, Debug)]
/// Decoded source image in straight (non-premultiplied) RGBA8 form.
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub rgba8: Vec<u8>,
}

impl DecodedImage {
    /// Canvas dimensions of this image.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

/// Decode encoded image bytes (PNG, JPEG, WebP, ...) to RGBA8.
pub fn decode_image(bytes: &[u8]) -> StickerResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
