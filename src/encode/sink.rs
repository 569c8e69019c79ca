use std::io::Cursor;

use anyhow::Context;

use crate::{foundation::error::StickerResult, render::surface::StickerFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output byte format for a composited sticker frame.
pub enum StickerFormat {
    /// Lossless WebP, the sticker-ready default.
    WebP,
    /// PNG.
    Png,
    /// JPEG. Alpha is flattened onto black before encoding.
    Jpeg,
}

/// Encode `frame` to an in-memory byte buffer in the requested format.
pub fn encode_frame(frame: &StickerFrame, format: StickerFormat) -> StickerResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());

    match format {
        StickerFormat::WebP => {
            image::write_buffer_with_format(
                &mut out,
                &frame.data,
                frame.width,
                frame.height,
                image::ExtendedColorType::Rgba8,
                image::ImageFormat::WebP,
            )
            .context("encode webp")?;
        }
        StickerFormat::Png => {
            image::write_buffer_with_format(
                &mut out,
                &frame.data,
                frame.width,
                frame.height,
                image::ExtendedColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .context("encode png")?;
        }
        StickerFormat::Jpeg => {
            let rgb = flatten_alpha_to_rgb8(&frame.data);
            image::write_buffer_with_format(
                &mut out,
                &rgb,
                frame.width,
                frame.height,
                image::ExtendedColorType::Rgb8,
                image::ImageFormat::Jpeg,
            )
            .context("encode jpeg")?;
        }
    }

    Ok(out.into_inner())
}

fn flatten_alpha_to_rgb8(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let a = px[3] as u16;
        rgb.push(((px[0] as u16 * a + 127) / 255) as u8);
        rgb.push(((px[1] as u16 * a + 127) / 255) as u8);
        rgb.push(((px[2] as u16 * a + 127) / 255) as u8);
    }
    rgb
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
