use crate::{
    assets::decode::decode_image,
    assets::font::{CaptionFont, TextBrushRgba8},
    foundation::core::{Canvas, DEFAULT_BOTTOM_MARGIN_PX, DEFAULT_FONT_SIZE_PX},
    foundation::error::StickerResult,
    layout::metrics::TextMetrics,
    layout::place::{PlacedLine, place_lines},
    layout::wrap::wrap_caption,
    render::cpu::CpuSurface,
    render::surface::{StickerFrame, TextSurface},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Styling and behavior configuration for a captioning job.
///
/// All fields default so a spec can be loaded from sparse JSON.
pub struct CaptionSpec {
    /// Caption font size in pixels.
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f32,
    /// Caption fill color as straight RGBA8.
    #[serde(default = "default_color_rgba8")]
    pub color_rgba8: [u8; 4],
    /// Distance in pixels between the block's last line and the canvas bottom.
    #[serde(default = "default_bottom_margin_px")]
    pub bottom_margin_px: f64,
    /// Command token stripped from caption candidates.
    #[serde(default = "default_trigger")]
    pub trigger: String,
}

impl Default for CaptionSpec {
    fn default() -> Self {
        Self {
            font_size_px: default_font_size_px(),
            color_rgba8: default_color_rgba8(),
            bottom_margin_px: default_bottom_margin_px(),
            trigger: default_trigger(),
        }
    }
}

impl CaptionSpec {
    /// Text brush for this spec's caption color.
    pub fn brush(&self) -> TextBrushRgba8 {
        TextBrushRgba8 {
            r: self.color_rgba8[0],
            g: self.color_rgba8[1],
            b: self.color_rgba8[2],
            a: self.color_rgba8[3],
        }
    }
}

fn default_font_size_px() -> f32 {
    DEFAULT_FONT_SIZE_PX
}

fn default_color_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_bottom_margin_px() -> f64 {
    DEFAULT_BOTTOM_MARGIN_PX
}

fn default_trigger() -> String {
    "!author".to_string()
}

/// Wrap `caption` to the canvas width and compute bottom-anchored, centered
/// per-line draw positions.
#[tracing::instrument(skip(metrics))]
pub fn layout_caption(
    caption: &str,
    metrics: &mut dyn TextMetrics,
    canvas: Canvas,
    bottom_margin: f64,
) -> StickerResult<Vec<PlacedLine>> {
    let lines = wrap_caption(caption, metrics, f64::from(canvas.width))?;
    place_lines(lines, metrics, canvas, bottom_margin)
}

/// Draw placed caption lines onto `surface` in reading order.
pub fn draw_caption_block(
    surface: &mut dyn TextSurface,
    placements: &[PlacedLine],
) -> StickerResult<()> {
    for p in placements {
        surface.draw_text(p.x, p.y, &p.text)?;
    }
    Ok(())
}

/// Composite `caption` onto the image decoded from `image_bytes` and return
/// the sticker-ready frame.
///
/// A `None` or effectively empty caption skips layout entirely and the
/// decoded image round-trips untouched; the bare-image short-circuit is a
/// precondition here, not a branch inside the layout core.
#[tracing::instrument(skip(image_bytes, spec, font))]
pub fn render_sticker(
    image_bytes: &[u8],
    caption: Option<&str>,
    spec: &CaptionSpec,
    font: &mut CaptionFont,
) -> StickerResult<StickerFrame> {
    let image = decode_image(image_bytes)?;

    let Some(caption) = caption.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(StickerFrame {
            width: image.width,
            height: image.height,
            data: image.rgba8,
        });
    };

    let placements = layout_caption(caption, font, image.canvas(), spec.bottom_margin_px)?;

    let mut surface = CpuSurface::new(&image, font)?;
    draw_caption_block(&mut surface, &placements)?;
    surface.finish()
}
