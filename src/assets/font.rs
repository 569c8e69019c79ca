use crate::{
    foundation::error::{StickerError, StickerResult},
    layout::metrics::{REFERENCE_GLYPH, TextMetrics},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Caption font loaded from raw TTF/OTF bytes.
///
/// Owns the Parley shaping contexts and implements [`TextMetrics`] by shaping
/// single-line layouts, so the same font selection drives both measurement
/// and glyph rasterization. Line height comes from
/// [`REFERENCE_GLYPH`], not from the glyphs actually present in a caption.
pub struct CaptionFont {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
    size_px: f32,
    brush: TextBrushRgba8,
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionFont")
            .field("family_name", &self.family_name)
            .field("size_px", &self.size_px)
            .field("brush", &self.brush)
            .finish()
    }
}

impl CaptionFont {
    /// Register `font_bytes` and build a caption font at `size_px` drawing
    /// with `brush`.
    pub fn from_bytes(
        font_bytes: Vec<u8>,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> StickerResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StickerError::validation(
                "font size_px must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| StickerError::font("no font families registered from font bytes"))?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StickerError::font("registered font family has no name"))?
            .to_string();

        let font_data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_data,
            size_px,
            brush,
        })
    }

    /// Primary family name resolved from the font bytes.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` as a single unbroken line.
    pub(crate) fn layout_line(&mut self, text: &str) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(self.brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font_data
    }
}

impl TextMetrics for CaptionFont {
    fn measure_width(&mut self, text: &str) -> StickerResult<f64> {
        let layout = self.layout_line(text);
        let mut w = 0.0f64;
        for line in layout.lines() {
            w = w.max(f64::from(line.metrics().advance));
        }
        Ok(w)
    }

    fn line_height(&mut self) -> StickerResult<f64> {
        let layout = self.layout_line(REFERENCE_GLYPH);
        let line = layout
            .lines()
            .next()
            .ok_or_else(|| StickerError::font("reference glyph produced no layout line"))?;
        let m = line.metrics();
        Ok(f64::from(m.ascent + m.descent + m.leading))
    }
}
