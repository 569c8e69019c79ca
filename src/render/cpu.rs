use std::sync::Arc;

use crate::{
    assets::decode::DecodedImage,
    assets::font::CaptionFont,
    foundation::core::Canvas,
    foundation::error::{StickerError, StickerResult},
    render::surface::{StickerFrame, TextSurface},
};

/// CPU canvas surface backed by `vello_cpu`.
///
/// Construction paints the decoded source image across the full canvas;
/// subsequent [`TextSurface::draw_text`] calls fill glyph runs shaped by the
/// caption font. [`CpuSurface::finish`] reads the composited pixels back as a
/// straight-alpha [`StickerFrame`].
pub struct CpuSurface<'f> {
    font: &'f mut CaptionFont,
    ctx: vello_cpu::RenderContext,
    canvas: Canvas,
}

impl<'f> CpuSurface<'f> {
    /// Build a surface the size of `image` with the image as backdrop.
    pub fn new(image: &DecodedImage, font: &'f mut CaptionFont) -> StickerResult<Self> {
        let w = dim_u16(image.width, "canvas width")?;
        let h = dim_u16(image.height, "canvas height")?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.reset();

        let paint = image_paint(image, w, h)?;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));

        Ok(Self {
            font,
            ctx,
            canvas: image.canvas(),
        })
    }

    /// Flush pending draws and read the composited frame back.
    pub fn finish(mut self) -> StickerResult<StickerFrame> {
        let w = dim_u16(self.canvas.width, "canvas width")?;
        let h = dim_u16(self.canvas.height, "canvas height")?;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        // Pixmap stores premultiplied RGBA8; encoders want straight alpha.
        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);

        Ok(StickerFrame {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        })
    }
}

impl TextSurface for CpuSurface<'_> {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) -> StickerResult<()> {
        let layout = self.font.layout_line(text);
        let font_data = self.font.font_data().clone();

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

fn dim_u16(v: u32, what: &str) -> StickerResult<u16> {
    v.try_into()
        .map_err(|_| StickerError::render(format!("{what} {v} exceeds u16 pixmap limit")))
}

fn image_paint(image: &DecodedImage, w: u16, h: u16) -> StickerResult<vello_cpu::Image> {
    let expected = (image.width as usize)
        .saturating_mul(image.height as usize)
        .saturating_mul(4);
    if image.rgba8.len() != expected {
        return Err(StickerError::render("image byte len mismatch"));
    }

    let mut premul = image.rgba8.clone();
    premultiply_rgba8_in_place(&mut premul);

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (image.width as usize) * (image.height as usize),
    );
    for px in premul.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }

    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(
            vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true),
        )),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
