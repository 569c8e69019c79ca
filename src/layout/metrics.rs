use crate::foundation::error::StickerResult;

/// Glyph used to derive the per-line advance height.
///
/// Line height is measured from this single fixed glyph rather than the
/// tallest glyph actually present in the caption, so a block's vertical
/// extent depends only on the font selection, not on the caption content.
pub const REFERENCE_GLYPH: &str = "M";

/// Font-dependent glyph measurement capability injected into the layout core.
///
/// Both operations must be deterministic for a fixed font selection. The
/// layout functions ([`crate::wrap_caption`], [`crate::place_lines`]) perform
/// no IO and have no failure modes of their own; any error returned here
/// propagates through them unchanged.
pub trait TextMetrics {
    /// Measured pixel width of `text` laid out as a single line.
    fn measure_width(&mut self, text: &str) -> StickerResult<f64>;

    /// Vertical advance in pixels between consecutive lines, derived from
    /// [`REFERENCE_GLYPH`].
    fn line_height(&mut self) -> StickerResult<f64>;
}
