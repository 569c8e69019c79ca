use crate::{
    foundation::core::Canvas, foundation::error::StickerResult, layout::metrics::TextMetrics,
};

#[derive(Clone, Debug, PartialEq)]
/// A wrapped caption line together with its computed top-left draw position.
pub struct PlacedLine {
    /// Line text, free of embedded line breaks.
    pub text: String,
    /// Horizontal draw position centering the line on the canvas.
    pub x: f64,
    /// Vertical draw position of the line's top edge.
    pub y: f64,
}

/// Compute per-line draw positions for a bottom-anchored, horizontally
/// centered text block.
///
/// The line height is a single reference measurement applied to every line.
/// The block's top edge is `canvas.height - lines.len() * line_height -
/// bottom_margin`, so the lowest line's bottom edge sits exactly
/// `bottom_margin` above the canvas bottom. Output placements preserve input
/// order one-to-one.
///
/// A caption taller than the canvas produces a negative starting y; the block
/// then extends above the canvas top. No clamping is applied and no error is
/// raised; guarding against over-tall captions is the caller's choice.
pub fn place_lines(
    lines: Vec<String>,
    metrics: &mut dyn TextMetrics,
    canvas: Canvas,
    bottom_margin: f64,
) -> StickerResult<Vec<PlacedLine>> {
    let line_height = metrics.line_height()?;
    let start_y = f64::from(canvas.height) - lines.len() as f64 * line_height - bottom_margin;

    let mut placed = Vec::with_capacity(lines.len());
    for (idx, text) in lines.into_iter().enumerate() {
        let width = metrics.measure_width(&text)?;
        placed.push(PlacedLine {
            x: (f64::from(canvas.width) - width) / 2.0,
            y: start_y + idx as f64 * line_height,
            text,
        });
    }

    Ok(placed)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/place.rs"]
mod tests;
