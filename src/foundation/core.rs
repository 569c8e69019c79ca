#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Raster canvas dimensions, known before layout begins.
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Default distance in pixels between the caption block's lowest line and the
/// canvas bottom edge.
pub const DEFAULT_BOTTOM_MARGIN_PX: f64 = 10.0;

/// Default caption font size in pixels.
pub const DEFAULT_FONT_SIZE_PX: f32 = 64.0;
