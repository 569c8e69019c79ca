//! Stickerpress turns a chat profile picture and a caption into a
//! sticker-ready image.
//!
//! The caption is laid out as wrapped, horizontally centered lines anchored a
//! fixed margin above the bottom of the image, drawn onto the image, and
//! encoded as WebP/PNG/JPEG bytes.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: image bytes -> [`DecodedImage`] (RGBA8)
//! 2. **Wrap**: caption text -> lines fitting the canvas width ([`wrap_caption`])
//! 3. **Place**: lines -> bottom-anchored, centered positions ([`place_lines`])
//! 4. **Draw**: positions -> glyph fills on a [`TextSurface`] (CPU backend)
//! 5. **Encode**: composited frame -> sticker bytes ([`encode_frame`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure layout core**: wrapping and placement are deterministic functions
//!   over an injected [`TextMetrics`] capability and perform no IO, so they
//!   are testable with fixed-width fake metrics and no font at all.
//! - **No caption, no layout**: an absent caption short-circuits to the bare
//!   image before the layout core is ever invoked.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod caption;
mod compose;
mod encode;
mod foundation;
mod layout;
mod render;

pub use assets::decode::{DecodedImage, decode_image};
pub use assets::font::{CaptionFont, TextBrushRgba8};
pub use caption::resolve_caption;
pub use compose::{CaptionSpec, draw_caption_block, layout_caption, render_sticker};
pub use encode::sink::{StickerFormat, encode_frame};
pub use foundation::core::{Canvas, DEFAULT_BOTTOM_MARGIN_PX, DEFAULT_FONT_SIZE_PX};
pub use foundation::error::{StickerError, StickerResult};
pub use layout::metrics::{REFERENCE_GLYPH, TextMetrics};
pub use layout::place::{PlacedLine, place_lines};
pub use layout::wrap::wrap_caption;
pub use render::cpu::CpuSurface;
pub use render::surface::{StickerFrame, TextSurface};
