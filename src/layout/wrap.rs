use crate::{foundation::error::StickerResult, layout::metrics::TextMetrics};

/// Split caption text into an ordered sequence of lines that each fit within
/// `max_width` pixels.
///
/// Words are derived by whitespace-delimited tokenization, collapsing runs
/// and ignoring leading/trailing whitespace. Words accumulate greedily onto
/// the current line: the tentative `current + " " + word` is measured, and
/// the word is committed if the result still fits. A word that does not fit
/// opens a new line holding just that word, even when the word alone exceeds
/// `max_width`: single long words are never hyphenated or split and are
/// allowed to overflow.
///
/// Empty (or all-whitespace) input yields an empty sequence. Rejoining the
/// output with single spaces reproduces the whitespace-collapsed word
/// sequence of the input.
pub fn wrap_caption(
    text: &str,
    metrics: &mut dyn TextMetrics,
    max_width: f64,
) -> StickerResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if metrics.measure_width(&candidate)? <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
