/// Resolve the caption for a sticker from explicit message text and an
/// optional quoted-message fallback.
///
/// The command `trigger` token is stripped (first occurrence only) from each
/// candidate before trimming. Explicit text wins when non-empty; otherwise
/// the quoted text is consulted. `None` means no caption exists and the
/// caller should emit the bare image as a sticker without running layout.
pub fn resolve_caption(explicit: &str, quoted: Option<&str>, trigger: &str) -> Option<String> {
    let own = strip_trigger(explicit, trigger);
    if !own.is_empty() {
        return Some(own);
    }

    let fallback = quoted.map(|q| strip_trigger(q, trigger)).unwrap_or_default();
    if fallback.is_empty() {
        None
    } else {
        Some(fallback)
    }
}

fn strip_trigger(text: &str, trigger: &str) -> String {
    if trigger.is_empty() {
        return text.trim().to_string();
    }
    text.replacen(trigger, "", 1).trim().to_string()
}

#[cfg(test)]
#[path = "../tests/unit/caption.rs"]
mod tests;
