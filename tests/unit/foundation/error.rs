use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StickerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StickerError::font("x").to_string().contains("font error:"));
    assert!(
        StickerError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StickerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
