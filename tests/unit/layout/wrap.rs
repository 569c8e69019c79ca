use super::*;
use crate::{StickerResult, TextMetrics};

/// Fixed-width metrics: 10px per non-space character, 5px per space.
struct CharCellMetrics;

impl TextMetrics for CharCellMetrics {
    fn measure_width(&mut self, text: &str) -> StickerResult<f64> {
        let spaces = text.chars().filter(|c| *c == ' ').count() as f64;
        let chars = text.chars().count() as f64 - spaces;
        Ok(chars * 10.0 + spaces * 5.0)
    }

    fn line_height(&mut self) -> StickerResult<f64> {
        Ok(20.0)
    }
}

#[test]
fn rejoined_lines_reproduce_word_sequence() {
    let text = "  hello   world \t this  is a\nlong caption  ";
    let lines = wrap_caption(text, &mut CharCellMetrics, 300.0).unwrap();
    let rejoined = lines.join(" ");
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    assert_eq!(rejoined, collapsed);
}

#[test]
fn every_line_fits_the_width_budget() {
    let mut m = CharCellMetrics;
    let lines = wrap_caption("hello world this is a long caption", &mut m, 300.0).unwrap();
    assert_eq!(
        lines,
        vec!["hello world this is a long".to_string(), "caption".to_string()]
    );
    for line in &lines {
        assert!(m.measure_width(line).unwrap() <= 300.0);
    }
}

#[test]
fn empty_input_yields_no_lines() {
    assert!(wrap_caption("", &mut CharCellMetrics, 300.0).unwrap().is_empty());
    assert!(
        wrap_caption("   \t\n ", &mut CharCellMetrics, 300.0)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn fitting_single_line_input_is_identity() {
    let lines = wrap_caption("hello world", &mut CharCellMetrics, 300.0).unwrap();
    assert_eq!(lines, vec!["hello world".to_string()]);
}

#[test]
fn overlong_word_occupies_its_own_line() {
    let mut m = CharCellMetrics;
    let lines = wrap_caption("hi incomprehensibilities yo", &mut m, 100.0).unwrap();
    assert_eq!(
        lines,
        vec![
            "hi".to_string(),
            "incomprehensibilities".to_string(),
            "yo".to_string()
        ]
    );
    // The lone word overflows the budget; that is the one accepted exception.
    assert!(m.measure_width(&lines[1]).unwrap() > 100.0);
}

#[test]
fn measurement_failure_propagates_unchanged() {
    struct Failing;
    impl TextMetrics for Failing {
        fn measure_width(&mut self, _text: &str) -> StickerResult<f64> {
            Err(crate::StickerError::font("font machinery broke"))
        }
        fn line_height(&mut self) -> StickerResult<f64> {
            Ok(20.0)
        }
    }

    let err = wrap_caption("two words", &mut Failing, 300.0).unwrap_err();
    assert!(err.to_string().contains("font machinery broke"));
}
