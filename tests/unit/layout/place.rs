use super::*;
use crate::{Canvas, StickerResult, TextMetrics, wrap_caption};

/// Fixed-width metrics: 10px per non-space character, 5px per space, 20px
/// line height.
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

fn canvas_300() -> Canvas {
    Canvas {
        width: 300,
        height: 300,
    }
}

#[test]
fn block_is_bottom_anchored_with_uniform_line_advance() {
    let mut m = CharCellMetrics;
    let lines = wrap_caption("hello world this is a long caption", &mut m, 300.0).unwrap();
    let count = lines.len();
    let placed = place_lines(lines, &mut m, canvas_300(), 10.0).unwrap();

    assert_eq!(placed.len(), count);
    for pair in placed.windows(2) {
        assert_eq!(pair[1].y - pair[0].y, 20.0);
    }

    let last = placed.last().unwrap();
    assert_eq!(last.y + 20.0, 300.0 - 10.0);
    assert_eq!(placed[0].y, 300.0 - count as f64 * 20.0 - 10.0);
}

#[test]
fn each_line_is_horizontally_centered() {
    let mut m = CharCellMetrics;
    let lines = vec!["wide line here".to_string(), "tiny".to_string()];
    let placed = place_lines(lines, &mut m, canvas_300(), 10.0).unwrap();

    for p in &placed {
        let width = m.measure_width(&p.text).unwrap();
        // Symmetric margins: left margin == right margin.
        assert!((p.x + width - (300.0 - p.x)).abs() < 1e-9);
    }
}

#[test]
fn placements_preserve_input_order() {
    let lines = vec!["first".to_string(), "second".to_string(), "third".to_string()];
    let placed = place_lines(lines.clone(), &mut CharCellMetrics, canvas_300(), 10.0).unwrap();
    let texts: Vec<_> = placed.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn over_tall_block_goes_negative_without_error() {
    let lines: Vec<String> = (0..5).map(|i| format!("line{i}")).collect();
    let canvas = Canvas {
        width: 300,
        height: 60,
    };
    let placed = place_lines(lines, &mut CharCellMetrics, canvas, 10.0).unwrap();

    // start_y = 60 - 5*20 - 10 = -50; overflow is representational, not fatal.
    assert_eq!(placed[0].y, -50.0);
    assert_eq!(placed.last().unwrap().y + 20.0, 60.0 - 10.0);
}

#[test]
fn no_lines_means_no_placements() {
    let placed = place_lines(Vec::new(), &mut CharCellMetrics, canvas_300(), 10.0).unwrap();
    assert!(placed.is_empty());
}

#[test]
fn line_height_is_measured_once_for_the_block() {
    struct CountingMetrics {
        height_calls: usize,
    }
    impl TextMetrics for CountingMetrics {
        fn measure_width(&mut self, text: &str) -> StickerResult<f64> {
            Ok(text.chars().count() as f64 * 10.0)
        }
        fn line_height(&mut self) -> StickerResult<f64> {
            self.height_calls += 1;
            Ok(20.0)
        }
    }

    let mut m = CountingMetrics { height_calls: 0 };
    let lines = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    place_lines(lines, &mut m, canvas_300(), 10.0).unwrap();
    assert_eq!(m.height_calls, 1);
}
