use super::*;
use crate::render::canvas::Canvas;
use crate::text::boxes::BoxTextEngine;

/// Engine with caller-chosen widths per (text, size).
struct TableEngine(Vec<(&'static str, u32, i32)>);

impl TextEngine for TableEngine {
    fn measure(&mut self, text: &str, size_pt: u32) -> i32 {
        self.0
            .iter()
            .find(|(t, s, _)| *t == text && *s == size_pt)
            .map(|(_, _, w)| *w)
            .unwrap_or(0)
    }

    fn draw_text(&mut self, _canvas: &mut Canvas, _cmd: &DrawText) {}
}

#[test]
fn equal_widths_center_with_zero_offset() {
    let cfg = CountdownConfig::default();
    let mut e = TableEngine(vec![("hours", 15, 40), ("12", 25, 40), ("hours", 25, 66)]);
    let p = place_group(&mut e, &cfg, 100, 50, "hours", "12");
    assert_eq!(p.value.x, p.label.x);
    assert_eq!(p.label.x, 100);
}

#[test]
fn baselines_follow_sizes_and_padding() {
    let cfg = CountdownConfig::default();
    let mut e = TableEngine(vec![]);
    let p = place_group(&mut e, &cfg, 0, 50, "days", "0");
    assert_eq!(p.value.y, 50 + 25);
    assert_eq!(p.label.y, 50 + 25 + 15 + 20);
    assert_eq!(p.value.size_pt, 25);
    assert_eq!(p.label.size_pt, 15);
}

#[test]
fn half_widths_truncate_before_subtracting() {
    let cfg = CountdownConfig::default();
    // 40/2 - 21/2 = 20 - 10 = 10, whereas (40 - 21)/2 would be 9.
    let mut e = TableEngine(vec![("label", 15, 40), ("v", 25, 21)]);
    let p = place_group(&mut e, &cfg, 7, 0, "label", "v");
    assert_eq!(p.value.x, 17);
}

#[test]
fn wide_values_shift_left_of_label() {
    let cfg = CountdownConfig::default();
    let mut e = TableEngine(vec![("days", 15, 30), ("12345", 25, 101)]);
    let p = place_group(&mut e, &cfg, 50, 0, "days", "12345");
    assert_eq!(p.value.x, 50 + 15 - 50);
    assert!(p.value.x < p.label.x);
}

#[test]
fn advance_uses_label_at_value_size() {
    let cfg = CountdownConfig::default();
    let mut e = TableEngine(vec![("days", 15, 30), ("days", 25, 51), ("99999", 25, 500)]);
    let p = place_group(&mut e, &cfg, 0, 0, "days", "99999");
    assert_eq!(p.advance, 25 + cfg.group_padding);
}

#[test]
fn cursor_walks_fields_left_to_right() {
    let cfg = CountdownConfig::default();
    let mut e = BoxTextEngine::new(cfg.dpi);
    let fields = crate::time::breakdown::decompose(chrono::TimeDelta::seconds(3_725)).fields();

    let mut cursor = LayoutCursor::start(&cfg);
    let mut xs = Vec::new();
    for f in &fields {
        let before = cursor.x();
        let p = cursor.place(&mut e, &cfg, f);
        assert_eq!(p.label.x, before);
        xs.push(before);
    }
    assert_eq!(xs[0], cfg.margin_left);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}
