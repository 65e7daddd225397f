use super::*;
use crate::foundation::core::Rgb8;
use crate::render::canvas::Palette;
use crate::text::font::{EMBEDDED_FAMILY, EMBEDDED_FONT, FontSource};

fn engine() -> ParleyTextEngine {
    let font = LoadedFont::load(&FontSource::default()).unwrap();
    ParleyTextEngine::new(&font, 150, 580, 150).unwrap()
}

fn black_canvas() -> Canvas {
    Canvas::new(
        580,
        150,
        Palette {
            background: Rgb8::WHITE,
            foreground: Rgb8::BLACK,
        },
    )
}

#[test]
fn rejects_oversized_canvas() {
    let font = LoadedFont {
        bytes: std::sync::Arc::new(Vec::new()),
        index: 0,
        family_hint: None,
    };
    assert!(ParleyTextEngine::new(&font, 150, 70_000, 10).is_err());
    assert!(ParleyTextEngine::new(&font, 0, 10, 10).is_err());
}

#[test]
fn garbage_bytes_do_not_register() {
    let font = LoadedFont {
        bytes: std::sync::Arc::new(b"not a font".to_vec()),
        index: 0,
        family_hint: None,
    };
    assert!(matches!(
        ParleyTextEngine::new(&font, 150, 10, 10),
        Err(TminusError::Font(_))
    ));
}

#[test]
fn embedded_font_registers_its_family() {
    assert_eq!(engine().family_name(), EMBEDDED_FAMILY);
}

#[test]
fn measure_is_stable_and_size_monotonic() {
    let mut e = engine();
    let a = e.measure("minutes", 15);
    let b = e.measure("minutes", 15);
    assert_eq!(a, b);
    assert!(a > 0);
    assert!(e.measure("minutes", 25) > a);
    assert_eq!(e.measure("", 25), 0);
}

#[test]
fn equal_digit_strings_measure_equal() {
    // DejaVu Sans digits share one advance, so two-digit values center identically.
    let mut e = engine();
    assert_eq!(e.measure("10", 25), e.measure("59", 25));
}

#[test]
fn drawn_ink_stays_within_measured_width() {
    let mut e = engine();
    let width = e.measure("minutes", 25);
    let mut c = black_canvas();
    e.draw_text(
        &mut c,
        &DrawText {
            text: "minutes".to_string(),
            size_pt: 25,
            x: 50,
            y: 100,
        },
    );

    let mut xs = Vec::new();
    for (i, &p) in c.indices().iter().enumerate() {
        if p == Palette::FOREGROUND {
            xs.push((i % 580) as i32);
        }
    }
    let min_x = *xs.iter().min().unwrap();
    let max_x = *xs.iter().max().unwrap();
    assert!(min_x >= 50 - 2, "ink starts at {min_x}");
    assert!(max_x <= 50 + width + 2, "ink ends at {max_x}, width {width}");
    assert!(max_x - min_x > width / 2);
}

#[test]
fn glyph_runs_are_shaped_from_the_registered_face() {
    let mut e = engine();
    let layout = e.layout("12 days", 25);
    let mut runs = 0;
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let font = run.run().font();
            assert_eq!(font.index, 0);
            assert_eq!(font.data.data().len(), EMBEDDED_FONT.len());
            runs += 1;
        }
    }
    assert!(runs > 0);
}

#[test]
fn draw_is_deterministic_and_inked() {
    let mut e = engine();
    let cmd = DrawText {
        text: "42".to_string(),
        size_pt: 25,
        x: 50,
        y: 75,
    };
    let mut a = black_canvas();
    let mut b = black_canvas();
    e.draw_text(&mut a, &cmd);
    e.draw_text(&mut b, &cmd);
    assert_eq!(a, b);
    assert!(a.foreground_count() > 0);
}
