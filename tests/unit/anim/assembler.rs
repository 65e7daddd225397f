use super::*;
use crate::foundation::core::Rgb8;
use crate::text::boxes::BoxTextEngine;

fn assembler(max_frames: u32) -> AnimationAssembler<BoxTextEngine> {
    let cfg = CountdownConfig {
        max_frames,
        ..Default::default()
    };
    let engine = BoxTextEngine::new(cfg.dpi);
    AnimationAssembler::new(cfg, engine).unwrap()
}

#[test]
fn past_target_yields_single_muted_frame() {
    let seq = assembler(30).assemble(TimeDelta::zero());
    assert_eq!(seq.len(), 1);
    let f = &seq.frames()[0];
    assert!(f.expired);
    assert_eq!(f.canvas.palette().foreground, Rgb8::new(210, 210, 210));
}

#[test]
fn short_countdown_ends_with_expired_frame() {
    let seq = assembler(30).assemble(TimeDelta::seconds(5));
    // Five running frames (showing 4..0) plus the expired frame.
    assert_eq!(seq.len(), 6);
    assert!(seq.ends_expired());
    assert!(seq.frames()[..5].iter().all(|f| !f.expired));
}

#[test]
fn budget_caps_long_countdowns() {
    let seq = assembler(30).assemble(TimeDelta::seconds(3_600));
    assert_eq!(seq.len(), 30);
    assert!(!seq.ends_expired());
}

#[test]
fn budget_equal_to_countdown_stops_before_expiry() {
    let seq = assembler(5).assemble(TimeDelta::seconds(5));
    assert_eq!(seq.len(), 5);
    assert!(!seq.ends_expired());
}

#[test]
fn frames_carry_configured_delay_and_loop_flag() {
    let seq = assembler(3).assemble(TimeDelta::seconds(10));
    assert!(seq.looping());
    assert!(seq.frames().iter().all(|f| f.delay_ms == 1000));
    assert_eq!(seq.duration_ms(), 3_000);
}

#[test]
fn most_negative_duration_assembles_single_frame() {
    let seq = assembler(30).assemble(TimeDelta::MIN);
    assert_eq!(seq.len(), 1);
    assert!(seq.ends_expired());
}
