// Host-side tests for easing curves and the anchor-scroll tween.

use scrollfx_core::ease::Ease;
use scrollfx_core::smooth::ScrollTween;

#[test]
fn ease_endpoints_are_stable() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        // out-of-range input clamps to the endpoints
        assert_eq!(ease.apply(-0.5), 0.0);
        assert_eq!(ease.apply(1.5), 1.0);
    }
}

#[test]
fn eases_are_monotonic() {
    for ease in [Ease::InOutQuad, Ease::InCubic, Ease::OutCubic] {
        let mut prev = 0.0;
        for step in 1..=100 {
            let v = ease.apply(step as f32 / 100.0);
            assert!(v >= prev, "{:?} decreased at step {}", ease, step);
            prev = v;
        }
    }
}

#[test]
fn in_out_quad_crosses_the_midpoint() {
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn tween_starts_at_start_and_lands_on_target() {
    let tween = ScrollTween::new(100.0, 900.0, 1000.0);
    let (y0, done0) = tween.position_at(0.0);
    assert_eq!(y0, 100.0);
    assert!(!done0);
    let (y1, done1) = tween.position_at(1000.0);
    assert_eq!(y1, 900.0);
    assert!(done1);
    // elapsed past the duration stays pinned to the target
    let (y2, done2) = tween.position_at(5000.0);
    assert_eq!(y2, 900.0);
    assert!(done2);
}

#[test]
fn tween_midpoint_is_halfway_for_symmetric_easing() {
    let tween = ScrollTween::new(0.0, 800.0, 1000.0);
    let (y, done) = tween.position_at(500.0);
    assert!((y - 400.0).abs() < 1e-3);
    assert!(!done);
}

#[test]
fn zero_duration_jumps_to_target() {
    let tween = ScrollTween::new(250.0, 0.0, 0.0);
    let (y, done) = tween.position_at(0.0);
    assert_eq!(y, 0.0);
    assert!(done);
    // negative durations are treated as zero
    let tween = ScrollTween::new(250.0, 0.0, -50.0);
    assert_eq!(tween.position_at(0.0), (0.0, true));
}

#[test]
fn tween_can_scroll_upward() {
    let tween = ScrollTween::with_default_duration(900.0, 100.0);
    let (y, _) = tween.position_at(tween.duration_ms / 2.0);
    assert!(y < 900.0 && y > 100.0);
    assert_eq!(tween.position_at(tween.duration_ms).0, 100.0);
}
