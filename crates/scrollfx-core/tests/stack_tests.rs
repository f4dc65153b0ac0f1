// Host-side tests for the card-stack timeline and cursor tilt.

use glam::Vec2;
use scrollfx_core::constants::*;
use scrollfx_core::stack::*;

const VIEWPORT_W: f32 = 1280.0;

#[test]
fn cards_rest_in_place_at_progress_zero() {
    for i in 0..4 {
        assert_eq!(card_travel(0.0, i, 4, VIEWPORT_W), 0.0);
    }
}

#[test]
fn all_cards_are_off_screen_at_progress_one() {
    let expected = offscreen_offset_px(VIEWPORT_W);
    for i in 0..4 {
        let x = card_travel(1.0, i, 4, VIEWPORT_W);
        assert!((x.abs() - expected).abs() < 1e-3, "card {} at {}", i, x);
    }
}

#[test]
fn leave_directions_alternate_by_parity() {
    assert_eq!(leave_direction(0), -1.0);
    assert_eq!(leave_direction(1), 1.0);
    assert_eq!(leave_direction(2), -1.0);
    let x0 = card_travel(1.0, 0, 2, VIEWPORT_W);
    let x1 = card_travel(1.0, 1, 2, VIEWPORT_W);
    assert!(x0 < 0.0 && x1 > 0.0);
}

#[test]
fn cards_animate_strictly_in_sequence() {
    // n=2: each card owns 1.45 of a 2.9 timeline. While card 0 finishes its
    // leave segment, card 1 has not started moving.
    let per_card = LEAVE_DURATION + SWIPE_DURATION;
    let total = 2.0 * per_card;
    let progress = LEAVE_DURATION / total; // card 0 exactly at end of leave
    let x0 = card_travel(progress, 0, 2, VIEWPORT_W);
    let x1 = card_travel(progress, 1, 2, VIEWPORT_W);
    assert!((x0.abs() - leave_offset_px(0)).abs() < 1e-3);
    assert_eq!(x1, 0.0);
}

#[test]
fn leave_segment_is_linear() {
    // n=1: halfway through the leave segment the card is halfway out
    let per_card = LEAVE_DURATION + SWIPE_DURATION;
    let progress = (LEAVE_DURATION / 2.0) / per_card;
    let x = card_travel(progress, 0, 1, VIEWPORT_W);
    assert!((x.abs() - leave_offset_px(0) / 2.0).abs() < 1e-3);
}

#[test]
fn later_cards_leave_further() {
    assert!(leave_offset_px(3) > leave_offset_px(0));
    assert_eq!(leave_offset_px(2), CARD_LEAVE_BASE_PX + 2.0 * CARD_LEAVE_STEP_PX);
}

#[test]
fn offscreen_travel_clears_narrow_viewports() {
    // narrow viewports fall back to the minimum width
    assert_eq!(
        offscreen_offset_px(320.0),
        OFFSCREEN_MIN_WIDTH_PX * OFFSCREEN_FACTOR
    );
    assert!(offscreen_offset_px(1920.0) > 1920.0);
}

#[test]
fn earlier_cards_stack_on_top() {
    assert_eq!(z_index(0, 4), 4);
    assert_eq!(z_index(3, 4), 1);
}

#[test]
fn pin_span_is_shorter_on_mobile() {
    let desktop = pin_span_px(900.0, 1280.0, 3);
    let mobile = pin_span_px(900.0, 390.0, 3);
    assert!((desktop - 900.0 * 3.0 * DESKTOP_SCROLL_MULTIPLIER).abs() < 1e-3);
    assert!((mobile - 900.0 * 3.0 * MOBILE_SCROLL_MULTIPLIER).abs() < 1e-3);
    assert!(mobile < desktop);
}

#[test]
fn tilt_converges_to_the_pointer_target_and_settles() {
    let mut tilt = TiltState::new();
    tilt.set_target_from_pointer(Vec2::new(1.0, 1.0));
    assert_eq!(tilt.target, Vec2::new(MAX_ROTATE_Y_DEG, -MAX_ROTATE_X_DEG));

    let mut steps = 0;
    while tilt.step() {
        steps += 1;
        assert!(steps < 1000, "tilt never settled");
    }
    assert!((tilt.rotate_y_deg() - MAX_ROTATE_Y_DEG).abs() < 0.1);
    assert!((tilt.rotate_x_deg() + MAX_ROTATE_X_DEG).abs() < 0.1);

    tilt.reset();
    assert_eq!(tilt.current, Vec2::ZERO);
    assert_eq!(tilt.target, Vec2::ZERO);
}

#[test]
fn pointer_norm_clamps_to_unit_square() {
    let center = Vec2::new(500.0, 400.0);
    let half = Vec2::new(300.0, 200.0);
    let inside = pointer_norm(Vec2::new(650.0, 300.0), center, half);
    assert!((inside.x - 0.5).abs() < 1e-6);
    assert!((inside.y + 0.5).abs() < 1e-6);
    let outside = pointer_norm(Vec2::new(5000.0, -5000.0), center, half);
    assert_eq!(outside, Vec2::new(1.0, -1.0));
}

#[test]
fn counter_offsets_oppose_the_pointer_and_grow_with_depth() {
    assert_eq!(card_counter_offset(1.0, 0), 0.0);
    let shallow = card_counter_offset(1.0, 1);
    let deep = card_counter_offset(1.0, 4);
    assert!(shallow < 0.0);
    assert!(deep < shallow);
    // capped at one full card offset however deep the stack goes
    assert_eq!(card_counter_offset(1.0, 50), -MAX_CARD_OFFSET_PX);
}
