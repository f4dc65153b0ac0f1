//! Card-stack leave animation and cursor tilt.
//!
//! The stack is pinned over a scroll span; as progress advances each card
//! first eases out of the stack, then swipes off-screen, strictly in card
//! order. All of the mapping is pure; the web frontend applies the offsets.

use crate::constants::*;
use crate::ease::Ease;
use glam::Vec2;

/// Leave direction alternates by index: even cards go left, odd go right.
#[inline]
pub fn leave_direction(i: usize) -> f32 {
    if i % 2 == 0 {
        -1.0
    } else {
        1.0
    }
}

/// How far card `i` slides while still part of the stack.
#[inline]
pub fn leave_offset_px(i: usize) -> f32 {
    CARD_LEAVE_BASE_PX + i as f32 * CARD_LEAVE_STEP_PX
}

/// Off-screen travel; generous enough to clear any viewport.
#[inline]
pub fn offscreen_offset_px(viewport_w: f32) -> f32 {
    viewport_w.max(OFFSCREEN_MIN_WIDTH_PX) * OFFSCREEN_FACTOR
}

/// Scroll distance the stack stays pinned over. Shorter on mobile, but long
/// enough that reversing the animation is still visible.
#[inline]
pub fn pin_span_px(viewport_h: f32, viewport_w: f32, card_count: usize) -> f32 {
    let multiplier = if viewport_w <= MOBILE_BREAKPOINT_PX {
        MOBILE_SCROLL_MULTIPLIER
    } else {
        DESKTOP_SCROLL_MULTIPLIER
    };
    viewport_h * card_count as f32 * multiplier
}

/// Stacking order: earlier cards sit on top.
#[inline]
pub fn z_index(i: usize, n: usize) -> i32 {
    (n - i) as i32
}

/// Signed x offset for card `i` of `n` at global stack progress \[0, 1\].
///
/// Each card owns a `LEAVE_DURATION + SWIPE_DURATION` slice of the timeline,
/// sequenced back to back: a linear slide to its leave offset, then a
/// cubic-in swipe to off-screen. Before its slice the card is at rest; after
/// it the card stays off-screen.
pub fn card_travel(progress: f32, i: usize, n: usize, viewport_w: f32) -> f32 {
    if n == 0 {
        return 0.0;
    }
    let per_card = LEAVE_DURATION + SWIPE_DURATION;
    let total = n as f32 * per_card;
    let t = progress.clamp(0.0, 1.0) * total;
    let local = t - i as f32 * per_card;

    let dir = leave_direction(i);
    let leave_x = dir * leave_offset_px(i);
    let offscreen_x = dir * offscreen_offset_px(viewport_w);

    if local <= 0.0 {
        0.0
    } else if local < LEAVE_DURATION {
        leave_x * (local / LEAVE_DURATION)
    } else if local < per_card {
        let p = Ease::InCubic.apply((local - LEAVE_DURATION) / SWIPE_DURATION);
        leave_x + (offscreen_x - leave_x) * p
    } else {
        offscreen_x
    }
}

/// Counter motion for cards behind the cursor: deeper cards shift a little
/// further opposite the pointer.
#[inline]
pub fn card_counter_offset(pointer_nx: f32, depth: usize) -> f32 {
    -pointer_nx * (CARD_DEPTH_FACTOR * depth as f32).min(1.0) * MAX_CARD_OFFSET_PX
}

/// Pointer position normalized to \[-1, 1\] relative to a section's center.
#[inline]
pub fn pointer_norm(pointer: Vec2, center: Vec2, half_extent: Vec2) -> Vec2 {
    let nx = ((pointer.x - center.x) / half_extent.x.max(1.0)).clamp(-1.0, 1.0);
    let ny = ((pointer.y - center.y) / half_extent.y.max(1.0)).clamp(-1.0, 1.0);
    Vec2::new(nx, ny)
}

/// Smoothed cursor tilt for the whole stack, in degrees.
///
/// The target follows the pointer directly; the current value lerps toward
/// it each frame to absorb trackpad jitter. [`TiltState::step`] reports
/// whether the tilt is still settling so the caller can stop its frame loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct TiltState {
    pub current: Vec2,
    pub target: Vec2,
}

impl TiltState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aim the stack at a normalized pointer position.
    pub fn set_target_from_pointer(&mut self, norm: Vec2) {
        self.target = Vec2::new(norm.x * MAX_ROTATE_Y_DEG, -norm.y * MAX_ROTATE_X_DEG);
    }

    /// Advance one frame toward the target. Returns true while motion
    /// remains above the settle threshold.
    pub fn step(&mut self) -> bool {
        self.current += (self.target - self.current) * TILT_SMOOTH_FACTOR;
        let d = self.target - self.current;
        d.x.abs() > TILT_SETTLE_EPS_DEG || d.y.abs() > TILT_SETTLE_EPS_DEG
    }

    /// Snap back to rest, e.g. when the pointer leaves the section.
    pub fn reset(&mut self) {
        self.current = Vec2::ZERO;
        self.target = Vec2::ZERO;
    }

    /// Rotation about the y axis (yaw), degrees.
    #[inline]
    pub fn rotate_y_deg(&self) -> f32 {
        self.current.x
    }

    /// Rotation about the x axis (pitch), degrees.
    #[inline]
    pub fn rotate_x_deg(&self) -> f32 {
        self.current.y
    }
}
