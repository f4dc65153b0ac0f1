//! Smooth anchor-scroll tween.

use crate::constants::DEFAULT_SCROLL_DURATION_MS;
use crate::ease::Ease;

/// A fixed-duration scroll from `start_y` to `target_y`, eased in-out.
///
/// The tween is stateless over time: callers hold the start instant and ask
/// for the position at each elapsed offset, so a dropped frame never
/// desynchronizes the animation.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTween {
    pub start_y: f32,
    pub target_y: f32,
    pub duration_ms: f32,
}

impl ScrollTween {
    pub fn new(start_y: f32, target_y: f32, duration_ms: f32) -> Self {
        Self {
            start_y,
            target_y,
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn with_default_duration(start_y: f32, target_y: f32) -> Self {
        Self::new(start_y, target_y, DEFAULT_SCROLL_DURATION_MS)
    }

    /// Position at `elapsed_ms` since the tween started, plus whether the
    /// tween has finished. Zero duration jumps straight to the target.
    pub fn position_at(&self, elapsed_ms: f32) -> (f32, bool) {
        if self.duration_ms <= 0.0 {
            return (self.target_y, true);
        }
        let t = (elapsed_ms / self.duration_ms).min(1.0);
        let eased = Ease::InOutQuad.apply(t);
        let y = self.start_y + (self.target_y - self.start_y) * eased;
        (y, t >= 1.0)
    }
}
