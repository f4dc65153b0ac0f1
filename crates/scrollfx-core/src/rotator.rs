//! Scroll-progress visual mapper for the pinned headline rotator.
//!
//! Everything here is a pure function of the measured geometry and the
//! sanitized configuration: the web frontend measures, calls [`map_frame`],
//! and writes the resulting styles. No state survives between frames.

use crate::constants::*;
use smallvec::SmallVec;

/// Tunables for the headline rotator, read from data attributes on the
/// wrapper element. Out-of-range or misordered values are absorbed by
/// [`RotatorConfig::sanitized`] rather than rejected.
#[derive(Clone, Copy, Debug)]
pub struct RotatorConfig {
    /// Dampens the track translation rate independently of opacity timing.
    pub speed: f32,
    /// Fraction of section scroll consumed before any visual change.
    pub delay: f32,
    /// Envelope offsets relative to each headline's target progress.
    pub in_start: f32,
    pub in_target: f32,
    pub out_start: f32,
    pub out_end: f32,
    /// Shifts earlier headlines toward a later target so the first headline
    /// stays faint while the pinned section settles in.
    pub first_delay: f32,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            delay: DEFAULT_DELAY,
            in_start: DEFAULT_IN_START_OFFSET,
            in_target: DEFAULT_IN_TARGET_OFFSET,
            out_start: DEFAULT_OUT_START_OFFSET,
            out_end: DEFAULT_OUT_END_OFFSET,
            first_delay: DEFAULT_FIRST_DELAY,
        }
    }
}

impl RotatorConfig {
    /// Clamp every field to its bounded range and restore the ordering
    /// invariant `in_start < in_target < out_start < out_end`, nudging each
    /// later offset at least [`OFFSET_ORDER_EPS`] past the previous one.
    /// Misconfigured inputs can narrow a segment but never invert a ramp.
    pub fn sanitized(self) -> Self {
        let is = self.in_start.clamp(-1.0, 1.0);
        let it = (self.in_target.clamp(-1.0, 1.0)).max(is + OFFSET_ORDER_EPS);
        let os = (self.out_start.clamp(-1.0, 1.0)).max(it + OFFSET_ORDER_EPS);
        let oe = (self.out_end.clamp(-1.0, 1.0)).max(os + OFFSET_ORDER_EPS);
        Self {
            speed: self.speed.clamp(0.0, 1.0),
            delay: self.delay.clamp(0.0, 0.99),
            in_start: is,
            in_target: it,
            out_start: os,
            out_end: oe,
            first_delay: self.first_delay.clamp(0.0, 1.0),
        }
    }
}

/// Per-frame scroll measurements, in CSS pixels. Recomputed on every frame
/// from live layout; never cached.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionGeometry {
    pub scroll_y: f32,
    pub viewport_h: f32,
    pub wrapper_top: f32,
    pub wrapper_h: f32,
    pub element_h: f32,
}

/// Visual state for one headline on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementVisual {
    pub opacity: f32,
    pub scale: f32,
    pub active: bool,
}

/// Output of one mapping pass: a single track translation plus one visual
/// per headline, in track order.
#[derive(Clone, Debug, Default)]
pub struct RotatorFrame {
    pub track_translate_y: f32,
    pub elements: SmallVec<[ElementVisual; 8]>,
}

/// Raw linear progress through the pinned section, in \[0, 1\].
///
/// Content no taller than the viewport has nothing to scroll through, so
/// progress stays 0 for every offset (guarded division).
#[inline]
pub fn section_progress(geom: &SectionGeometry) -> f32 {
    let scrollable = geom.wrapper_h - geom.viewport_h;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let scrolled = (geom.scroll_y - geom.wrapper_top).clamp(0.0, scrollable);
    scrolled / scrollable.max(1.0)
}

/// Hold at 0 until `delay` of the section has scrolled by, then rescale the
/// remainder back to \[0, 1\].
#[inline]
pub fn delayed_progress(progress: f32, delay: f32) -> f32 {
    if progress <= delay {
        0.0
    } else {
        (progress - delay) / (1.0 - delay)
    }
}

/// The progress value at which headline `i` of `n` is fully visible.
///
/// Earlier indices are biased toward later targets, proportionally more for
/// smaller `i`. A single headline centers at 0.5.
#[inline]
pub fn element_target(i: usize, n: usize, first_delay: f32) -> f32 {
    if n <= 1 {
        return 0.5;
    }
    let base = i as f32 / (n - 1) as f32;
    let bias = 1.0 - base;
    (base + first_delay * bias).min(1.0)
}

/// Four-segment piecewise-linear opacity envelope over `rel`, the distance
/// of adjusted progress past the headline's target.
///
/// Boundary convention: both ramps own their left edge and exclude their
/// right edge, and the plateau is closed on both sides --
/// `rel < in_start` is 0, `in_start <= rel < in_target` ramps up,
/// `in_target <= rel <= out_start` holds 1, `out_start < rel < out_end`
/// ramps down, `rel >= out_end` is 0. At `rel == in_start` exactly the
/// ramp-in branch yields 0, so the fade-in edge is seamless.
///
/// Expects a sanitized config; the ordering invariant keeps both ramp
/// denominators at least [`OFFSET_ORDER_EPS`] wide.
pub fn envelope_opacity(rel: f32, cfg: &RotatorConfig) -> f32 {
    let raw = if rel < cfg.in_start {
        0.0
    } else if rel < cfg.in_target {
        (rel - cfg.in_start) / (cfg.in_target - cfg.in_start)
    } else if rel <= cfg.out_start {
        1.0
    } else if rel < cfg.out_end {
        1.0 - (rel - cfg.out_start) / (cfg.out_end - cfg.out_start)
    } else {
        0.0
    };
    // slight easing and clamp
    raw.powf(OPACITY_EASE_EXPONENT).clamp(0.0, 1.0)
}

/// Map one frame of scroll state to visual state for `count` headlines.
///
/// Pure: identical inputs produce identical outputs, and nothing outside the
/// returned [`RotatorFrame`] is touched. The config is re-sanitized here so
/// callers cannot feed an inverted envelope through.
pub fn map_frame(geom: &SectionGeometry, cfg: &RotatorConfig, count: usize) -> RotatorFrame {
    let cfg = cfg.sanitized();
    let progress = section_progress(geom);
    let adj = delayed_progress(progress, cfg.delay);

    let span = count.saturating_sub(1) as f32;
    let track_translate_y = -adj * span * geom.element_h * cfg.speed;

    let mut elements = SmallVec::with_capacity(count);
    for i in 0..count {
        let target = element_target(i, count, cfg.first_delay);
        let rel = adj - target;
        let opacity = envelope_opacity(rel, &cfg);
        elements.push(ElementVisual {
            opacity,
            scale: 1.0 + SCALE_SPAN * opacity,
            active: opacity > ACTIVE_OPACITY_THRESHOLD,
        });
    }

    RotatorFrame {
        track_translate_y,
        elements,
    }
}
