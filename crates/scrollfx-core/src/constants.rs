// Shared tuning constants for the scroll-driven effects. The web frontend
// reads overrides from data attributes; these are the documented defaults.

// Headline rotator defaults
pub const DEFAULT_SPEED: f32 = 0.5; // dampens track translation (0..1)
pub const DEFAULT_DELAY: f32 = 0.3; // fraction of scroll consumed before anything moves
pub const DEFAULT_IN_START_OFFSET: f32 = -0.1;
pub const DEFAULT_IN_TARGET_OFFSET: f32 = 0.04;
pub const DEFAULT_OUT_START_OFFSET: f32 = 0.2;
pub const DEFAULT_OUT_END_OFFSET: f32 = 0.4;
pub const DEFAULT_FIRST_DELAY: f32 = 0.1; // extra target bias for early headlines

// Envelope shaping
pub const OPACITY_EASE_EXPONENT: f32 = 1.02;
pub const SCALE_SPAN: f32 = 0.06; // scale = 1 + SCALE_SPAN * opacity
pub const ACTIVE_OPACITY_THRESHOLD: f32 = 0.02;
pub const OFFSET_ORDER_EPS: f32 = 0.001; // minimum gap between envelope offsets

// Card stack timeline (per card: leave the stack, then swipe off-screen)
pub const LEAVE_DURATION: f32 = 1.0;
pub const SWIPE_DURATION: f32 = 0.45;
pub const CARD_LEAVE_BASE_PX: f32 = 220.0;
pub const CARD_LEAVE_STEP_PX: f32 = 40.0;
pub const OFFSCREEN_MIN_WIDTH_PX: f32 = 800.0;
pub const OFFSCREEN_FACTOR: f32 = 1.2;

// Scroll span the stack is pinned over, in viewport heights per card
pub const DESKTOP_SCROLL_MULTIPLIER: f32 = 0.7;
pub const MOBILE_SCROLL_MULTIPLIER: f32 = 0.25;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Cursor tilt
pub const MAX_ROTATE_Y_DEG: f32 = 12.0;
pub const MAX_ROTATE_X_DEG: f32 = 8.0;
pub const MAX_CARD_OFFSET_PX: f32 = 22.0;
pub const CARD_DEPTH_FACTOR: f32 = 0.2;
pub const TILT_SMOOTH_FACTOR: f32 = 0.15; // lower = smoother but slower response
pub const TILT_SETTLE_EPS_DEG: f32 = 0.01;

// Smooth anchor scrolling
pub const DEFAULT_SCROLL_DURATION_MS: f32 = 1000.0;
