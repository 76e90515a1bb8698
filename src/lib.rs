//! Pinball - a single-ball flipper table
//!
//! Core modules:
//! - `sim`: Table simulation (integration, collisions, plunger, input mapping)
//! - `frame`: Frame driver and the per-frame render snapshot
//! - `renderer`: Render snapshot to triangle vertices
//! - `platform`: Clock and wasm host binding
//! - `settings`: Data-driven table tuning

pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame::{FrameDriver, RenderState};
pub use settings::{DampingMode, Settings, Tuning};
pub use sim::{Board, PointerEvent, PointerPhase, Side, Table};

use glam::Vec2;

/// Table layout and physics defaults
///
/// Every length is a fraction of the board so behavior scales with the screen.
pub mod consts {
    /// Board inset from the host surface, fraction of min(width, height)
    pub const BOARD_PADDING: f32 = 0.06;

    /// Ball radius, fraction of min board dimension
    pub const BALL_RADIUS: f32 = 0.025;
    /// Ball resting height above the board bottom, in radii
    pub const BALL_REST_RADII: f32 = 2.2;

    /// Paddle thickness, fraction of min board dimension
    pub const PADDLE_THICKNESS: f32 = 0.02;
    /// Paddle arm length, fraction of board width
    pub const PADDLE_LENGTH: f32 = 0.22;
    /// Pivot inset from the near vertical edge, fraction of board width
    pub const PADDLE_PIVOT_INSET: f32 = 0.12;
    /// Pivot height from the top, fraction of board height
    pub const PADDLE_PIVOT_HEIGHT: f32 = 0.82;
    /// Left paddle angles in degrees (0° along +x, y down)
    pub const LEFT_REST_DEG: f32 = -25.0;
    pub const LEFT_FLIPPED_DEG: f32 = -65.0;
    /// Right paddle angles in degrees
    pub const RIGHT_REST_DEG: f32 = 205.0;
    pub const RIGHT_FLIPPED_DEG: f32 = 245.0;

    /// Plunger lane width, fraction of board width
    pub const LANE_WIDTH: f32 = 0.15;
    /// Height of the lane region that captures pointer input, fraction of board height
    pub const LANE_GRAB_HEIGHT: f32 = 0.35;
    /// Ball must sit below this fraction of board height (from the bottom) to launch
    pub const LANE_SEAT_HEIGHT: f32 = 0.22;
    /// Maximum plunger pull, fraction of board height
    pub const MAX_PULL: f32 = 0.16;
    /// Vertical launch impulse per pixel of pull
    pub const LAUNCH_IMPULSE: f32 = 10.0;
    /// Lateral jitter amplitude applied on launch (uniform in ±half of this)
    pub const LAUNCH_JITTER: f32 = 150.0;

    /// Gravity, board heights per second²
    pub const GRAVITY: f32 = 1.2;
    /// Per-frame velocity damping
    pub const DAMPING: f32 = 0.998;
    /// Paddle restitution (> 1 adds energy)
    pub const BOUNCE: f32 = 1.05;
    /// Active flipper kick, fraction of board height, scaled by `FLIP_BOOST_SCALE`
    pub const FLIP_BOOST: f32 = 0.45;
    pub const FLIP_BOOST_SCALE: f32 = 0.02;
    /// Floor on contact distance when normalizing the collision normal
    pub const MIN_CONTACT_DIST: f32 = 0.001;

    /// Largest frame step in milliseconds
    pub const MAX_FRAME_MS: u64 = 32;
    /// Squared length below which a segment is treated as a point
    pub const SEGMENT_EPSILON: f32 = 0.0001;
}

/// Unit direction for an angle in degrees (0° along +x, screen y down)
#[inline]
pub fn direction_deg(angle_deg: f32) -> Vec2 {
    let angle = angle_deg.to_radians();
    Vec2::new(angle.cos(), angle.sin())
}

/// Normalize `v`, dividing by at least `floor` so a zero vector stays finite
#[inline]
pub fn normalize_floored(v: Vec2, floor: f32) -> Vec2 {
    v / v.length().max(floor)
}
