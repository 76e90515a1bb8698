//! Table simulation module
//!
//! All table logic lives here:
//! - Per-frame step driven by an external dt
//! - Seeded RNG owned by the table
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod plunger;
pub mod segment;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, WallContacts, ball_paddle_collision, contain_in_board,
    resolve_paddle_collision,
};
pub use input::{PointerEvent, PointerPhase};
pub use plunger::{Lane, Plunger};
pub use segment::{Segment, nearest_point_on_segment};
pub use state::{Ball, Board, Paddle, Side, Table};
pub use tick::{integrate, tick};
