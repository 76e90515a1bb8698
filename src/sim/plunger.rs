//! Plunger lane and launch impulse
//!
//! Drag distance sets launch energy; the ball only receives it when it is
//! seated at the bottom of the lane.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Board};
use crate::settings::Tuning;

/// The launch lane along the right edge of the board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub left: f32,
    pub right: f32,
    /// Pointer-downs at or below this y grab the plunger
    pub grab_top: f32,
    /// The ball must be strictly below this y to be launched
    pub seat_top: f32,
}

impl Lane {
    pub fn for_board(board: &Board, tuning: &Tuning) -> Self {
        Self {
            left: board.right - board.width() * tuning.lane_width,
            right: board.right,
            grab_top: board.bottom - board.height() * tuning.lane_grab_height,
            seat_top: board.bottom - board.height() * tuning.lane_seat_height,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.left + self.width() / 2.0
    }

    /// Whether a pointer-down at `p` grabs the plunger
    pub fn captures_pointer(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.grab_top
    }

    /// Whether a ball centered at `p` sits in the launch position
    pub fn seats_ball(&self, p: Vec2) -> bool {
        p.x > self.left && p.y > self.seat_top
    }
}

/// Plunger pull state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Plunger {
    /// Current pull distance in pixels, 0..=max_pull
    pub pull: f32,
    pub held: bool,
    /// Longest pull for the current board
    pub max_pull: f32,
}

impl Plunger {
    /// Size the pull range for `board`
    pub fn configure(&mut self, board: &Board, tuning: &Tuning) {
        self.max_pull = (board.height() * tuning.max_pull).max(0.0);
        self.pull = self.pull.min(self.max_pull);
    }

    /// Start holding with zero pull
    pub fn grab(&mut self) {
        self.held = true;
        self.pull = 0.0;
    }

    /// Track a drag to `y`: pull is how far above the board bottom the pointer is
    pub fn drag_to(&mut self, y: f32, board: &Board) {
        if self.held {
            self.pull = (board.bottom - y).clamp(0.0, self.max_pull);
        }
    }

    /// Let go of the plunger
    ///
    /// A seated ball is snapped to the lane center and kicked upward by
    /// `pull * launch_impulse`, plus a lateral jitter drawn from `rng`.
    /// Returns the velocity change, or `None` if the ball was not seated.
    pub fn release<R: Rng>(
        &mut self,
        ball: &mut Ball,
        lane: &Lane,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Vec2> {
        let pull = self.pull;
        self.held = false;
        self.pull = 0.0;

        if !lane.seats_ball(ball.pos) {
            log::debug!("Plunger released with ball out of lane at {:?}", ball.pos);
            return None;
        }

        let jitter = (rng.random::<f32>() - 0.5) * tuning.launch_jitter;
        let delta = Vec2::new(jitter, -pull * tuning.launch_impulse);
        ball.pos.x = lane.center_x();
        ball.vel += delta;
        log::debug!("Launch: pull {:.1}, dv ({:.1}, {:.1})", pull, delta.x, delta.y);
        Some(delta)
    }
}
