//! Table state and core simulation types
//!
//! Everything the frame pipeline touches lives in one `Table`, mutated through
//! `&mut` by input handlers and the physics step.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::plunger::{Lane, Plunger};
use super::segment::Segment;
use crate::direction_deg;
use crate::settings::Tuning;

/// Axis-aligned playfield boundary (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Board {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Board {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Board inset into a `width` x `height` surface by `padding` of the smaller side
    pub fn from_surface(width: f32, height: f32, padding: f32) -> Self {
        let pad = width.min(height) * padding;
        Self::new(pad, pad, width - pad, height - pad)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn min_dim(&self) -> f32 {
        self.width().min(self.height())
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Seat the ball at rest at the bottom of the plunger lane
    pub fn reset_in_lane(&mut self, board: &Board, lane: &Lane, tuning: &Tuning) {
        self.radius = (board.min_dim() * tuning.ball_radius).max(0.0);
        self.pos = Vec2::new(lane.center_x(), board.bottom - self.radius * tuning.ball_rest_radii);
        self.vel = Vec2::ZERO;
    }
}

/// Which flipper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn rest_deg(&self, tuning: &Tuning) -> f32 {
        match self {
            Side::Left => tuning.left_rest_deg,
            Side::Right => tuning.right_rest_deg,
        }
    }

    pub fn flipped_deg(&self, tuning: &Tuning) -> f32 {
        match self {
            Side::Left => tuning.left_flipped_deg,
            Side::Right => tuning.right_flipped_deg,
        }
    }

    /// Pivot x, inset from this side's vertical edge
    pub fn pivot_x(&self, board: &Board, inset: f32) -> f32 {
        let offset = board.width() * inset;
        match self {
            Side::Left => board.left + offset,
            Side::Right => board.right - offset,
        }
    }
}

/// A flipper: a thick segment pivoting between two fixed angles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pivot: Vec2,
    pub length: f32,
    pub thickness: f32,
    /// Angle at rest (degrees)
    pub rest_deg: f32,
    /// Angle while actuated (degrees)
    pub flipped_deg: f32,
    /// Set by input, read by physics
    pub flipped: bool,
    /// Current centerline, refreshed by `update`
    pub segment: Segment,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pivot: Vec2::ZERO,
            length: 0.0,
            thickness: 0.0,
            rest_deg: 0.0,
            flipped_deg: 0.0,
            flipped: false,
            segment: Segment::default(),
        }
    }

    /// Derive pivot, size and angles from the board, then refresh endpoints
    pub fn configure(&mut self, board: &Board, tuning: &Tuning) {
        self.thickness = board.min_dim() * tuning.paddle_thickness;
        self.length = board.width() * tuning.paddle_length;
        self.pivot = Vec2::new(
            self.side.pivot_x(board, tuning.paddle_pivot_inset),
            board.top + board.height() * tuning.paddle_pivot_height,
        );
        self.rest_deg = self.side.rest_deg(tuning);
        self.flipped_deg = self.side.flipped_deg(tuning);
        self.update();
    }

    /// The configured angle selected by flip-state
    #[inline]
    pub fn angle_deg(&self) -> f32 {
        if self.flipped {
            self.flipped_deg
        } else {
            self.rest_deg
        }
    }

    /// Recompute endpoints from the current angle
    pub fn update(&mut self) {
        let dir = direction_deg(self.angle_deg());
        self.segment = Segment::from_direction(self.pivot, dir, self.length);
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.segment.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.segment.end
    }

    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        self.segment.nearest_point(p)
    }
}

/// The whole table
#[derive(Debug, Clone)]
pub struct Table {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub board: Board,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub plunger: Plunger,
    /// Physics steps taken since creation
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl Table {
    /// Create an unsized table; call `configure` or `on_size_changed` before stepping
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            board: Board::default(),
            ball: Ball::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            plunger: Plunger::default(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Host surface resized: pad the board, then lay everything out again
    pub fn on_size_changed(&mut self, width: f32, height: f32) {
        let board = Board::from_surface(width, height, self.tuning.board_padding);
        log::info!(
            "Resize {}x{} -> board ({:.1}, {:.1}, {:.1}, {:.1})",
            width,
            height,
            board.left,
            board.top,
            board.right,
            board.bottom
        );
        self.configure(board);
    }

    /// Adopt `board`: reset the ball into the lane and reconfigure both paddles
    pub fn configure(&mut self, board: Board) {
        self.board = board;
        let lane = self.lane();
        self.ball.reset_in_lane(&self.board, &lane, &self.tuning);
        self.plunger.configure(&self.board, &self.tuning);
        self.left.configure(&self.board, &self.tuning);
        self.right.configure(&self.board, &self.tuning);
    }

    /// The plunger lane for the current board
    pub fn lane(&self) -> Lane {
        Lane::for_board(&self.board, &self.tuning)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Gravity in pixels per second² for the current board
    #[inline]
    pub fn gravity(&self) -> f32 {
        self.tuning.gravity * self.board.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let mut table = Table::new(1, Tuning::default());
        table.configure(Board::new(0.0, 0.0, 1000.0, 1500.0));
        table
    }

    #[test]
    fn test_board_from_surface_padding() {
        let board = Board::from_surface(1000.0, 2000.0, 0.06);
        assert_eq!(board, Board::new(60.0, 60.0, 940.0, 1940.0));
        assert_eq!(board.width(), 880.0);
        assert_eq!(board.height(), 1880.0);
    }

    #[test]
    fn test_ball_reset_in_lane() {
        let table = table();
        assert!((table.ball.radius - 25.0).abs() < 1e-4);
        assert!((table.ball.pos.x - 925.0).abs() < 1e-3);
        assert!((table.ball.pos.y - (1500.0 - 2.2 * 25.0)).abs() < 1e-3);
        assert_eq!(table.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_paddle_configure_layout() {
        let table = table();
        let left = &table.left;
        assert!((left.thickness - 20.0).abs() < 1e-4);
        assert!((left.length - 220.0).abs() < 1e-3);
        assert!((left.pivot - Vec2::new(120.0, 1230.0)).length() < 1e-3);
        assert_eq!(left.angle_deg(), -25.0);

        let right = &table.right;
        assert!((right.pivot - Vec2::new(880.0, 1230.0)).length() < 1e-3);
        assert_eq!(right.angle_deg(), 205.0);

        // Rest paddles point up and in toward the middle
        assert!(left.end().x > left.start().x && left.end().y < left.start().y);
        assert!(right.end().x < right.start().x && right.end().y < right.start().y);
        assert!((left.segment.length() - 220.0).abs() < 1e-2);
    }

    #[test]
    fn test_paddle_update_follows_flip_state() {
        let mut table = table();
        let rest_end = table.left.end();

        table.left.flipped = true;
        table.left.update();
        assert_eq!(table.left.angle_deg(), -65.0);
        assert_ne!(table.left.end(), rest_end);
        assert_eq!(table.left.start(), table.left.pivot);

        table.left.flipped = false;
        table.left.update();
        assert!((table.left.end() - rest_end).length() < 1e-4);
    }

    #[test]
    fn test_configure_is_idempotent() {
        let mut table = table();
        let left = table.left;
        let ball = table.ball;
        table.configure(Board::new(0.0, 0.0, 1000.0, 1500.0));
        assert_eq!(table.left, left);
        assert_eq!(table.ball, ball);
    }

    #[test]
    fn test_degenerate_surface_does_not_panic() {
        let mut table = Table::new(3, Tuning::default());
        table.on_size_changed(0.0, 0.0);
        assert_eq!(table.ball.radius, 0.0);
        assert!(table.ball.pos.is_finite());
        assert!(table.left.end().is_finite());
    }
}
