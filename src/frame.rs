//! Frame driver and render snapshot
//!
//! The host calls `FrameDriver::frame` once per display refresh; the driver
//! turns wall-clock milliseconds into a clamped dt, steps the table and hands
//! back what to draw.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Tuning;
use crate::sim::{Board, Side, Table, tick};

/// A paddle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
    pub flipped: bool,
}

/// Everything a draw pass reads, captured after the physics step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub board: Board,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub paddles: [PaddleView; 2],
    pub lane_left: f32,
    pub plunger_pull: f32,
    pub plunger_held: bool,
}

impl RenderState {
    pub fn capture(table: &Table) -> Self {
        let view = |side: Side| {
            let paddle = table.paddle(side);
            PaddleView {
                side,
                start: paddle.start(),
                end: paddle.end(),
                thickness: paddle.thickness,
                flipped: paddle.flipped,
            }
        };

        Self {
            board: table.board,
            ball_pos: table.ball.pos,
            ball_radius: table.ball.radius,
            paddles: [view(Side::Left), view(Side::Right)],
            lane_left: table.lane().left,
            plunger_pull: table.plunger.pull,
            plunger_held: table.plunger.held,
        }
    }
}

/// Turns display ticks into physics steps
#[derive(Debug, Clone)]
pub struct FrameDriver {
    last_frame_ms: u64,
    attached: bool,
    max_frame_ms: u64,
    frames: u64,
}

impl FrameDriver {
    pub fn new(max_frame_ms: u64) -> Self {
        Self {
            last_frame_ms: 0,
            attached: false,
            max_frame_ms,
            frames: 0,
        }
    }

    /// A driver capped at the tuning's `max_frame_ms`
    pub fn for_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.max_frame_ms)
    }

    /// Start receiving frames; the first dt is measured from `now_ms`
    pub fn attach(&mut self, now_ms: u64) {
        self.last_frame_ms = now_ms;
        self.attached = true;
        log::info!("Frame loop attached at {} ms", now_ms);
    }

    /// Stop stepping; frames are ignored until the next `attach`
    pub fn detach(&mut self) {
        if self.attached {
            log::info!("Frame loop detached after {} frames", self.frames);
        }
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Frames stepped since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds since the previous frame, capped at `max_frame_ms`
    ///
    /// A clock that steps backwards yields zero.
    pub fn next_dt(&mut self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.last_frame_ms).min(self.max_frame_ms);
        self.last_frame_ms = now_ms;
        elapsed as f32 / 1000.0
    }

    /// Step `table` for the display tick at `now_ms` and capture the result
    ///
    /// Returns `None` while detached.
    pub fn frame(&mut self, table: &mut Table, now_ms: u64) -> Option<RenderState> {
        if !self.attached {
            return None;
        }

        let dt = self.next_dt(now_ms);
        tick(table, dt);
        self.frames += 1;
        Some(RenderState::capture(table))
    }
}
