//! Pointer input mapping
//!
//! Every pointer collapses onto the same global intent: a flip-state per paddle
//! and a single plunger. The pointer id is carried but not used.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Side, Table};

/// Pointer lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Treated exactly like `Up`
    Cancel,
}

/// A pointer event in board-relative pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub id: u32,
    pub phase: PointerPhase,
    pub pos: Vec2,
}

impl PointerEvent {
    pub fn new(id: u32, phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            id,
            phase,
            pos: Vec2::new(x, y),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(0, PointerPhase::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(0, PointerPhase::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(0, PointerPhase::Up, x, y)
    }
}

impl Table {
    /// Apply one pointer event
    ///
    /// Down in the lane grabs the plunger, otherwise it flips the paddle on that
    /// half of the board. Any up or cancel releases the plunger (if held) and
    /// drops both paddles.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event.pos),
            PointerPhase::Move => self.plunger.drag_to(event.pos.y, &self.board),
            PointerPhase::Up | PointerPhase::Cancel => self.pointer_up(),
        }
    }

    fn pointer_down(&mut self, pos: Vec2) {
        if self.lane().captures_pointer(pos) {
            log::debug!("Plunger grabbed at {:?}", pos);
            self.plunger.grab();
        } else if pos.x < self.board.center_x() {
            self.paddle_mut(Side::Left).flipped = true;
        } else {
            self.paddle_mut(Side::Right).flipped = true;
        }
    }

    fn pointer_up(&mut self) {
        if self.plunger.held {
            let lane = self.lane();
            self.plunger.release(&mut self.ball, &lane, &self.tuning, &mut self.rng);
        }
        self.left.flipped = false;
        self.right.flipped = false;
    }
}
