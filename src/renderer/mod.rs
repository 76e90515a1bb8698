//! Draw pass
//!
//! Turns a `RenderState` into a colored triangle list. The host owns the actual
//! surface (canvas, wgpu, a test harness) and only uploads the vertices.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, as_bytes, as_floats, colors};

use crate::frame::RenderState;

/// Board outline stroke width in pixels
pub const BOARD_STROKE: f32 = 12.0;
/// Lane guide stroke width in pixels
pub const GUIDE_STROKE: f32 = 4.0;
/// Plunger block height, fraction of board height
pub const PLUNGER_HEIGHT: f32 = 0.18;
/// Plunger block inset from each lane wall, fraction of lane width
pub const PLUNGER_INSET: f32 = 0.2;

const BALL_SEGMENTS: u32 = 32;

/// The plunger block: bottom-anchored, its top sinking as pull grows
pub fn plunger_rect(state: &RenderState) -> (Vec2, Vec2) {
    let board = &state.board;
    let lane_width = board.right - state.lane_left;
    let height = board.height() * PLUNGER_HEIGHT;
    let top = board.bottom - height + state.plunger_pull;
    (
        Vec2::new(state.lane_left + lane_width * PLUNGER_INSET, top),
        Vec2::new(board.right - lane_width * PLUNGER_INSET, board.bottom),
    )
}

/// Build the full frame, back to front: board, lane, plunger, paddles, ball
pub fn build_scene(state: &RenderState) -> Vec<Vertex> {
    let board = &state.board;
    let mut vertices = Vec::with_capacity(512);

    vertices.extend(shapes::rect_outline(
        Vec2::new(board.left, board.top),
        Vec2::new(board.right, board.bottom),
        BOARD_STROKE,
        colors::BOARD,
    ));
    vertices.extend(shapes::rect_outline(
        Vec2::new(state.lane_left, board.top),
        Vec2::new(board.right, board.bottom),
        GUIDE_STROKE,
        colors::GUIDE,
    ));

    let (plunger_min, plunger_max) = plunger_rect(state);
    vertices.extend(shapes::rect(plunger_min, plunger_max, colors::PLUNGER));

    for paddle in &state.paddles {
        vertices.extend(shapes::thick_line(
            paddle.start,
            paddle.end,
            paddle.thickness,
            colors::PADDLE,
        ));
    }

    vertices.extend(shapes::circle(
        state.ball_pos,
        state.ball_radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices
}
