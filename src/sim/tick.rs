//! Per-frame physics step
//!
//! Stage order matters: each stage consumes the previous stage's output.

use super::collision::{contain_in_board, resolve_paddle_collision};
use super::state::{Ball, Table};

/// Gravity, damping and position update for one step
pub fn integrate(ball: &mut Ball, gravity: f32, damping: f32, dt: f32) {
    ball.vel.y += gravity * dt;
    ball.vel *= damping;
    ball.pos += ball.vel * dt;
}

/// Advance the table by `dt` seconds
///
/// No substeps: a fast ball can pass through a paddle at a low frame rate.
/// Negative `dt` is treated as zero.
pub fn tick(table: &mut Table, dt: f32) {
    let dt = dt.max(0.0);
    table.time_ticks += 1;

    let gravity = table.gravity();
    let damping = table.tuning.damping_factor(dt);
    integrate(&mut table.ball, gravity, damping, dt);

    let walls = contain_in_board(&mut table.ball, &table.board);
    if walls.any() {
        log::trace!("Wall contact {:?} at tick {}", walls, table.time_ticks);
    }

    table.left.update();
    table.right.update();

    for paddle in [&table.left, &table.right] {
        if resolve_paddle_collision(&mut table.ball, paddle, &table.board, &table.tuning) {
            log::trace!(
                "{} paddle hit (flipped: {}) -> vel {:?}",
                paddle.side.as_str(),
                paddle.flipped,
                table.ball.vel
            );
        }
    }
}

/// Speed of the ball, for hosts that shade by velocity
#[inline]
pub fn ball_speed(table: &Table) -> f32 {
    table.ball.vel.length()
}
