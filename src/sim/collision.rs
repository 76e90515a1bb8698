//! Collision detection and response
//!
//! Walls are perfectly elastic. Paddles are thick segments with a restitution
//! above one, plus an extra kick along the contact normal while actuated.

use glam::Vec2;

use super::state::{Ball, Board, Paddle};
use crate::normalize_floored;
use crate::settings::Tuning;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Nearest point on the obstacle
    pub point: Vec2,
    /// Contact normal (pointing toward the ball center)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a ball against a paddle's thick segment
///
/// Contact when the center is within `radius + thickness / 2` of the centerline.
/// The normal divides by at least `min_dist`, so a ball centered exactly on the
/// segment gets a zero normal instead of NaN.
pub fn ball_paddle_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    paddle: &Paddle,
    min_dist: f32,
) -> CollisionResult {
    let nearest = paddle.nearest_point(ball_pos);
    let offset = ball_pos - nearest;
    let dist = offset.length();
    let reach = ball_radius + paddle.thickness / 2.0;

    if dist > reach {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: nearest,
        normal: normalize_floored(offset, min_dist),
        penetration: reach - dist,
    }
}

/// Which board edges the ball crossed during containment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Keep the ball inside the board
///
/// A crossed edge clamps the position to edge ± radius and forces the matching
/// velocity component to point back inside. No energy is lost.
pub fn contain_in_board(ball: &mut Ball, board: &Board) -> WallContacts {
    let mut contacts = WallContacts::default();
    let r = ball.radius;

    if ball.pos.x - r < board.left {
        ball.pos.x = board.left + r;
        ball.vel.x = ball.vel.x.abs();
        contacts.left = true;
    }
    if ball.pos.x + r > board.right {
        ball.pos.x = board.right - r;
        ball.vel.x = -ball.vel.x.abs();
        contacts.right = true;
    }
    if ball.pos.y - r < board.top {
        ball.pos.y = board.top + r;
        ball.vel.y = ball.vel.y.abs();
        contacts.top = true;
    }
    if ball.pos.y + r > board.bottom {
        ball.pos.y = board.bottom - r;
        ball.vel.y = -ball.vel.y.abs();
        contacts.bottom = true;
    }

    contacts
}

/// Resolve contact between the ball and one paddle
///
/// Only a ball moving into the paddle is affected: its normal velocity is
/// reflected with `tuning.bounce`, it is pushed out of the paddle, and an
/// actuated paddle adds a kick proportional to the board height.
/// Returns true when a response was applied.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    board: &Board,
    tuning: &Tuning,
) -> bool {
    let contact = ball_paddle_collision(ball.pos, ball.radius, paddle, tuning.min_contact_dist);
    if !contact.hit {
        return false;
    }

    let n = contact.normal;
    let relative_speed = ball.vel.dot(n);
    if relative_speed >= 0.0 {
        return false;
    }

    ball.vel -= (1.0 + tuning.bounce) * relative_speed * n;
    ball.pos += n * contact.penetration;

    if paddle.flipped {
        let boost = board.height() * tuning.flip_boost * tuning.flip_boost_scale;
        ball.vel += n * boost;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;
    use crate::sim::segment::Segment;
    use proptest::prelude::*;

    fn board() -> Board {
        Board::new(0.0, 0.0, 1000.0, 1500.0)
    }

    /// Horizontal paddle from (400, 1000) to (600, 1000), 20 thick
    fn flat_paddle(flipped: bool) -> Paddle {
        let mut paddle = Paddle::new(Side::Left);
        paddle.pivot = Vec2::new(400.0, 1000.0);
        paddle.thickness = 20.0;
        paddle.length = 200.0;
        paddle.flipped = flipped;
        paddle.segment = Segment::new(Vec2::new(400.0, 1000.0), Vec2::new(600.0, 1000.0));
        paddle
    }

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 25.0,
        }
    }

    #[test]
    fn test_paddle_contact_detection() {
        let paddle = flat_paddle(false);

        // 30 above the centerline: within 25 + 10
        let result = ball_paddle_collision(Vec2::new(500.0, 970.0), 25.0, &paddle, 0.001);
        assert!(result.hit);
        assert_eq!(result.point, Vec2::new(500.0, 1000.0));
        assert!((result.normal - Vec2::new(0.0, -1.0)).length() < 1e-6);
        assert!((result.penetration - 5.0).abs() < 1e-4);

        // Exactly at reach still counts
        let result = ball_paddle_collision(Vec2::new(500.0, 965.0), 25.0, &paddle, 0.001);
        assert!(result.hit);

        let result = ball_paddle_collision(Vec2::new(500.0, 960.0), 25.0, &paddle, 0.001);
        assert!(!result.hit);
    }

    #[test]
    fn test_ball_on_centerline_has_zero_normal() {
        let paddle = flat_paddle(false);
        let result = ball_paddle_collision(Vec2::new(500.0, 1000.0), 25.0, &paddle, 0.001);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::ZERO);
        assert!(result.normal.is_finite());
    }

    #[test]
    fn test_resting_paddle_bounce() {
        let paddle = flat_paddle(false);
        let mut b = ball(500.0, 970.0, 0.0, 100.0);

        assert!(resolve_paddle_collision(&mut b, &paddle, &board(), &Tuning::default()));
        // vy' = vy - (1 + 1.05) * vy = -1.05 * vy
        assert!((b.vel.y - (-105.0)).abs() < 1e-3);
        assert!(b.vel.x.abs() < 1e-6);
        // Pushed out to exactly touching
        assert!((b.pos.y - 965.0).abs() < 1e-3);
    }

    #[test]
    fn test_flipped_paddle_adds_boost() {
        let paddle = flat_paddle(true);
        let mut b = ball(500.0, 970.0, 0.0, 100.0);

        assert!(resolve_paddle_collision(&mut b, &paddle, &board(), &Tuning::default()));
        // Boost = 1500 * 0.45 * 0.02 = 13.5 along the upward normal
        assert!((b.vel.y - (-105.0 - 13.5)).abs() < 1e-3);
    }

    #[test]
    fn test_ball_moving_away_is_untouched() {
        let paddle = flat_paddle(true);
        let mut b = ball(500.0, 970.0, 20.0, -100.0);
        let before = b;

        assert!(!resolve_paddle_collision(&mut b, &paddle, &board(), &Tuning::default()));
        assert_eq!(b, before);
    }

    #[test]
    fn test_ball_sliding_along_paddle_is_untouched() {
        let paddle = flat_paddle(false);
        let mut b = ball(500.0, 970.0, 100.0, 0.0);
        let before = b;

        assert!(!resolve_paddle_collision(&mut b, &paddle, &board(), &Tuning::default()));
        assert_eq!(b, before);
    }

    #[test]
    fn test_endpoint_contact_uses_diagonal_normal() {
        let paddle = flat_paddle(false);
        // Up and to the right of the tip, heading back toward it
        let mut b = ball(620.0, 980.0, -50.0, 50.0);

        assert!(resolve_paddle_collision(&mut b, &paddle, &board(), &Tuning::default()));
        // Reflected away from the tip on both axes
        assert!(b.vel.x > 0.0);
        assert!(b.vel.y < 0.0);
    }

    #[test]
    fn test_left_wall_bounce_is_elastic() {
        let mut b = ball(10.0, 700.0, -300.0, 40.0);
        let contacts = contain_in_board(&mut b, &board());

        assert!(contacts.left && !contacts.right && !contacts.top && !contacts.bottom);
        assert_eq!(b.pos.x, 25.0);
        assert_eq!(b.vel.x, 300.0);
        assert_eq!(b.vel.y, 40.0);
    }

    #[test]
    fn test_corner_hits_two_walls() {
        let mut b = ball(990.0, 1495.0, 50.0, 80.0);
        let contacts = contain_in_board(&mut b, &board());

        assert!(contacts.right && contacts.bottom);
        assert_eq!(b.pos, Vec2::new(975.0, 1475.0));
        assert_eq!(b.vel, Vec2::new(-50.0, -80.0));
    }

    #[test]
    fn test_inside_ball_untouched() {
        let mut b = ball(500.0, 700.0, -300.0, 40.0);
        let before = b;
        let contacts = contain_in_board(&mut b, &board());
        assert!(!contacts.any());
        assert_eq!(b, before);
    }

    proptest! {
        #[test]
        fn prop_containment_keeps_ball_inside(
            x in -2000.0f32..3000.0,
            y in -2000.0f32..3500.0,
            vx in -5000.0f32..5000.0,
            vy in -5000.0f32..5000.0,
            r in 0.0f32..100.0,
        ) {
            let board = board();
            let mut b = Ball { pos: Vec2::new(x, y), vel: Vec2::new(vx, vy), radius: r };
            let contacts = contain_in_board(&mut b, &board);

            prop_assert!(b.pos.x - r >= board.left - 1e-3);
            prop_assert!(b.pos.x + r <= board.right + 1e-3);
            prop_assert!(b.pos.y - r >= board.top - 1e-3);
            prop_assert!(b.pos.y + r <= board.bottom + 1e-3);

            // Speed is preserved and only crossed axes change sign
            prop_assert_eq!(b.vel.x.abs(), vx.abs());
            prop_assert_eq!(b.vel.y.abs(), vy.abs());
            if !(contacts.left || contacts.right) {
                prop_assert_eq!(b.vel.x, vx);
            }
            if !(contacts.top || contacts.bottom) {
                prop_assert_eq!(b.vel.y, vy);
            }
            if contacts.left {
                prop_assert!(b.vel.x >= 0.0);
            }
            if contacts.bottom {
                prop_assert!(b.vel.y <= 0.0);
            }
        }
    }
}
