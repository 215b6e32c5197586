//! Collision detection and response
//!
//! All shapes are axis-aligned: the ball is a square, paddles are rectangles,
//! and the court has hard top and bottom walls.

use super::state::{Ball, Side};
use crate::consts::*;

/// Lowest legal ball top edge
pub const BALL_MAX_Y: f32 = SURFACE_HEIGHT - BALL_SIZE;

/// Bounce the ball off the top or bottom wall
///
/// Flips vertical velocity and snaps the ball onto the wall it crossed so it
/// can't tunnel through or stick. Returns true on a hit.
pub fn bounce_off_walls(ball: &mut Ball) -> bool {
    if ball.pos.y <= 0.0 || ball.pos.y >= BALL_MAX_Y {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = if ball.pos.y <= 0.0 { 0.0 } else { BALL_MAX_Y };
        true
    } else {
        false
    }
}

/// Ball's vertical extent overlaps the paddle's (edges inclusive)
#[inline]
pub fn overlaps_paddle(ball_y: f32, paddle_y: f32) -> bool {
    ball_y + BALL_SIZE >= paddle_y && ball_y <= paddle_y + PADDLE_HEIGHT
}

/// Ball has reached the paddle face on `side` and overlaps it vertically
pub fn touches_paddle(ball: &Ball, side: Side, paddle_y: f32) -> bool {
    let reached = match side {
        Side::Left => ball.pos.x <= LEFT_PADDLE_FACE,
        Side::Right => ball.pos.x + BALL_SIZE >= RIGHT_PADDLE_FACE,
    };
    reached && overlaps_paddle(ball.pos.y, paddle_y)
}

/// Deflection law: outgoing vertical velocity from the hit position
///
/// `hit` is 0 at the paddle's top edge and 1 at its bottom edge (measured at
/// the ball's center), mapped linearly onto [-2, 2].
pub fn deflect(ball_y: f32, paddle_y: f32) -> f32 {
    let hit = (ball_y + BALL_SIZE / 2.0 - paddle_y) / PADDLE_HEIGHT;
    (hit - 0.5) * DEFLECTION_SCALE
}

/// Send the ball away from the paddle on `side`
///
/// Horizontal speed keeps its magnitude; vertical speed comes from `deflect`.
pub fn paddle_response(ball: &mut Ball, side: Side, paddle_y: f32) {
    ball.vel.x = match side {
        Side::Left => ball.vel.x.abs(),
        Side::Right => -ball.vel.x.abs(),
    };
    ball.vel.y = deflect(ball.pos.y, paddle_y);
}

/// Ball at `ball_x` has crossed the goal line behind the paddle on `side`
pub fn crossed_goal(ball_x: f32, side: Side) -> bool {
    match side {
        Side::Left => ball_x <= 0.0,
        Side::Right => ball_x >= SURFACE_WIDTH - BALL_SIZE,
    }
}
