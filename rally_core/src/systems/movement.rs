use crate::Ball;

/// Integrate ball position over `dt` frame units
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}
