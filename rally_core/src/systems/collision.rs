use crate::{Ball, Field, Paddle, Side};

/// Reflect off the top/bottom walls. Speed is preserved; the ball is pushed
/// back inside so it cannot flip twice on consecutive ticks.
pub fn bounce_walls(ball: &mut Ball, field: &Field) -> bool {
    let top = ball.radius;
    let bottom = field.height - ball.radius;

    if ball.pos.y < top {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = top;
        true
    } else if ball.pos.y > bottom {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = bottom;
        true
    } else {
        false
    }
}

/// Ball reached the paddle's face while travelling toward it.
///
/// Checked every tick rather than on the crossing edge, so a ball that is
/// already slightly past the face still bounces while moving inward.
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    if !paddle.spans(ball.pos.y) {
        return false;
    }
    match paddle.side {
        Side::Player => ball.vel.x < 0.0 && ball.pos.x - ball.radius < paddle.x + paddle.width,
        Side::Opponent => ball.vel.x > 0.0 && ball.pos.x + ball.radius > paddle.x,
    }
}

/// Reverse horizontal direction if the ball hits `paddle`
pub fn bounce_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if hits_paddle(ball, paddle) {
        ball.vel.x = -ball.vel.x;
        true
    } else {
        false
    }
}
