use crate::{Ball, Field, Side};

/// Who scores if the ball has left the field horizontally
pub fn scorer_for(ball: &Ball, field: &Field) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Opponent)
    } else if ball.pos.x > field.width {
        Some(Side::Player)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32) -> Ball {
        Ball::new(Vec2::new(x, 250.0), Vec2::new(5.0, 0.0), 8.0, 5.0)
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        assert_eq!(scorer_for(&ball_at(-0.1), &Field::default()), Some(Side::Opponent));
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let field = Field::default();
        assert_eq!(scorer_for(&ball_at(field.width + 0.1), &field), Some(Side::Player));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let field = Field::default();
        assert_eq!(scorer_for(&ball_at(0.0), &field), None);
        assert_eq!(scorer_for(&ball_at(field.width), &field), None);
        assert_eq!(scorer_for(&ball_at(400.0), &field), None);
    }
}
