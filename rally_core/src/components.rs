use glam::Vec2;

use crate::resources::GameRng;
use crate::settings::Rgb;

/// Which end of the field an entity belongs to
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human, left edge
    Player,
    /// Computer, right edge
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Horizontal direction pointing at this side of the field
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Paddle component. `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Height at match start, restored when a widen effect ends
    pub original_height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            original_height: height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.bottom()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Serve speed, used to scale the per-point speed-up
    pub base_speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, base_speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            base_speed,
        }
    }

    /// Copy at the same spot travelling the opposite way
    pub fn mirrored(&self) -> Self {
        Self {
            vel: -self.vel,
            ..*self
        }
    }

    /// Re-serve from `center` after a point.
    ///
    /// Horizontal direction flips, then both axes are pushed away from zero by
    /// `base_speed * speedup`, so rallies get faster every point. A ball with no
    /// horizontal motion would never recover, so it is served toward `scorer`.
    pub fn reset(&mut self, center: Vec2, speedup: f32, scorer: Side) {
        self.pos = center;
        self.vel.x = -self.vel.x;

        let nudge = self.base_speed * speedup;
        self.vel.x += sign(self.vel.x) * nudge;
        self.vel.y += sign(self.vel.y) * nudge;

        if self.vel.x == 0.0 {
            self.vel.x = scorer.direction() * self.base_speed;
        }
    }
}

/// Creation order of a ball entity. Lower is older; hecs ids get reused, so
/// "first ball" is decided by this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// Sign with `sign(0) == 0`, unlike `f32::signum`
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Closed set of pickups
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    WidenPaddle,
    FreezeOpponent,
    DuplicateBall,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::WidenPaddle,
        PowerUpKind::FreezeOpponent,
        PowerUpKind::DuplicateBall,
    ];

    /// Uniform pick
    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }

    /// Visual tag for the renderer
    pub fn tint(self) -> Rgb {
        match self {
            PowerUpKind::WidenPaddle => Rgb::GREEN,
            PowerUpKind::FreezeOpponent => Rgb::PURPLE,
            PowerUpKind::DuplicateBall => Rgb::CYAN,
        }
    }
}

/// Power-up component. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(pos: Vec2, radius: f32, kind: PowerUpKind) -> Self {
        Self { pos, radius, kind }
    }

    pub fn touches(&self, ball: &Ball) -> bool {
        ball.pos.distance(self.pos) < ball.radius + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(vel: Vec2) -> Ball {
        Ball::new(Vec2::new(-3.0, 40.0), vel, 8.0, 5.0)
    }

    #[test]
    fn test_reset_recentres_and_speeds_up() {
        let mut b = ball(Vec2::new(-5.0, 5.0));
        let before = b.vel.length();
        b.reset(Vec2::new(400.0, 250.0), 0.1, Side::Opponent);

        assert_eq!(b.pos, Vec2::new(400.0, 250.0));
        assert_eq!(b.vel, Vec2::new(5.5, 5.5));
        assert!(b.vel.length() > before);
    }

    #[test]
    fn test_reset_keeps_straight_serve_straight() {
        let mut b = ball(Vec2::new(6.0, 0.0));
        b.reset(Vec2::ZERO, 0.1, Side::Player);
        assert_eq!(b.vel, Vec2::new(-6.5, 0.0));
    }

    #[test]
    fn test_reset_recovers_zero_horizontal_velocity() {
        let mut b = ball(Vec2::new(0.0, 3.0));
        b.reset(Vec2::ZERO, 0.1, Side::Player);
        assert_eq!(b.vel.x, -5.0, "served toward the scorer at base speed");

        let mut b = ball(Vec2::new(-0.0, 3.0));
        b.reset(Vec2::ZERO, 0.1, Side::Opponent);
        assert_eq!(b.vel.x, 5.0);
    }

    #[test]
    fn test_mirrored_ball() {
        let b = ball(Vec2::new(4.0, -2.0));
        let m = b.mirrored();
        assert_eq!(m.pos, b.pos);
        assert_eq!(m.vel, Vec2::new(-4.0, 2.0));
        assert_eq!(m.base_speed, b.base_speed);
    }

    #[test]
    fn test_paddle_span_is_exclusive() {
        let p = Paddle::new(Side::Player, 20.0, 100.0, 10.0, 110.0);
        assert!(p.spans(150.0));
        assert!(!p.spans(100.0));
        assert!(!p.spans(210.0));
    }

    #[test]
    fn test_power_up_touch_uses_sum_of_radii() {
        let p = PowerUp::new(Vec2::new(100.0, 100.0), 16.0, PowerUpKind::DuplicateBall);
        let mut b = ball(Vec2::ZERO);
        b.pos = Vec2::new(123.0, 100.0);
        assert!(p.touches(&b));
        b.pos = Vec2::new(124.0, 100.0);
        assert!(!p.touches(&b));
    }

    #[test]
    fn test_each_kind_has_its_own_tint() {
        assert_eq!(PowerUpKind::WidenPaddle.tint(), Rgb::GREEN);
        assert_eq!(PowerUpKind::FreezeOpponent.tint(), Rgb::PURPLE);
        assert_eq!(PowerUpKind::DuplicateBall.tint(), Rgb::CYAN);
    }
}
