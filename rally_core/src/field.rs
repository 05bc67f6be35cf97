use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// The rectangular play area. All entity geometry scales with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(Params::FIELD_WIDTH, Params::FIELD_HEIGHT)
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Horizontal scale relative to the reference field
    pub fn width_scale(&self) -> f32 {
        self.width / Params::FIELD_WIDTH
    }

    /// Vertical scale relative to the reference field
    pub fn height_scale(&self) -> f32 {
        self.height / Params::FIELD_HEIGHT
    }

    pub fn paddle_width(&self) -> f32 {
        self.width * Params::PADDLE_WIDTH_RATIO
    }

    pub fn paddle_height(&self) -> f32 {
        self.height * Params::PADDLE_HEIGHT_RATIO
    }

    /// Get X position (left edge) for the paddle on a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        let margin = self.width * Params::PADDLE_MARGIN_RATIO;
        match side {
            Side::Player => margin,
            Side::Opponent => self.width - (margin + self.paddle_width()),
        }
    }

    /// Top edge that vertically centres a paddle of the given height
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height) / 2.0
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the field
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, (self.height - paddle_height).max(0.0))
    }

    pub fn ball_radius(&self) -> f32 {
        self.width * Params::BALL_RADIUS_RATIO
    }

    pub fn power_up_radius(&self) -> f32 {
        self.width * Params::POWER_UP_RADIUS_RATIO
    }

    /// Central 50% x 50% region where power-ups may appear, as (min, max)
    pub fn spawn_region(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.width / 4.0, self.height / 4.0),
            Vec2::new(self.width * 0.75, self.height * 0.75),
        )
    }
}
