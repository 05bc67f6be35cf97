//! Player input adapters: keyboard, touch zones and held on-screen buttons

use crate::params::Params;
use crate::resources::PaddleInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Map a key name to a paddle direction
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        _ => None,
    }
}

/// Held up/down state fed by keyboard and touch events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    up: bool,
    down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: &str) {
        match key_direction(key) {
            Some(Direction::Up) => self.up = true,
            Some(Direction::Down) => self.down = true,
            None => {}
        }
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        match key_direction(key) {
            Some(Direction::Up) => self.up = false,
            Some(Direction::Down) => self.down = false,
            None => {}
        }
    }

    /// Touch on the drawing surface: upper half moves up, lower half down.
    /// Touches outside `[top, top + height]` are ignored.
    pub fn touch_start(&mut self, touch_y: f32, top: f32, height: f32) {
        if touch_y < top || touch_y > top + height {
            return;
        }
        let upper = touch_y - top < height / 2.0;
        self.up = upper;
        self.down = !upper;
    }

    /// Touch end or cancel
    pub fn touch_end(&mut self) {
        self.up = false;
        self.down = false;
    }

    pub fn intent(&self) -> PaddleInput {
        PaddleInput::new(self.up, self.down)
    }
}

/// Emulates a held on-screen button: one discrete step per repeat interval
/// while held, nothing once released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldRepeater {
    held: Option<Direction>,
    elapsed_ms: f32,
    interval_ms: f32,
}

impl Default for HoldRepeater {
    fn default() -> Self {
        Self::new(Params::HOLD_REPEAT_MS)
    }
}

impl HoldRepeater {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            held: None,
            elapsed_ms: 0.0,
            interval_ms: interval_ms.max(1.0),
        }
    }

    pub fn press(&mut self, direction: Direction) {
        self.held = Some(direction);
        self.elapsed_ms = 0.0;
    }

    pub fn release(&mut self) {
        self.held = None;
        self.elapsed_ms = 0.0;
    }

    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Advance by `elapsed_ms`; returns the held direction and how many steps fired
    pub fn poll(&mut self, elapsed_ms: f32) -> Option<(Direction, u32)> {
        let direction = self.held?;
        self.elapsed_ms += elapsed_ms.max(0.0);
        let steps = (self.elapsed_ms / self.interval_ms).floor();
        self.elapsed_ms -= steps * self.interval_ms;
        (steps >= 1.0).then_some((direction, steps as u32))
    }
}
