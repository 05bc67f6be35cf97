//! Cosmetic settings read by the renderer

use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, Result};

/// 8-bit RGB color
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, 0x80, 0x00);
    pub const PURPLE: Rgb = Rgb::new(0x80, 0x00, 0x80);
    pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`
    pub fn parse_hex(raw: &str) -> Result<Self> {
        let invalid = || GameError::InvalidColor(raw.to_string());
        let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Background decoration style
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Solid black
    #[default]
    Plain,
    /// Drifting star field
    Stars,
    /// Wandering colored line segments
    Energy,
}

impl FromStr for Theme {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "black" => Ok(Theme::Plain),
            "stars" => Ok(Theme::Stars),
            "energy" => Ok(Theme::Energy),
            _ => Err(GameError::UnknownTheme(s.to_string())),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub ball_color: Rgb,
    pub paddle_color: Rgb,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_color: Rgb::WHITE,
            paddle_color: Rgb::RED,
            theme: Theme::Plain,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Malformed values fall back to the default color
    pub fn set_ball_color(&mut self, raw: &str) {
        self.ball_color = Rgb::parse_hex(raw).unwrap_or_else(|e| {
            log::warn!("{e}, using default ball color");
            Settings::default().ball_color
        });
    }

    pub fn set_paddle_color(&mut self, raw: &str) {
        self.paddle_color = Rgb::parse_hex(raw).unwrap_or_else(|e| {
            log::warn!("{e}, using default paddle color");
            Settings::default().paddle_color
        });
    }

    pub fn set_theme(&mut self, raw: &str) {
        self.theme = raw.parse().unwrap_or_else(|e| {
            log::warn!("{e}, using plain background");
            Theme::Plain
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse_hex(" #00FFaa "), Ok(Rgb::new(0, 255, 170)));
        assert!(Rgb::parse_hex("ff8000").is_err());
        assert!(Rgb::parse_hex("#ff80").is_err());
        assert!(Rgb::parse_hex("#gg0000").is_err());
        assert!(Rgb::parse_hex("#ééé").is_err());
    }

    #[test]
    fn test_display_round_trips_hex() {
        assert_eq!(Rgb::PURPLE.to_string(), "#800080");
    }

    #[test]
    fn test_malformed_colors_are_coerced() {
        let mut settings = Settings::new();
        settings.set_ball_color("#123456");
        assert_eq!(settings.ball_color, Rgb::new(0x12, 0x34, 0x56));
        settings.set_ball_color("not a color");
        assert_eq!(settings.ball_color, Rgb::WHITE);
        settings.set_paddle_color("");
        assert_eq!(settings.paddle_color, Rgb::RED);
    }

    #[test]
    fn test_theme_parsing() {
        let mut settings = Settings::new();
        settings.set_theme("Stars");
        assert_eq!(settings.theme, Theme::Stars);
        settings.set_theme("void");
        assert_eq!(settings.theme, Theme::Plain);
        assert_eq!("energy".parse::<Theme>(), Ok(Theme::Energy));
    }
}
