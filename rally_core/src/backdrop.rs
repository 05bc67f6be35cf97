//! Decorative background particles. Purely cosmetic: nothing here touches
//! paddles, balls or score.

use glam::Vec2;

use crate::field::Field;
use crate::params::Params;
use crate::resources::GameRng;
use crate::settings::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyLine {
    pub pos: Vec2,
    pub length: f32,
    pub angle: f32,
    pub speed: f32,
}

impl EnergyLine {
    /// Far end of the segment
    pub fn end(&self) -> Vec2 {
        self.pos + Vec2::from_angle(self.angle) * self.length
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Backdrop {
    pub stars: Vec<Star>,
    pub lines: Vec<EnergyLine>,
}

impl Backdrop {
    pub fn generate(field: &Field, rng: &mut GameRng) -> Self {
        let stars = (0..Params::STAR_COUNT)
            .map(|_| Star {
                pos: random_point(field, rng),
                radius: rng.gen_range(0.0, 2.0),
                speed: rng.gen_range(0.1, 0.6),
            })
            .collect();

        let lines = (0..Params::ENERGY_LINE_COUNT)
            .map(|_| EnergyLine {
                pos: random_point(field, rng),
                length: rng.gen_range(20.0, 70.0),
                angle: rng.gen_range(0.0, std::f32::consts::TAU),
                speed: rng.gen_range(0.2, 0.7),
            })
            .collect();

        Self { stars, lines }
    }

    /// Move the decorations belonging to `theme`; the others stay frozen
    pub fn drift(&mut self, theme: Theme, field: &Field, dt: f32, rng: &mut GameRng) {
        match theme {
            Theme::Plain => {}
            Theme::Stars => {
                for star in &mut self.stars {
                    star.pos.x -= star.speed * dt;
                    if star.pos.x < 0.0 {
                        star.pos.x = field.width;
                        star.pos.y = rng.gen_range(0.0, field.height);
                    }
                }
            }
            Theme::Energy => {
                for line in &mut self.lines {
                    line.pos += Vec2::from_angle(line.angle) * line.speed * dt;
                    let outside = line.pos.x < 0.0
                        || line.pos.x > field.width
                        || line.pos.y < 0.0
                        || line.pos.y > field.height;
                    if outside {
                        line.pos = random_point(field, rng);
                        line.angle = rng.gen_range(0.0, std::f32::consts::TAU);
                    }
                }
            }
        }
    }
}

fn random_point(field: &Field, rng: &mut GameRng) -> Vec2 {
    Vec2::new(rng.gen_range(0.0, field.width), rng.gen_range(0.0, field.height))
}
