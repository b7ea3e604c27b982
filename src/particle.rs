// Simple particle struct to keep track of individual position, velocity, and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    vel: Vector2<f64>,
    pub radius: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, opacity: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
            color,
        }
    }

    // Every attribute is an independent draw; position lands anywhere on the surface
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            rng.gen_range(config.speed.start, config.speed.end),
            rng.gen_range(config.speed.start, config.speed.end),
        ];
        let radius = rng.gen_range(config.radius.start, config.radius.end);
        let opacity = rng.gen_range(config.opacity.start, config.opacity.end);
        let color = config.palette[rng.gen_range(0, config.palette.len())];
        Particle::new(pos, vel, radius, opacity, color)
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.vel
    }

    // One frame of motion with a unit time step
    pub fn advance(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }

    // Teleports to the opposite edge. Velocity is untouched.
    pub fn wrap(&mut self, width: f64, height: f64) {
        if self.pos[0] < 0.0 {
            self.pos[0] = width;
        }
        if self.pos[0] > width {
            self.pos[0] = 0.0;
        }
        if self.pos[1] < 0.0 {
            self.pos[1] = height;
        }
        if self.pos[1] > height {
            self.pos[1] = 0.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
