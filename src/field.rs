// Ambient background: a fixed set of drifting particles that wrap at the
// surface edges, with faint links drawn between close neighbours.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

/// Counters for one call to [`ParticleField::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles_drawn: usize,
    pub pairs_evaluated: usize,
    pub links_drawn: usize,
}

pub struct ParticleField<R: Rng> {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    // Tracked from pointer input, nothing reads it during simulation yet
    cursor: Vector2<f64>,
    config: FieldConfig,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(width: f64, height: f64, rng: R) -> Self {
        ParticleField::with_config(width, height, FieldConfig::default(), rng)
    }

    /// Particles are created immediately when the size has a non-zero area,
    /// otherwise on the first resize that gives it one.
    pub fn with_config(width: f64, height: f64, config: FieldConfig, rng: R) -> Self {
        let mut field = ParticleField {
            width: 0.0,
            height: 0.0,
            particles: Vec::with_capacity(config.particle_count),
            cursor: [0.0, 0.0],
            config,
            rng,
        };
        field.resize(width, height);
        field
    }

    /// Existing particles keep their positions; anything now out of view comes
    /// back on its next wrap.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        if !self.is_initialized() && self.has_area() {
            self.setup_particles();
        }
    }

    fn setup_particles(&mut self) {
        for _ in 0..self.config.particle_count {
            let p = Particle::random(&mut self.rng, self.width, self.height, &self.config);
            self.particles.push(p);
        }
    }

    pub fn is_initialized(&self) -> bool {
        !self.particles.is_empty()
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = [x, y];
    }

    pub fn cursor(&self) -> Vector2<f64> {
        self.cursor
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // A slice, so callers can move particles but never change how many there are
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Link opacity for two centers `distance` apart, 0 at or beyond the link distance.
    pub fn link_alpha(&self, distance: f64) -> f64 {
        let fade = 1.0 - distance / self.config.link_distance;
        (fade * self.config.link_alpha).max(0.0)
    }

    /// Advances and draws one frame. A zero-area surface skips the frame.
    ///
    /// Particle `i` is moved and drawn before its links to every `j > i` are
    /// measured, so those links use `j`'s position from the previous frame.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> FrameStats {
        let mut stats = FrameStats::default();
        if !self.has_area() {
            return stats;
        }
        surface.clear_rect(0.0, 0.0, self.width, self.height);

        for i in 0..self.particles.len() {
            let p = {
                let p = &mut self.particles[i];
                p.advance();
                p.wrap(self.width, self.height);
                *p
            };

            surface.set_fill_color(p.color);
            surface.set_global_alpha(p.opacity);
            surface.fill_circle(p.pos[0], p.pos[1], p.radius);
            stats.particles_drawn += 1;

            for other in &self.particles[i + 1..] {
                stats.pairs_evaluated += 1;
                let distance = p.distance_to(other);
                if distance < self.config.link_distance {
                    surface.set_stroke_color(p.color);
                    surface.set_global_alpha(self.link_alpha(distance));
                    surface.stroke_line(p.pos, other.pos);
                    stats.links_drawn += 1;
                }
            }

            surface.set_global_alpha(1.0);
        }
        stats
    }
}
