// Radial confetti burst. Pieces fly out evenly spaced around the origin,
// fall under a constant per-frame gravity and retire once they have dropped
// a full viewport height below where they started.

use crate::color::{Color, CONFETTI_PALETTE};
use crate::surface::Surface;
use rand::Rng;
use std::f64::consts::PI;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    // Relative to the burst origin
    pub offset: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub color: Color,
}

pub struct ConfettiBurst {
    origin: Vector2<f64>,
    pieces: Vec<ConfettiPiece>,
}

impl ConfettiBurst {
    pub const DEFAULT_COUNT: usize = 8;
    pub const MIN_SPEED: f64 = 200.0;
    pub const MAX_SPEED: f64 = 500.0;
    pub const DIAMETER: f64 = 12.0;
    const GRAVITY: f64 = 0.2;
    const FRICTION: f64 = 0.98;
    const VELOCITY_SCALE: f64 = 0.01;

    pub fn new<R: Rng>(origin: Vector2<f64>, count: usize, rng: &mut R) -> Self {
        let pieces = (0..count)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / count as f64;
                let speed = rng.gen_range(ConfettiBurst::MIN_SPEED, ConfettiBurst::MAX_SPEED);
                ConfettiPiece {
                    offset: [0.0, 0.0],
                    vel: [angle.cos() * speed, angle.sin() * speed],
                    color: CONFETTI_PALETTE[rng.gen_range(0, CONFETTI_PALETTE.len())],
                }
            })
            .collect();
        ConfettiBurst { origin, pieces }
    }

    pub fn origin(&self) -> Vector2<f64> {
        self.origin
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Moves every piece one frame and drops the ones that fell out of view.
    /// Returns how many are still live.
    pub fn step(&mut self, viewport_height: f64) -> usize {
        for piece in &mut self.pieces {
            // Friction scales the horizontal displacement only, it never decays vx
            piece.offset[0] += piece.vel[0] * ConfettiBurst::VELOCITY_SCALE * ConfettiBurst::FRICTION;
            piece.offset[1] += piece.vel[1] * ConfettiBurst::VELOCITY_SCALE;
            piece.vel[1] += ConfettiBurst::GRAVITY;
        }
        self.pieces.retain(|p| p.offset[1] <= viewport_height);
        self.pieces.len()
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for piece in &self.pieces {
            let [x, y] = vecmath::vec2_add(self.origin, piece.offset);
            surface.set_fill_color(piece.color);
            surface.fill_circle(x, y, ConfettiBurst::DIAMETER / 2.0);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn burst(count: usize) -> ConfettiBurst {
        ConfettiBurst::new([100.0, 100.0], count, &mut StdRng::seed_from_u64(9))
    }

    #[test]
    fn pieces_fan_out_evenly() {
        let b = burst(4);
        assert_eq!(b.pieces().len(), 4);
        // angle 0 goes right, angle pi/2 goes down
        let right = b.pieces()[0].vel;
        assert!(right[0] >= 200.0 && right[0] < 500.0);
        assert!(right[1].abs() < 1e-9);
        let down = b.pieces()[1].vel;
        assert!(down[0].abs() < 1e-9);
        assert!(down[1] >= 200.0 && down[1] < 500.0);
        for p in b.pieces() {
            let speed = vecmath::vec2_len(p.vel);
            assert!(speed >= 200.0 && speed < 500.0);
            assert!(CONFETTI_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn gravity_accumulates_on_vertical_velocity() {
        let mut b = burst(1);
        let vx = b.pieces()[0].vel[0];
        b.step(1e9);
        b.step(1e9);
        let p = b.pieces()[0];
        assert_eq!(p.vel[0], vx);
        assert!((p.vel[1] - 0.4).abs() < 1e-9);
        assert!((p.offset[0] - 2.0 * vx * 0.01 * 0.98).abs() < 1e-9);
        // first frame moves with vy = 0, second with vy = 0.2
        assert!((p.offset[1] - 0.002).abs() < 1e-9);
    }

    #[test]
    fn pieces_retire_below_the_viewport() {
        let mut b = burst(8);
        let mut frames = 0;
        while b.step(600.0) > 0 {
            frames += 1;
            assert!(frames < 10_000, "burst never finished");
        }
        assert!(b.is_finished());
    }

    #[test]
    fn draws_one_circle_per_live_piece_at_origin_plus_offset() {
        let b = burst(3);
        let mut surface = RecordingSurface::new();
        b.draw(&mut surface);
        let circles: Vec<_> = surface.circles().collect();
        assert_eq!(circles.len(), 3);
        for (x, y, r) in circles {
            assert_eq!((x, y, r), (100.0, 100.0, 6.0));
        }
    }
}
