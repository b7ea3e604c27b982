// Eased follower for the custom cursor: each frame it covers a fixed
// fraction of the remaining distance to the pointer.

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorFollower {
    pub pos: Vector2<f64>,
    pub target: Vector2<f64>,
    pub speed: f64,
}

impl CursorFollower {
    pub const SPEED: f64 = 0.15;

    pub fn new() -> Self {
        CursorFollower::with_speed(CursorFollower::SPEED)
    }

    pub fn with_speed(speed: f64) -> Self {
        CursorFollower {
            pos: [0.0, 0.0],
            target: [0.0, 0.0],
            speed,
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = [x, y];
    }

    pub fn step(&mut self) -> Vector2<f64> {
        let remaining = vecmath::vec2_sub(self.target, self.pos);
        self.pos = vecmath::vec2_add(self.pos, vecmath::vec2_scale(remaining, self.speed));
        self.pos
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        CursorFollower::new()
    }
}
