// The immediate-mode 2D drawing calls the effects need, so the simulation can
// render onto a browser canvas or into a command log for tests.

use crate::color::Color;

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_global_alpha(&mut self, alpha: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    FillColor(Color),
    StrokeColor(Color),
    GlobalAlpha(f64),
    FillCircle { x: f64, y: f64, radius: f64 },
    StrokeLine { from: [f64; 2], to: [f64; 2] },
}

/// Surface that records every call instead of rasterizing.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::StrokeLine { from, to } => Some((from, to)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::FillCircle { x, y, radius } => Some((x, y, radius)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius });
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }
}
