//! Headless painter that records what it is asked to draw.
//!
//! Text metrics are monospace so that layouts are predictable without a font
//! backend.

use egui::{Pos2, Stroke, Vec2};

use crate::painter::{MapPainter, PaintState, PaintStateStack, PaintTransform};

/// A draw call, already mapped to screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Line {
        from: Pos2,
        to: Pos2,
        pen: Stroke,
    },
    Text {
        /// Baseline start in screen coordinates
        pos: Pos2,
        /// Clockwise rotation in degrees
        angle_deg: f32,
        text: String,
        pen: Stroke,
    },
}

/// [`MapPainter`] that stores draw calls instead of rendering them.
#[derive(Debug, Clone)]
pub struct RecordingPainter {
    char_width: f32,
    descent: f32,
    stack: PaintStateStack,
    ops: Vec<PaintOp>,
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new(7.0, 3.0)
    }
}

impl RecordingPainter {
    pub fn new(char_width: f32, descent: f32) -> Self {
        Self {
            char_width,
            descent,
            stack: PaintStateStack::default(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn lines(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Line { from, to, .. } => Some((*from, *to)),
            PaintOp::Text { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Text { text, .. } => Some(text.as_str()),
            PaintOp::Line { .. } => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn save_depth(&self) -> usize {
        self.stack.depth()
    }
}

impl MapPainter for RecordingPainter {
    fn state(&self) -> PaintState {
        *self.stack.current()
    }

    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn set_pen(&mut self, pen: Stroke) {
        self.stack.current_mut().pen = pen;
    }

    fn translate(&mut self, delta: Vec2) {
        self.stack.current_mut().transform.translate(delta);
    }

    fn rotate(&mut self, degrees: f32) {
        self.stack.current_mut().transform.rotate(degrees);
    }

    fn reset_transform(&mut self) {
        self.stack.current_mut().transform = PaintTransform::IDENTITY;
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2) {
        let state = self.stack.current();
        self.ops.push(PaintOp::Line {
            from: state.transform.map(from),
            to: state.transform.map(to),
            pen: state.pen,
        });
    }

    fn draw_text(&mut self, pos: Pos2, text: &str) {
        let state = self.stack.current();
        self.ops.push(PaintOp::Text {
            pos: state.transform.map(pos),
            angle_deg: state.transform.angle().to_degrees(),
            text: text.to_string(),
            pen: state.pen,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn descent(&self) -> f32 {
        self.descent
    }
}
