//! Paint surface abstraction for map painters.
//!
//! Painters draw in a local frame that can be translated and rotated, like a
//! canvas transform. The current pen and transform form the [`PaintState`],
//! which can be pushed and popped. [`SavedPaintState`] does the push on
//! creation and the pop on drop.

use std::ops::{Deref, DerefMut};

use egui::emath::Rot2;
use egui::{Color32, FontId, Pos2, Stroke, Vec2};

use crate::text_utils;

/// Descent of the label font relative to its size
const DESCENT_RATIO: f32 = 0.22;

/// Rotation and translation applied to local drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintTransform {
    rotation: Rot2,
    offset: Vec2,
}

impl Default for PaintTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PaintTransform {
    pub const IDENTITY: Self = Self {
        rotation: Rot2::IDENTITY,
        offset: Vec2::ZERO,
    };

    /// Moves the local origin by `delta`, measured in the current local frame.
    pub fn translate(&mut self, delta: Vec2) {
        self.offset += self.rotation * delta;
    }

    /// Rotates the local frame clockwise by `degrees`.
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation = self.rotation * Rot2::from_angle(degrees.to_radians());
    }

    /// Maps a local point to screen coordinates.
    pub fn map(&self, point: Pos2) -> Pos2 {
        (self.offset + self.rotation * point.to_vec2()).to_pos2()
    }

    /// Total clockwise rotation in radians.
    pub fn angle(&self) -> f32 {
        self.rotation.angle()
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Pen and transform of a painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintState {
    pub pen: Stroke,
    pub transform: PaintTransform,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            pen: Stroke::new(1.0, Color32::BLACK),
            transform: PaintTransform::IDENTITY,
        }
    }
}

/// Current paint state plus the saved states below it.
#[derive(Debug, Clone, Default)]
pub struct PaintStateStack {
    current: PaintState,
    saved: Vec<PaintState>,
}

impl PaintStateStack {
    pub fn current(&self) -> &PaintState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut PaintState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the last saved state. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// Drawing primitives and text metrics used by map painters.
pub trait MapPainter {
    /// Current pen and transform.
    fn state(&self) -> PaintState;

    /// Pushes the current pen and transform.
    fn save(&mut self);

    /// Pops the last pushed pen and transform.
    fn restore(&mut self);

    fn set_pen(&mut self, pen: Stroke);

    fn translate(&mut self, delta: Vec2);

    /// Rotates the local frame clockwise by `degrees`.
    fn rotate(&mut self, degrees: f32);

    fn reset_transform(&mut self);

    /// Draws a line between two local points with the current pen.
    fn draw_line(&mut self, from: Pos2, to: Pos2);

    /// Draws text with its baseline starting at the local point `pos`.
    fn draw_text(&mut self, pos: Pos2, text: &str);

    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> f32;

    /// Distance from the baseline to the bottom of the label font.
    fn descent(&self) -> f32;

    /// Elides `text` on the right to fit into `width` pixels.
    fn elided_text(&self, text: &str, width: f32) -> String {
        text_utils::elide_right(text, width, |s| self.text_width(s))
    }
}

/// Saves the painter state on creation and restores it when dropped.
pub struct SavedPaintState<'a> {
    painter: &'a mut dyn MapPainter,
}

impl<'a> SavedPaintState<'a> {
    pub fn new(painter: &'a mut dyn MapPainter) -> Self {
        painter.save();
        Self { painter }
    }
}

impl<'a> Deref for SavedPaintState<'a> {
    type Target = dyn MapPainter + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.painter
    }
}

impl<'a> DerefMut for SavedPaintState<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.painter
    }
}

impl Drop for SavedPaintState<'_> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

/// [`MapPainter`] drawing into an egui layer.
pub struct EguiMapPainter {
    painter: egui::Painter,
    font_id: FontId,
    stack: PaintStateStack,
}

impl EguiMapPainter {
    pub fn new(painter: egui::Painter, font_id: FontId) -> Self {
        Self {
            painter,
            font_id,
            stack: PaintStateStack::default(),
        }
    }

    fn layout(&self, text: &str, color: Color32) -> std::sync::Arc<egui::Galley> {
        self.painter
            .layout_no_wrap(text.to_string(), self.font_id.clone(), color)
    }
}

impl MapPainter for EguiMapPainter {
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
        self.painter.line_segment(
            [state.transform.map(from), state.transform.map(to)],
            state.pen,
        );
    }

    fn draw_text(&mut self, pos: Pos2, text: &str) {
        let state = *self.stack.current();
        let galley = self.layout(text, state.pen.color);

        // Galleys are positioned by their top left corner
        let ascent = galley.size().y - self.descent();
        let top_left = state.transform.map(pos - Vec2::new(0.0, ascent));

        let shape = egui::epaint::TextShape::new(top_left, galley, state.pen.color)
            .with_angle(state.transform.angle());
        self.painter.add(egui::Shape::Text(shape));
    }

    fn text_width(&self, text: &str) -> f32 {
        self.layout(text, Color32::WHITE).size().x
    }

    fn descent(&self) -> f32 {
        self.font_id.size * DESCENT_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_then_rotate() {
        let mut transform = PaintTransform::IDENTITY;
        transform.translate(Vec2::new(100.0, 50.0));
        transform.rotate(90.0);

        // Local x axis points down the screen after a clockwise quarter turn
        let p = transform.map(Pos2::new(10.0, 0.0));
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_translate_in_rotated_frame() {
        let mut transform = PaintTransform::IDENTITY;
        transform.rotate(180.0);
        transform.translate(Vec2::new(10.0, 0.0));
        let p = transform.map(Pos2::ZERO);
        assert!((p.x + 10.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
    }

    #[test]
    fn test_stack_restore_is_balanced() {
        let mut stack = PaintStateStack::default();
        stack.current_mut().pen = Stroke::new(2.0, Color32::RED);
        stack.save();
        stack.current_mut().pen = Stroke::new(0.5, Color32::BLUE);
        stack.current_mut().transform.rotate(45.0);
        assert_eq!(stack.depth(), 1);

        stack.restore();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current().pen, Stroke::new(2.0, Color32::RED));
        assert!(stack.current().transform.is_identity());

        // Unbalanced restore keeps the state
        stack.restore();
        assert_eq!(stack.current().pen, Stroke::new(2.0, Color32::RED));
    }
}
