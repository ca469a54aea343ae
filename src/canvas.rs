use std::ops::{Deref, DerefMut};

use super::geom::{Bounds, Color, Point, Stroke, TextStyle};

/// Immediate-mode drawing surface supplied by the host for the duration of
/// one frame. Implementations translate these calls into whatever backend
/// the host renders with.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, min: Point, max: Point, color: Color);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    /// Single open polyline: first point is a move, the rest are segments.
    fn polyline(&mut self, points: &[Point], stroke: Stroke);
    fn text(&mut self, text: &str, anchor: Point, style: TextStyle);
}

/// Scoped handle to the canvas for one draw pass. Dropping the lease ends
/// access; the borrow makes early release on any exit path automatic.
pub struct CanvasLease<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> CanvasLease<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        Self { canvas }
    }
}

impl<'a> Deref for CanvasLease<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for CanvasLease<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

/// A short string pre-shaped by the host's text machinery at construction
/// time and reused unchanged every frame it is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    text: String,
    size: f32,
}

impl TextRun {
    pub fn shape(text: &str, size: f32) -> Self {
        Self {
            text: text.to_owned(),
            size,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Per-frame rendering context handed down by the host scene graph.
///
/// The canvas is a capability, not a guarantee: `lease_canvas` returns
/// `None` when the host cannot expose an immediate-mode surface this frame,
/// in which case only `draw_text_run` (the host's retained text path) is
/// available.
pub trait RenderContext {
    fn lease_canvas(&mut self) -> Option<CanvasLease<'_>>;
    fn draw_text_run(&mut self, run: &TextRun, color: Color);
}

/// Custom draw unit injected into the host's retained scene graph.
///
/// Implementations are plain per-frame values. Equality deliberately never
/// holds so the host re-executes every submission instead of deduplicating,
/// and hit-testing never reports a hit (the surface is decorative only).
pub trait DrawOperation {
    fn bounds(&self) -> Bounds;
    fn hit_test(&self, point: Point) -> bool;
    fn equals(&self, other: &dyn DrawOperation) -> bool;
    fn render(&mut self, context: &mut dyn RenderContext);
    fn dispose(&mut self);
}
