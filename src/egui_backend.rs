//! Adapter that hosts the scope inside egui. egui's `Painter` plays the
//! immediate-mode canvas, `Context::request_repaint` plays the invalidation
//! scheduler, and submitting a draw op simply executes it against the
//! current frame's painter.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Ui};

use super::canvas::{Canvas, CanvasLease, DrawOperation, RenderContext, TextRun};
use super::driver::{InvalidationPriority, RenderLoopDriver, SceneHost};
use super::geom::{Bounds, Color, Point, Stroke, TextAlign, TextStyle};

fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn stroke32(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, color32(stroke.color))
}

/// `Canvas` over an `egui::Painter`, translating widget-local coordinates
/// into the painter's clip rect.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn absolute(&self, point: Point) -> Pos2 {
        Pos2::new(self.rect.min.x + point.x, self.rect.min.y + point.y)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, _color: Color) {
        // egui repaints the whole widget every frame; there is nothing to
        // wipe.
    }

    fn fill_rect(&mut self, min: Point, max: Point, color: Color) {
        let rect = Rect::from_min_max(self.absolute(min), self.absolute(max));
        self.painter.rect_filled(rect, 0.0, color32(color));
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.painter
            .line_segment([self.absolute(from), self.absolute(to)], stroke32(stroke));
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        let points: Vec<Pos2> = points.iter().map(|p| self.absolute(*p)).collect();
        self.painter.add(Shape::line(points, stroke32(stroke)));
    }

    fn text(&mut self, text: &str, anchor: Point, style: TextStyle) {
        // The anchor is a baseline point, so hang the text above it.
        let align = match style.align {
            TextAlign::Center => Align2::CENTER_BOTTOM,
            TextAlign::Right => Align2::RIGHT_BOTTOM,
        };
        self.painter.text(
            self.absolute(anchor),
            align,
            text,
            FontId::proportional(style.size),
            color32(style.color),
        );
    }
}

pub struct EguiRenderContext<'a> {
    canvas: PainterCanvas<'a>,
}

impl<'a> EguiRenderContext<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            canvas: PainterCanvas::new(painter, rect),
        }
    }
}

impl RenderContext for EguiRenderContext<'_> {
    fn lease_canvas(&mut self) -> Option<CanvasLease<'_>> {
        Some(CanvasLease::new(&mut self.canvas))
    }

    fn draw_text_run(&mut self, run: &TextRun, color: Color) {
        self.canvas.painter.text(
            self.canvas.rect.min,
            Align2::LEFT_TOP,
            run.text(),
            FontId::proportional(run.size()),
            color32(color),
        );
    }
}

struct EguiSceneHost<'a> {
    painter: &'a Painter,
    rect: Rect,
    ctx: egui::Context,
}

impl SceneHost for EguiSceneHost<'_> {
    fn submit(&mut self, op: &mut dyn DrawOperation) {
        let mut context = EguiRenderContext::new(self.painter, self.rect);
        op.render(&mut context);
        op.dispose();
    }

    fn request_invalidation(&mut self, _priority: InvalidationPriority) {
        // egui has no priority lanes; a plain repaint request is the
        // closest equivalent of a background invalidation.
        self.ctx.request_repaint();
    }
}

/// Fills the available space with the scope and keeps it animating.
pub fn scope(ui: &mut Ui, driver: &mut RenderLoopDriver) -> egui::Response {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let mut host = EguiSceneHost {
        painter: &painter,
        rect,
        ctx: ui.ctx().clone(),
    };
    driver.paint(Bounds::new(rect.width(), rect.height()), &mut host);
    response
}
