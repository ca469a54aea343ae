//! Test doubles shared by the per-module test suites.

use crate::canvas::{Canvas, CanvasLease, RenderContext, TextRun};
use crate::geom::{Color, Point, Stroke, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawEvent {
    Clear(Color),
    FillRect {
        min: Point,
        max: Point,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Text {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
}

/// Canvas that records every draw call for ordering and call-count
/// assertions.
#[derive(Default)]
pub(crate) struct RecordingCanvas {
    pub events: Vec<DrawEvent>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.events.iter().filter_map(|e| match e {
            DrawEvent::Text { text, anchor, .. } => Some((text.as_str(), *anchor)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.events.iter().filter_map(|e| match e {
            DrawEvent::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Line { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.events.push(DrawEvent::Clear(color));
    }

    fn fill_rect(&mut self, min: Point, max: Point, color: Color) {
        self.events.push(DrawEvent::FillRect { min, max, color });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.events.push(DrawEvent::Line { from, to, stroke });
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.events.push(DrawEvent::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn text(&mut self, text: &str, anchor: Point, style: TextStyle) {
        self.events.push(DrawEvent::Text {
            text: text.to_owned(),
            anchor,
            style,
        });
    }
}

/// Render context whose canvas capability can be present or absent, plus a
/// record of every retained-path text run drawn through it.
pub(crate) struct TestContext {
    pub canvas: Option<RecordingCanvas>,
    pub text_runs: Vec<String>,
}

impl TestContext {
    pub fn with_canvas() -> Self {
        Self {
            canvas: Some(RecordingCanvas::default()),
            text_runs: Vec::new(),
        }
    }

    pub fn without_canvas() -> Self {
        Self {
            canvas: None,
            text_runs: Vec::new(),
        }
    }

    pub fn events(&self) -> &[DrawEvent] {
        self.canvas.as_ref().map(|c| c.events.as_slice()).unwrap_or(&[])
    }
}

impl RenderContext for TestContext {
    fn lease_canvas(&mut self) -> Option<CanvasLease<'_>> {
        self.canvas
            .as_mut()
            .map(|c| CanvasLease::new(c as &mut dyn Canvas))
    }

    fn draw_text_run(&mut self, run: &TextRun, _color: Color) {
        self.text_runs.push(run.text().to_owned());
    }
}
