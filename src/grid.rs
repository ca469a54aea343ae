use super::canvas::Canvas;
use super::geom::{Bounds, Point};
use super::style;

/// Minor tick spacing in pixels.
const MINOR_STEP_PX: f32 = 20.0;
/// Major (labeled) tick spacing in pixels.
const MAJOR_STEP_PX: f32 = 100.0;
/// One logical axis unit spans this many pixels.
const LOGICAL_UNIT_PX: f32 = 50.0;
/// Ticks extend this far either side of the axis line.
const TICK_HALF_PX: f32 = 5.0;
/// X-axis labels sit this far above the axis line.
const X_LABEL_GAP_PX: f32 = 10.0;
/// Y-axis labels sit right of the axis, nudged down to the tick.
const Y_LABEL_DX_PX: f32 = 20.0;
const Y_LABEL_DY_PX: f32 = 5.0;

/// Draws the background, both axes and their minor/major tick marks with
/// logical-unit labels. The origin is the midpoint of the bounds; sweeps
/// run outward from it in all four directions, so an origin outside the
/// bounds simply yields empty sweeps.
pub struct AxisGridRenderer;

impl AxisGridRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, bounds: Bounds) {
        if !bounds.is_drawable() {
            return;
        }
        let origin = bounds.origin();

        canvas.fill_rect(
            Point::new(0.0, 0.0),
            Point::new(bounds.width, bounds.height),
            style::BACKGROUND,
        );

        // Ticks to the right of the origin.
        let mut x = origin.x;
        while x < bounds.width {
            self.x_tick(canvas, origin, x);
            x += MINOR_STEP_PX;
        }
        // Ticks to the left. Both sweeps start at the origin, so the
        // origin tick is drawn twice; the overdraw is invisible.
        let mut x = origin.x;
        while x > 0.0 {
            self.x_tick(canvas, origin, x);
            x -= MINOR_STEP_PX;
        }
        // Ticks below the origin (screen y grows downward).
        let mut y = origin.y;
        while y < bounds.height {
            self.y_tick(canvas, origin, y);
            y += MINOR_STEP_PX;
        }
        // Ticks above.
        let mut y = origin.y;
        while y > 0.0 {
            self.y_tick(canvas, origin, y);
            y -= MINOR_STEP_PX;
        }

        // Axis lines go on top so ticks never occlude them.
        canvas.line(
            Point::new(0.0, origin.y),
            Point::new(bounds.width, origin.y),
            style::AXIS,
        );
        canvas.line(
            Point::new(origin.x, 0.0),
            Point::new(origin.x, bounds.height),
            style::AXIS,
        );
    }

    fn x_tick(&self, canvas: &mut dyn Canvas, origin: Point, x: f32) {
        let offset = x - origin.x;
        let major = offset % MAJOR_STEP_PX == 0.0;
        let stroke = if major {
            style::MAJOR_TICK
        } else {
            style::MINOR_TICK
        };
        canvas.line(
            Point::new(x, origin.y - TICK_HALF_PX),
            Point::new(x, origin.y + TICK_HALF_PX),
            stroke,
        );
        if major {
            canvas.text(
                &logical_label(offset / LOGICAL_UNIT_PX),
                Point::new(x, origin.y - X_LABEL_GAP_PX),
                style::TICK_LABEL,
            );
        }
    }

    fn y_tick(&self, canvas: &mut dyn Canvas, origin: Point, y: f32) {
        let offset = y - origin.y;
        let major = offset % MAJOR_STEP_PX == 0.0;
        let stroke = if major {
            style::MAJOR_TICK
        } else {
            style::MINOR_TICK
        };
        canvas.line(
            Point::new(origin.x - TICK_HALF_PX, y),
            Point::new(origin.x + TICK_HALF_PX, y),
            stroke,
        );
        if major {
            // Logical y grows upward while screen y grows downward.
            canvas.text(
                &logical_label(-offset / LOGICAL_UNIT_PX),
                Point::new(origin.x + Y_LABEL_DX_PX, y + Y_LABEL_DY_PX),
                style::TICK_LABEL,
            );
        }
    }
}

impl Default for AxisGridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-decimal label text. Negating a zero offset would otherwise print
/// "-0.0".
fn logical_label(value: f32) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawEvent, RecordingCanvas};

    fn rendered(bounds: Bounds) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        AxisGridRenderer::new().draw(&mut canvas, bounds);
        canvas
    }

    #[test]
    fn fills_background_first() {
        let canvas = rendered(Bounds::new(800.0, 600.0));
        assert!(matches!(
            canvas.events.first(),
            Some(DrawEvent::FillRect {
                color: style::BACKGROUND,
                ..
            })
        ));
    }

    #[test]
    fn labels_major_ticks_in_logical_units() {
        let canvas = rendered(Bounds::new(800.0, 600.0));
        let labels: Vec<_> = canvas.texts().collect();

        // Major tick at x = 500: (500 - 400) / 50 = 2.0.
        assert!(labels
            .iter()
            .any(|(t, p)| *t == "2.0" && p.x == 500.0 && p.y == 290.0));
        // Major tick at y = 200: -(200 - 300) / 50 = 2.0.
        assert!(labels
            .iter()
            .any(|(t, p)| *t == "2.0" && p.x == 420.0 && p.y == 205.0));
        // Left of the origin the x labels go negative.
        assert!(labels.iter().any(|(t, p)| *t == "-2.0" && p.x == 300.0));
        // Never a negative zero at the origin.
        assert!(labels.iter().all(|(t, _)| *t != "-0.0"));
    }

    #[test]
    fn sweeps_cover_the_bounds_at_minor_steps() {
        let canvas = rendered(Bounds::new(800.0, 600.0));
        // 20 ticks rightward, 20 leftward (origin revisited), 15 downward,
        // 15 upward, plus the two axis lines. Sweeps exclude the far edges.
        assert_eq!(canvas.line_count(), 20 + 20 + 15 + 15 + 2);
        // 4 + 4 major labels on x, 3 + 3 on y, with "0.0" appearing twice
        // per axis.
        assert_eq!(canvas.texts().count(), 14);
    }

    #[test]
    fn axis_lines_are_drawn_last() {
        let canvas = rendered(Bounds::new(800.0, 600.0));
        let lines: Vec<_> = canvas
            .events
            .iter()
            .filter_map(|e| match e {
                DrawEvent::Line { from, to, stroke } => Some((*from, *to, *stroke)),
                _ => None,
            })
            .collect();
        let (from, to, stroke) = lines[lines.len() - 2];
        assert_eq!(stroke, style::AXIS);
        assert_eq!((from.y, to.y), (300.0, 300.0));
        assert_eq!((from.x, to.x), (0.0, 800.0));
        let (from, to, stroke) = lines[lines.len() - 1];
        assert_eq!(stroke, style::AXIS);
        assert_eq!((from.x, to.x), (400.0, 400.0));
        assert_eq!((from.y, to.y), (0.0, 600.0));
    }

    #[test]
    fn degenerate_bounds_draw_nothing() {
        assert!(rendered(Bounds::new(0.0, 600.0)).events.is_empty());
        assert!(rendered(Bounds::new(800.0, 0.0)).events.is_empty());
        assert!(rendered(Bounds::new(-4.0, -4.0)).events.is_empty());
    }
}
