use super::canvas::Canvas;
use super::geom::{Bounds, Point};
use super::style;

/// Strokes one sample buffer as an open polyline across the bounds.
///
/// Vertical layout matches the classic scope look: the midline is the zero
/// level and full-scale samples reach a third of the height either side.
pub struct WaveformRenderer {
    // Reused between frames so the paint path does not allocate.
    points: Vec<Point>,
}

impl WaveformRenderer {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn draw(&mut self, canvas: &mut dyn Canvas, bounds: Bounds, samples: &[f32]) {
        // Fewer than two samples gives no segment and a zero division in
        // the step; draw nothing.
        if !bounds.is_drawable() || samples.len() < 2 {
            return;
        }
        let origin_y = bounds.height / 2.0;
        let amplitude = bounds.height / 3.0;
        let x_step = bounds.width / (samples.len() - 1) as f32;

        self.points.clear();
        self.points.extend(
            samples
                .iter()
                .enumerate()
                .map(|(i, sample)| Point::new(i as f32 * x_step, origin_y - sample * amplitude)),
        );
        canvas.polyline(&self.points, style::WAVEFORM);
    }
}

impl Default for WaveformRenderer {
    fn default() -> Self {
        Self::new()
    }
}
