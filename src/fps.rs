use std::time::{Duration, Instant};

use super::canvas::Canvas;
use super::geom::{Bounds, Point};
use super::style;

const WINDOW: Duration = Duration::from_secs(1);
const OVERLAY_MARGIN_RIGHT_PX: f32 = 10.0;
const OVERLAY_BASELINE_Y_PX: f32 = 25.0;

/// Smoothed frames-per-second readout. Frames are counted per measurement
/// window; the displayed value only changes when a window of at least one
/// second closes, which keeps the overlay from flickering frame to frame.
pub struct FrameRateEstimator {
    frame_count: u32,
    window_started: Instant,
    fps: f64,
}

impl FrameRateEstimator {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            window_started: Instant::now(),
            fps: 0.0,
        }
    }

    pub fn on_frame_rendered(&mut self) {
        self.frame_count += 1;
    }

    /// Last closed window's value; 0.0 until the first window closes.
    pub fn current_fps(&self) -> f64 {
        self.fps
    }

    /// Draws the readout near the top-right corner, then accounts for the
    /// frame. Called once per rendering pass.
    pub fn draw_overlay(&mut self, canvas: &mut dyn Canvas, bounds: Bounds) {
        if bounds.is_drawable() {
            canvas.text(
                &format!("FPS: {:.1}", self.fps),
                Point::new(
                    bounds.width - OVERLAY_MARGIN_RIGHT_PX,
                    OVERLAY_BASELINE_Y_PX,
                ),
                style::FPS_TEXT,
            );
        }
        self.on_frame_rendered();
        self.refresh();
    }

    fn refresh(&mut self) {
        if self.fold_window(self.window_started.elapsed()) {
            self.window_started = Instant::now();
        }
    }

    /// Folds one elapsed window into the smoothed value; returns whether
    /// the window closed. Takes the duration explicitly so tests can feed
    /// a synthetic clock.
    fn fold_window(&mut self, elapsed: Duration) -> bool {
        if elapsed < WINDOW {
            return false;
        }
        self.fps = f64::from(self.frame_count) / elapsed.as_secs_f64();
        self.frame_count = 0;
        true
    }
}

impl Default for FrameRateEstimator {
    fn default() -> Self {
        Self::new()
    }
}
