use rand::Rng;

use super::bank::WaveformBank;
use super::canvas::{DrawOperation, RenderContext};
use super::fallback::FallbackTextRenderer;
use super::fps::FrameRateEstimator;
use super::geom::{Bounds, Point};
use super::grid::AxisGridRenderer;
use super::style;
use super::waveform::WaveformRenderer;

/// Number of pre-generated waveform buffers in the bank.
pub const WAVEFORM_COUNT: usize = 12;
/// Samples per buffer.
pub const SAMPLES_PER_WAVEFORM: usize = 1000;

/// Everything the widget draws, plus the cross-frame state it needs: the
/// buffer cursor and the FPS accumulator. One instance per widget; nothing
/// here is shared or global.
pub struct ScopeScene {
    bank: WaveformBank,
    grid: AxisGridRenderer,
    waveform: WaveformRenderer,
    fps: FrameRateEstimator,
    fallback: FallbackTextRenderer,
    warned_no_canvas: bool,
}

impl ScopeScene {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            bank: WaveformBank::generate(WAVEFORM_COUNT, SAMPLES_PER_WAVEFORM, rng),
            grid: AxisGridRenderer::new(),
            waveform: WaveformRenderer::new(),
            fps: FrameRateEstimator::new(),
            fallback: FallbackTextRenderer::new(),
            warned_no_canvas: false,
        }
    }

    /// One frame. With a canvas lease: clear, grid, next buffer as a
    /// polyline, FPS overlay, in that fixed order. Without one: fallback
    /// text only. The lease is released when the branch ends, whatever the
    /// draw steps did.
    pub fn render_frame(&mut self, context: &mut dyn RenderContext, bounds: Bounds) {
        let had_canvas = match context.lease_canvas() {
            Some(mut lease) => {
                lease.clear(style::CLEAR);
                self.grid.draw(&mut *lease, bounds);
                let samples = self.bank.next();
                self.waveform.draw(&mut *lease, bounds, samples);
                self.fps.draw_overlay(&mut *lease, bounds);
                true
            }
            None => false,
        };
        if !had_canvas {
            if !self.warned_no_canvas {
                log::warn!("host exposed no canvas capability; drawing fallback text only");
                self.warned_no_canvas = true;
            }
            self.fallback.draw(context);
        }
    }
}

/// The per-frame draw unit submitted to the host scene graph. A plain
/// value: the frame's bounds plus a borrow of the scene it renders.
pub struct ScopeDrawOp<'a> {
    bounds: Bounds,
    scene: &'a mut ScopeScene,
}

impl<'a> ScopeDrawOp<'a> {
    pub fn new(bounds: Bounds, scene: &'a mut ScopeScene) -> Self {
        Self { bounds, scene }
    }
}

impl DrawOperation for ScopeDrawOp<'_> {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    // Purely decorative surface; pointer input passes through.
    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    // Never equal, not even to itself, so the host re-executes every
    // submitted frame instead of caching.
    fn equals(&self, _other: &dyn DrawOperation) -> bool {
        false
    }

    fn render(&mut self, context: &mut dyn RenderContext) {
        self.scene.render_frame(context, self.bounds);
    }

    // Nothing owned beyond what the canvas lease manages.
    fn dispose(&mut self) {}
}
