//! Self-animating waveform scope: a labeled axis grid, a cycling bank of
//! pre-generated sample buffers, and an FPS overlay, drawn through a small
//! host-canvas abstraction so any immediate-mode backend can render it.

pub mod bank;
pub mod bridge;
pub mod canvas;
pub mod driver;
pub mod fallback;
pub mod fps;
pub mod geom;
pub mod grid;
pub mod style;
pub mod waveform;

#[cfg(feature = "egui")]
pub mod egui_backend;

#[cfg(test)]
mod testing;

pub use bank::WaveformBank;
pub use bridge::{ScopeDrawOp, ScopeScene, SAMPLES_PER_WAVEFORM, WAVEFORM_COUNT};
pub use canvas::{Canvas, CanvasLease, DrawOperation, RenderContext, TextRun};
pub use driver::{InvalidationPriority, RenderLoopDriver, SceneHost};
pub use fallback::{FallbackTextRenderer, FALLBACK_MESSAGE};
pub use fps::FrameRateEstimator;
pub use geom::{Bounds, Color, Point, Stroke, TextAlign, TextStyle};
pub use grid::AxisGridRenderer;
pub use waveform::WaveformRenderer;
