use super::canvas::{RenderContext, TextRun};
use super::style;

/// Shown whenever the host cannot hand out an immediate-mode canvas.
pub const FALLBACK_MESSAGE: &str = "Canvas capability is unavailable";

const FALLBACK_TEXT_SIZE: f32 = 12.0;

/// Draws a static diagnostic message through the host's retained text
/// path. The run is shaped once at construction and reused every frame the
/// canvas is missing.
pub struct FallbackTextRenderer {
    run: TextRun,
}

impl FallbackTextRenderer {
    pub fn new() -> Self {
        Self {
            run: TextRun::shape(FALLBACK_MESSAGE, FALLBACK_TEXT_SIZE),
        }
    }

    pub fn draw(&self, context: &mut dyn RenderContext) {
        context.draw_text_run(&self.run, style::FALLBACK_TEXT);
    }

    pub fn run(&self) -> &TextRun {
        &self.run
    }
}

impl Default for FallbackTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
