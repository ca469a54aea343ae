use rand::{rngs::StdRng, Rng, SeedableRng};

use super::bridge::{ScopeDrawOp, ScopeScene};
use super::canvas::DrawOperation;
use super::geom::Bounds;

/// Priority hint for invalidation requests. The frame pump always asks for
/// `Background` so it never starves higher-priority UI work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidationPriority {
    Background,
}

/// What the widget needs from its host: a scene graph that accepts one
/// custom draw unit per paint pass, and a scheduler that will invalidate
/// the widget again later on the UI thread.
pub trait SceneHost {
    fn submit(&mut self, op: &mut dyn DrawOperation);
    fn request_invalidation(&mut self, priority: InvalidationPriority);
}

/// The widget's paint entry point. Each `paint` submits one draw unit for
/// the current bounds and then re-arms the loop with a single background
/// invalidation request, so the widget keeps animating for as long as the
/// host keeps delivering paint callbacks.
pub struct RenderLoopDriver {
    scene: ScopeScene,
}

impl RenderLoopDriver {
    pub fn new() -> Self {
        Self::with_rng(&mut StdRng::from_entropy())
    }

    /// Seam for deterministic buffer generation.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        log::debug!("waveform scope driver created");
        Self {
            scene: ScopeScene::new(rng),
        }
    }

    pub fn paint(&mut self, bounds: Bounds, host: &mut dyn SceneHost) {
        let mut op = ScopeDrawOp::new(bounds, &mut self.scene);
        host.submit(&mut op);
        // Re-arm unconditionally; a frame that fell back to diagnostic
        // text must not stall the loop.
        host.request_invalidation(InvalidationPriority::Background);
    }
}

impl Default for RenderLoopDriver {
    fn default() -> Self {
        Self::new()
    }
}
