use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::render_frame::{
    RenderFrameError, RenderedFrame, render_frame, render_frame_serial,
};

/// The computation the scheduler runs off the interactive thread.
pub trait FrameRenderPort: Send + Sync {
    fn render(&self, request: &RenderRequest) -> Result<RenderedFrame, RenderFrameError>;
}

/// Renders with the fractal pipeline, rows in parallel unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractalFrameRenderer {
    parallel: bool,
}

impl FractalFrameRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self { parallel: true }
    }

    #[must_use]
    pub fn serial() -> Self {
        Self { parallel: false }
    }
}

impl Default for FractalFrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderPort for FractalFrameRenderer {
    fn render(&self, request: &RenderRequest) -> Result<RenderedFrame, RenderFrameError> {
        if self.parallel {
            render_frame(request.pixel_rect, &request.config)
        } else {
            render_frame_serial(request.pixel_rect, &request.config)
        }
    }
}
