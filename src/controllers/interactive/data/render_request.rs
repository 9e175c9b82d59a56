use crate::core::data::fractal_config::FractalConfig;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

/// One frame to render: target size plus the config snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub pixel_rect: PixelRect,
    pub config: FractalConfig,
}

impl RenderRequest {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, config: FractalConfig) -> Self {
        Self { pixel_rect, config }
    }

    pub fn with_size(
        width: u32,
        height: u32,
        config: FractalConfig,
    ) -> Result<Self, PixelRectError> {
        Ok(Self::new(PixelRect::new(width, height)?, config))
    }
}
