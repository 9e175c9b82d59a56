use std::time::Duration;

use crate::core::data::fractal_config::FractalConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;

/// A delivered frame. Owns its buffer; nothing else holds a reference to it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub config: FractalConfig,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

impl FrameData {
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_buffer.pixel_rect()
    }

    #[must_use]
    pub fn elapsed_milliseconds(&self) -> f64 {
        self.render_duration.as_secs_f64() * 1_000.0
    }
}
