use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::fractal_config::FractalConfig;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::kernel::Kernel;
use crate::core::viewport::viewport::Viewport;

/// Viewport mapping plus the prepared kernel for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalFrameAlgorithm {
    viewport: Viewport,
    kernel: Kernel,
    max_iterations: u32,
}

impl FractalFrameAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, config: &FractalConfig) -> Self {
        Self {
            viewport: Viewport::from_config(pixel_rect, config),
            kernel: Kernel::prepare(config),
            max_iterations: config.max_iterations,
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.viewport.pixel_rect()
    }

    #[must_use]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

impl FractalAlgorithm for FractalFrameAlgorithm {
    type Success = EscapeResult;

    fn compute(&self, pixel: Point) -> Self::Success {
        self.kernel
            .iterate(self.viewport.map_pixel(pixel), self.max_iterations)
    }
}
