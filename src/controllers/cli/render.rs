use std::path::Path;

use tracing::info;

use crate::controllers::cli::errors::CliError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::{RenderedFrame, render_frame, render_frame_serial};
use crate::core::data::fractal_config::FractalConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;

/// Renders a single frame and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    parallel: bool,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            parallel: true,
            buffer: None,
        }
    }

    #[must_use]
    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    pub fn generate(
        &self,
        width: u32,
        height: u32,
        config: &FractalConfig,
    ) -> Result<RenderedFrame, CliError> {
        let pixel_rect = PixelRect::new(width, height)?;
        let config = config.sanitized();

        info!(
            kind = %config.kind,
            width,
            height,
            max_iterations = config.max_iterations,
            zoom = config.zoom,
            center_x = config.center_x,
            center_y = config.center_y,
            colour_scheme = %config.colour_scheme,
            parallel = self.parallel,
            "rendering"
        );

        let frame = if self.parallel {
            render_frame(pixel_rect, &config)?
        } else {
            render_frame_serial(pixel_rect, &config)?
        };

        info!(elapsed_ms = frame.elapsed_milliseconds(), "render complete");

        Ok(frame)
    }

    /// Renders and keeps the buffer for a later [`Self::write`].
    pub fn render(
        &mut self,
        width: u32,
        height: u32,
        config: &FractalConfig,
    ) -> Result<f64, CliError> {
        let frame = self.generate(width, height, config)?;
        let elapsed = frame.elapsed_milliseconds();
        self.buffer = Some(frame.pixel_buffer);
        Ok(elapsed)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliError> {
        let buffer = self.buffer.as_ref().ok_or(CliError::NothingRendered)?;
        let filepath = filepath.as_ref();

        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "image written");

        Ok(())
    }
}
