use thiserror::Error;

use crate::core::actions::render_frame::RenderFrameError;
use crate::core::data::fractal_config::ConfigError;
use crate::core::data::pixel_rect::PixelRectError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid image size: {0}")]
    PixelRect(#[from] PixelRectError),
    #[error("render failed: {0}")]
    Render(#[from] RenderFrameError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("nothing rendered yet")]
    NothingRendered,
}
