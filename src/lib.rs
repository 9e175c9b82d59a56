pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::cli::errors::CliError;
pub use controllers::cli::render::CliRenderController;
pub use controllers::interactive::{
    ChannelFrameSink, FractalFrameRenderer, FrameData, FrameRenderPort, FrameSink, RenderEvent,
    RenderRequest, RenderScheduler, SchedulerPhase, ViewController,
};
pub use core::actions::render_frame::{RenderFrameError, RenderedFrame, render_frame};
pub use core::colour_mapping::kinds::ColourSchemeKind;
pub use core::data::complex::Complex;
pub use core::data::fractal_config::{ConfigError, FractalConfig};
pub use core::data::pixel_buffer::PixelBuffer;
pub use core::data::pixel_rect::PixelRect;
pub use core::fractals::fractal_kinds::FractalKind;
pub use core::fractals::julia::JuliaPreset;
pub use core::viewport::viewport::Viewport;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::surface::{FrameSurface, PresentOutcome};
