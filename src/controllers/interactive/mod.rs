//! Interactive rendering: input handling, scheduling, and delivery of frames.
//!
//! `ViewController` turns user input into configs, `RenderScheduler` runs
//! them off the calling thread with request coalescing, and completed frames
//! come back through a `FrameSink` port.

pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod scheduler;
pub mod view;

pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use events::render_event::RenderEvent;
pub use ports::frame_render_port::{FractalFrameRenderer, FrameRenderPort};
pub use ports::frame_sink::{ChannelFrameSink, FrameSink};
pub use scheduler::{RenderScheduler, SchedulerPhase};
pub use view::ViewController;
