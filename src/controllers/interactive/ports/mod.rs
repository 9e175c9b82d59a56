//! Port definitions for the interactive controller.
//!
//! Traits at the boundary between the scheduler and the code that computes
//! or consumes frames.

pub mod frame_render_port;
pub mod frame_sink;
