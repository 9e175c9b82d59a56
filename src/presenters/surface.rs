use std::time::Duration;

use tracing::{debug, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::core::data::pixel_buffer::PixelBufferData;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

/// What happened to an event handed to [`FrameSurface::present`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentOutcome {
    Presented,
    /// Rendered for a size the surface no longer has.
    DimensionMismatch { frame: PixelRect, surface: PixelRect },
    /// Older than the frame already on screen.
    Stale { generation: u64, presented: u64 },
    ErrorRecorded,
}

/// Display-side end of the pipeline.
///
/// Keeps the most recent frame whose size matches the surface. Frames are
/// never scaled; a mismatched or out-of-date frame is dropped.
#[derive(Debug)]
pub struct FrameSurface {
    pixel_rect: PixelRect,
    pixels: Option<PixelBufferData>,
    last_presented_generation: u64,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
}

impl FrameSurface {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            pixels: None,
            last_presented_generation: 0,
            last_render_duration: None,
            last_error_message: None,
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    /// RGBA bytes of the frame on screen, if any.
    #[must_use]
    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    /// Changes the surface size. The current frame no longer fits and is
    /// cleared.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelRectError> {
        let pixel_rect = PixelRect::new(width, height)?;

        if pixel_rect != self.pixel_rect {
            self.pixel_rect = pixel_rect;
            self.pixels = None;
        }

        Ok(())
    }

    pub fn present(&mut self, event: RenderEvent) -> PresentOutcome {
        match event {
            RenderEvent::Frame(frame) => self.present_frame(frame),
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    warn!(generation = error.generation, message = %error.message, "render error");
                    self.last_error_message = Some(error.message);
                }
                PresentOutcome::ErrorRecorded
            }
        }
    }

    fn present_frame(&mut self, frame: FrameData) -> PresentOutcome {
        let frame_rect = frame.pixel_rect();

        if frame_rect != self.pixel_rect {
            debug!(
                generation = frame.generation,
                frame_width = frame_rect.width(),
                frame_height = frame_rect.height(),
                surface_width = self.pixel_rect.width(),
                surface_height = self.pixel_rect.height(),
                "discarding frame with stale dimensions"
            );
            return PresentOutcome::DimensionMismatch {
                frame: frame_rect,
                surface: self.pixel_rect,
            };
        }

        if frame.generation <= self.last_presented_generation {
            debug!(
                generation = frame.generation,
                presented = self.last_presented_generation,
                "discarding out-of-date frame"
            );
            return PresentOutcome::Stale {
                generation: frame.generation,
                presented: self.last_presented_generation,
            };
        }

        self.last_presented_generation = frame.generation;
        self.last_render_duration = Some(frame.render_duration);
        self.last_error_message = None;
        self.pixels = Some(frame.pixel_buffer.into_data());

        PresentOutcome::Presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::errors::render_error::RenderError;
    use crate::core::data::fractal_config::FractalConfig;
    use crate::core::data::pixel_buffer::PixelBuffer;

    fn create_frame(generation: u64, width: u32, height: u32) -> RenderEvent {
        RenderEvent::Frame(FrameData {
            generation,
            config: FractalConfig::default(),
            pixel_buffer: PixelBuffer::new(PixelRect::new(width, height).unwrap()),
            render_duration: Duration::from_millis(3),
        })
    }

    fn create_surface() -> FrameSurface {
        FrameSurface::new(PixelRect::new(4, 2).unwrap())
    }

    #[test]
    fn test_matching_frame_is_presented() {
        let mut surface = create_surface();

        assert_eq!(surface.present(create_frame(1, 4, 2)), PresentOutcome::Presented);
        assert_eq!(surface.pixels().map(<[u8]>::len), Some(4 * 2 * 4));
        assert_eq!(surface.last_presented_generation(), 1);
        assert_eq!(surface.last_render_duration(), Some(Duration::from_millis(3)));
    }

    #[test]
    fn test_mismatched_frame_is_discarded() {
        let mut surface = create_surface();

        let outcome = surface.present(create_frame(1, 5, 2));

        assert_eq!(
            outcome,
            PresentOutcome::DimensionMismatch {
                frame: PixelRect::new(5, 2).unwrap(),
                surface: PixelRect::new(4, 2).unwrap(),
            }
        );
        assert!(surface.pixels().is_none());
    }

    #[test]
    fn test_older_frame_does_not_replace_newer() {
        let mut surface = create_surface();

        surface.present(create_frame(3, 4, 2));
        let outcome = surface.present(create_frame(2, 4, 2));

        assert_eq!(
            outcome,
            PresentOutcome::Stale {
                generation: 2,
                presented: 3
            }
        );
        assert_eq!(surface.last_presented_generation(), 3);
    }

    #[test]
    fn test_resize_drops_frame_and_rejects_old_size() {
        let mut surface = create_surface();
        surface.present(create_frame(1, 4, 2));

        surface.resize(8, 8).unwrap();
        assert!(surface.pixels().is_none());
        assert!(matches!(
            surface.present(create_frame(2, 4, 2)),
            PresentOutcome::DimensionMismatch { .. }
        ));
        assert_eq!(surface.present(create_frame(3, 8, 8)), PresentOutcome::Presented);

        assert!(surface.resize(0, 8).is_err());
        assert_eq!(surface.pixel_rect(), PixelRect::new(8, 8).unwrap());
    }

    #[test]
    fn test_error_is_recorded_until_next_frame() {
        let mut surface = create_surface();

        let outcome = surface.present(RenderEvent::Error(RenderError {
            generation: 1,
            message: String::from("boom"),
        }));
        assert_eq!(outcome, PresentOutcome::ErrorRecorded);
        assert_eq!(surface.last_error_message(), Some("boom"));

        surface.present(create_frame(2, 4, 2));
        assert_eq!(surface.last_error_message(), None);
    }
}
