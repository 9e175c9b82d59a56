use std::time::{Duration, Instant};

use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::colour_mapping::escape_colour_map::EscapeColourMap;
use crate::core::data::fractal_config::FractalConfig;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::algorithm::FractalFrameAlgorithm;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderFrameError {
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// A finished frame and how long it took to compute.
#[derive(Debug)]
pub struct RenderedFrame {
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

impl RenderedFrame {
    #[must_use]
    pub fn elapsed_milliseconds(&self) -> f64 {
        self.render_duration.as_secs_f64() * 1_000.0
    }
}

/// Renders one frame, computing rows in parallel.
pub fn render_frame(
    pixel_rect: PixelRect,
    config: &FractalConfig,
) -> Result<RenderedFrame, RenderFrameError> {
    let start = Instant::now();
    let algorithm = FractalFrameAlgorithm::new(pixel_rect, config);
    let results = generate_fractal_parallel_rayon(pixel_rect, &algorithm);
    let pixel_buffer =
        generate_pixel_buffer(results, &EscapeColourMap::from_config(config), pixel_rect)?;

    Ok(RenderedFrame {
        pixel_buffer,
        render_duration: start.elapsed(),
    })
}

/// Single-threaded counterpart of [`render_frame`]; output is identical.
pub fn render_frame_serial(
    pixel_rect: PixelRect,
    config: &FractalConfig,
) -> Result<RenderedFrame, RenderFrameError> {
    let start = Instant::now();
    let algorithm = FractalFrameAlgorithm::new(pixel_rect, config);
    let results = generate_fractal_serial(pixel_rect, &algorithm);
    let pixel_buffer =
        generate_pixel_buffer(results, &EscapeColourMap::from_config(config), pixel_rect)?;

    Ok(RenderedFrame {
        pixel_buffer,
        render_duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::kinds::ColourSchemeKind;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::fractal_kinds::FractalKind;

    fn golden_config(max_iterations: u32) -> FractalConfig {
        FractalConfig::default()
            .with_kind(FractalKind::Mandelbrot)
            .with_max_iterations(max_iterations)
            .with_zoom(1.0)
            .with_center(Complex::new(-0.5, 0.0))
            .with_colour_scheme(ColourSchemeKind::Monochrome)
            .with_smooth_colouring(false)
    }

    #[test]
    fn test_golden_two_by_two_single_iteration() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let frame = render_frame(pixel_rect, &golden_config(1)).unwrap();

        // one step never reaches the bailout from z = 0, so every pixel is bounded
        assert_eq!(
            frame.pixel_buffer.buffer(),
            &[0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255]
        );
    }

    #[test]
    fn test_golden_two_by_two_two_iterations() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let frame = render_frame(pixel_rect, &golden_config(2)).unwrap();

        // left column (-2.25, *) escapes after one step: t = 0.5, sqrt -> 180
        assert_eq!(
            frame.pixel_buffer.buffer(),
            &[180, 180, 180, 255, 0, 0, 0, 255, 180, 180, 180, 255, 0, 0, 0, 255]
        );
    }

    #[test]
    fn test_buffer_matches_requested_size() {
        let pixel_rect = PixelRect::new(37, 23).unwrap();
        let frame = render_frame(pixel_rect, &FractalConfig::default()).unwrap();

        assert_eq!(frame.pixel_buffer.pixel_rect(), pixel_rect);
        assert_eq!(frame.pixel_buffer.buffer_size(), 37 * 23 * 4);
        assert!(frame.pixel_buffer.buffer().chunks_exact(4).all(|p| p[3] == 255));
        assert!(frame.elapsed_milliseconds() >= 0.0);
    }

    #[test]
    fn test_parallel_and_serial_agree_for_every_variant() {
        let pixel_rect = PixelRect::new(24, 16).unwrap();

        for &kind in FractalKind::ALL {
            for smooth in [true, false] {
                let config = FractalConfig::default()
                    .with_kind(kind)
                    .with_default_view()
                    .with_max_iterations(60)
                    .with_colour_scheme(ColourSchemeKind::Psychedelic)
                    .with_smooth_colouring(smooth);

                let parallel = render_frame(pixel_rect, &config).unwrap();
                let serial = render_frame_serial(pixel_rect, &config).unwrap();

                assert_eq!(parallel.pixel_buffer, serial.pixel_buffer, "{kind}");
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let pixel_rect = PixelRect::new(16, 12).unwrap();
        let config = FractalConfig::default()
            .with_kind(FractalKind::Phoenix)
            .with_random_seed(7);

        let a = render_frame(pixel_rect, &config).unwrap();
        let b = render_frame(pixel_rect, &config).unwrap();

        assert_eq!(a.pixel_buffer, b.pixel_buffer);
    }

    #[test]
    fn test_newton_frame_has_no_black_pixels_with_bright_palette() {
        // every Newton pixel is coloured by its basin; ocean never yields black
        let pixel_rect = PixelRect::new(12, 12).unwrap();
        let config = FractalConfig::default()
            .with_kind(FractalKind::Newton)
            .with_default_view()
            .with_colour_scheme(ColourSchemeKind::Ocean);

        let frame = render_frame(pixel_rect, &config).unwrap();

        assert!(
            frame
                .pixel_buffer
                .buffer()
                .chunks_exact(4)
                .all(|p| p[..3] != [0, 0, 0])
        );
    }
}
