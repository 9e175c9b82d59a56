use tracing::debug;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_config::{FractalConfig, MAX_RANDOM_SEED};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::JuliaPreset;
use crate::core::fractals::seeded_random::SeededRandom;
use crate::core::viewport::viewport::Viewport;

pub const WHEEL_ZOOM_IN: f64 = 1.25;
pub const WHEEL_ZOOM_OUT: f64 = 0.8;
pub const BUTTON_ZOOM_IN: f64 = 2.0;
pub const BUTTON_ZOOM_OUT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin_x: f64,
    origin_y: f64,
    center: Complex,
}

/// Turns user input into the next config to render.
///
/// Holds the current config and surface size. Every mutator returns the new
/// config so the caller can hand it straight to the scheduler; configs leave
/// this type already sanitised.
#[derive(Debug, Clone)]
pub struct ViewController {
    config: FractalConfig,
    pixel_rect: PixelRect,
    drag: Option<Drag>,
    seed_source: SeededRandom,
}

impl ViewController {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, config: FractalConfig) -> Self {
        let config = config.sanitized();

        Self {
            config,
            pixel_rect,
            drag: None,
            seed_source: SeededRandom::new(config.random_seed),
        }
    }

    #[must_use]
    pub fn config(&self) -> FractalConfig {
        self.config
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::from_config(self.pixel_rect, &self.config)
    }

    #[must_use]
    pub fn request(&self) -> RenderRequest {
        RenderRequest::new(self.pixel_rect, self.config)
    }

    /// Scroll at cursor `(x, y)`: positive `delta_y` zooms out.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> FractalConfig {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };

        self.zoom_at(x, y, factor)
    }

    /// Multiplies the zoom, keeping the plane point under `(x, y)` in place.
    pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) -> FractalConfig {
        let (center, zoom) = self.viewport().zoom_about(x, y, self.config.zoom * factor);
        self.apply(self.config.with_center(center).with_zoom(zoom))
    }

    /// Multiplies the zoom about the current center. Used by the zoom
    /// buttons and by pinch gestures.
    pub fn zoom_by(&mut self, factor: f64) -> FractalConfig {
        self.apply(self.config.with_zoom(self.config.zoom * factor))
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag = Some(Drag {
            origin_x: x,
            origin_y: y,
            center: self.config.center(),
        });
    }

    /// Moves the view so the point grabbed in [`Self::begin_drag`] follows
    /// the pointer. Returns `None` when no drag is active.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<FractalConfig> {
        let drag = self.drag?;
        let anchor = Viewport::new(self.pixel_rect, drag.center, self.config.zoom);
        let center = anchor.pan(x - drag.origin_x, y - drag.origin_y);

        Some(self.apply(self.config.with_center(center)))
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pans by a pixel delta relative to the current view.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> FractalConfig {
        let center = self.viewport().pan(dx, dy);
        self.apply(self.config.with_center(center))
    }

    /// Switches variant and jumps to its default view.
    pub fn set_kind(&mut self, kind: FractalKind) -> FractalConfig {
        self.apply(self.config.with_kind(kind).with_default_view())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> FractalConfig {
        self.apply(self.config.with_max_iterations(max_iterations))
    }

    pub fn set_colour_scheme(&mut self, colour_scheme: ColourSchemeKind) -> FractalConfig {
        self.apply(self.config.with_colour_scheme(colour_scheme))
    }

    pub fn set_julia_constant(&mut self, constant: Complex) -> FractalConfig {
        self.apply(self.config.with_julia_constant(constant))
    }

    pub fn apply_julia_preset(&mut self, preset: JuliaPreset) -> FractalConfig {
        self.set_julia_constant(preset.constant())
    }

    pub fn set_random_seed(&mut self, random_seed: i64) -> FractalConfig {
        self.apply(self.config.with_random_seed(random_seed))
    }

    /// Picks a new seed in `0..=MAX_RANDOM_SEED`. The draws come from a
    /// generator seeded with the initial config, so a given starting state
    /// always yields the same sequence.
    pub fn randomize_seed(&mut self) -> FractalConfig {
        let seed = self.seed_source.next_index(MAX_RANDOM_SEED as usize + 1);
        self.set_random_seed(seed as i64)
    }

    pub fn set_smooth_colouring(&mut self, smooth_colouring: bool) -> FractalConfig {
        self.apply(self.config.with_smooth_colouring(smooth_colouring))
    }

    pub fn reset_view(&mut self) -> FractalConfig {
        self.apply(self.config.with_default_view())
    }

    /// Adopts a new surface size. A zero-sized surface is rejected and the
    /// previous size kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<PixelRect, PixelRectError> {
        self.pixel_rect = PixelRect::new(width, height)?;
        self.drag = None;
        Ok(self.pixel_rect)
    }

    fn apply(&mut self, config: FractalConfig) -> FractalConfig {
        self.config = config.sanitized();
        debug!(
            kind = %self.config.kind,
            zoom = self.config.zoom,
            center_x = self.config.center_x,
            center_y = self.config.center_y,
            "view updated"
        );
        self.config
    }
}
