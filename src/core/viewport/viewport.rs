use crate::core::data::complex::Complex;
use crate::core::data::fractal_config::{FractalConfig, clamp_zoom};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Width of the plane visible at zoom 1.
pub const BASE_RANGE: f64 = 3.5;

/// Maps pixels of a render target onto the complex plane.
///
/// The visible width is `3.5 / zoom`; the height follows the target's aspect
/// ratio so pixels stay square. Pixel `(0, 0)` maps to the top-left corner
/// of the visible region and the imaginary axis grows downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pixel_rect: PixelRect,
    center: Complex,
    zoom: f64,
    range_x: f64,
    range_y: f64,
    x_min: f64,
    y_min: f64,
    x_step: f64,
    y_step: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, center: Complex, zoom: f64) -> Self {
        let width = f64::from(pixel_rect.width());
        let height = f64::from(pixel_rect.height());
        let range_x = BASE_RANGE / zoom;
        let range_y = range_x / pixel_rect.aspect_ratio();
        let x_min = center.real - range_x / 2.0;
        let y_min = center.imag - range_y / 2.0;

        Self {
            pixel_rect,
            center,
            zoom,
            range_x,
            range_y,
            x_min,
            y_min,
            x_step: range_x / width,
            y_step: range_y / height,
        }
    }

    #[must_use]
    pub fn from_config(pixel_rect: PixelRect, config: &FractalConfig) -> Self {
        Self::new(pixel_rect, config.center(), config.zoom)
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn range_x(&self) -> f64 {
        self.range_x
    }

    #[must_use]
    pub fn range_y(&self) -> f64 {
        self.range_y
    }

    /// Plane point under the top-left corner of `pixel`.
    #[inline]
    #[must_use]
    pub fn map_pixel(&self, pixel: Point) -> Complex {
        Complex::new(
            self.x_min + f64::from(pixel.x) * self.x_step,
            self.y_min + f64::from(pixel.y) * self.y_step,
        )
    }

    /// Like [`Self::map_pixel`] but for sub-pixel positions such as a cursor.
    #[must_use]
    pub fn map_position(&self, x: f64, y: f64) -> Complex {
        Complex::new(self.x_min + x * self.x_step, self.y_min + y * self.y_step)
    }

    /// Inverse of [`Self::map_position`].
    #[must_use]
    pub fn plane_to_position(&self, point: Complex) -> (f64, f64) {
        (
            (point.real - self.x_min) / self.x_step,
            (point.imag - self.y_min) / self.y_step,
        )
    }

    /// Center that keeps the plane point under `(x, y)` fixed when the zoom
    /// changes to `new_zoom`. Returns the clamped zoom alongside it.
    #[must_use]
    pub fn zoom_about(&self, x: f64, y: f64, new_zoom: f64) -> (Complex, f64) {
        let new_zoom = clamp_zoom(new_zoom);
        let fraction_x = x / f64::from(self.pixel_rect.width());
        let fraction_y = y / f64::from(self.pixel_rect.height());
        let anchor = self.map_position(x, y);

        let new_range_x = BASE_RANGE / new_zoom;
        let new_range_y = new_range_x / self.pixel_rect.aspect_ratio();

        let center = Complex::new(
            anchor.real - (fraction_x - 0.5) * new_range_x,
            anchor.imag - (fraction_y - 0.5) * new_range_y,
        );

        (center, new_zoom)
    }

    /// Center after dragging the image by `(dx, dy)` pixels.
    #[must_use]
    pub fn pan(&self, dx: f64, dy: f64) -> Complex {
        Complex::new(
            self.center.real - (dx / f64::from(self.pixel_rect.width())) * self.range_x,
            self.center.imag - (dy / f64::from(self.pixel_rect.height())) * self.range_y,
        )
    }
}
