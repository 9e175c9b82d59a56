use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Tricorn,
    Newton,
    Phoenix,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Tricorn,
        Self::Newton,
        Self::Phoenix,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia => "Julia Set",
            Self::BurningShip => "Burning Ship",
            Self::Tricorn => "Tricorn (Mandelbar)",
            Self::Newton => "Newton Fractal",
            Self::Phoenix => "Phoenix Fractal",
        }
    }

    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Mandelbrot => "z(n+1) = z(n)² + c",
            Self::Julia => "z(n+1) = z(n)² + c (fixed)",
            Self::BurningShip => "z(n+1) = (|Re z(n)| + i|Im z(n)|)² + c",
            Self::Tricorn => "z(n+1) = conj(z(n))² + c",
            Self::Newton => "z(n+1) = z(n) - f(z(n)) / f'(z(n))",
            Self::Phoenix => "z(n+1) = z(n)² + c + p·z(n-1)",
        }
    }

    #[must_use]
    pub const fn default_center(self) -> Complex {
        match self {
            Self::Mandelbrot => Complex::new(-0.5, 0.0),
            Self::BurningShip => Complex::new(-0.4, -0.6),
            Self::Tricorn => Complex::new(-0.3, 0.0),
            Self::Julia | Self::Newton | Self::Phoenix => Complex::ZERO,
        }
    }

    #[must_use]
    pub const fn default_zoom(self) -> f64 {
        match self {
            Self::Newton => 0.5,
            Self::Phoenix => 1.2,
            _ => 1.0,
        }
    }

    /// Whether the random seed changes the rendered image.
    #[must_use]
    pub const fn uses_random_seed(self) -> bool {
        matches!(self, Self::Newton | Self::Phoenix)
    }

    /// Escape-time variants paint never-escaping points black; Newton
    /// colours every point by its basin instead.
    #[must_use]
    pub const fn is_escape_time(self) -> bool {
        !matches!(self, Self::Newton)
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
