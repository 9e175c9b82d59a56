use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::escape_time;

/// Named Julia constants offered to the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JuliaPreset {
    Classic,
    Spiral,
    Dragon,
    Rabbit,
}

impl JuliaPreset {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Spiral, Self::Dragon, Self::Rabbit];

    #[must_use]
    pub const fn constant(self) -> Complex {
        match self {
            Self::Classic => Complex::new(-0.7, 0.27015),
            Self::Spiral => Complex::new(-0.8, 0.156),
            Self::Dragon => Complex::new(-0.4, 0.6),
            Self::Rabbit => Complex::new(-0.123, 0.745),
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Spiral => "Spiral",
            Self::Dragon => "Dragon",
            Self::Rabbit => "Rabbit",
        }
    }
}

/// z₀ = the plane point, zₙ₊₁ = zₙ² + c with `c` fixed for the whole image.
#[must_use]
pub fn iterate(z0: Complex, c: Complex, max_iterations: u32) -> EscapeResult {
    escape_time(z0, max_iterations, |z| z * z + c)
}
