use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::escape_time;

/// Fixed additive constant of the classic Phoenix map.
pub const PHOENIX_CONSTANT: Complex = Complex::new(0.5667, 0.0);

/// Derives the feedback coefficient `p` from the render seed.
#[must_use]
pub fn parameter_from_seed(seed: u32) -> Complex {
    let seed = f64::from(seed);
    Complex::new(-0.5 + 0.5 * seed.sin(), 0.1 * (seed * 2.0).cos())
}

/// z₀ = the plane point, z₋₁ = 0, zₙ₊₁ = zₙ² + c + p·zₙ₋₁.
#[must_use]
pub fn iterate(z0: Complex, p: Complex, max_iterations: u32) -> EscapeResult {
    let mut previous = Complex::ZERO;

    escape_time(z0, max_iterations, |z| {
        let next = Complex::new(
            z.real * z.real - z.imag * z.imag + PHOENIX_CONSTANT.real + p.real * previous.real
                - p.imag * previous.imag,
            2.0 * z.real * z.imag
                + PHOENIX_CONSTANT.imag
                + p.real * previous.imag
                + p.imag * previous.real,
        );
        previous = z;
        next
    })
}
