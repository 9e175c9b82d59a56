use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::escape_time;

/// z₀ = 0, zₙ₊₁ = conj(zₙ)² + c.
#[must_use]
pub fn iterate(c: Complex, max_iterations: u32) -> EscapeResult {
    escape_time(Complex::ZERO, max_iterations, |z| {
        let conjugate = z.conj();
        conjugate * conjugate + c
    })
}
