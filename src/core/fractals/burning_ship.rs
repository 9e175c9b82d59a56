use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::escape_time;

/// z₀ = 0, zₙ₊₁ = (|Re zₙ| + i|Im zₙ|)² + c.
#[must_use]
pub fn iterate(c: Complex, max_iterations: u32) -> EscapeResult {
    escape_time(Complex::ZERO, max_iterations, |z| {
        let folded = Complex::new(z.real.abs(), z.imag.abs());
        folded * folded + c
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot;

    #[test]
    fn origin_never_escapes() {
        assert!(iterate(Complex::ZERO, 100).is_in_set(100));
    }

    #[test]
    fn matches_mandelbrot_on_the_first_step() {
        // z₁ = c for both, so a point that escapes after one step agrees
        let c = Complex::new(1.5, 1.5);
        assert_eq!(iterate(c, 50), mandelbrot::iterate(c, 50));
    }

    #[test]
    fn differs_from_mandelbrot_when_signs_fold() {
        // c = -0.1 + 0.9i stays bounded for Mandelbrot but the folded
        // imaginary part pushes the ship orbit out
        let c = Complex::new(-0.1, 0.9);
        let ship = iterate(c, 200);
        let mandel = mandelbrot::iterate(c, 200);

        assert_ne!(ship.iterations, mandel.iterations);
    }

    #[test]
    fn is_not_symmetric_about_real_axis() {
        let above = iterate(Complex::new(-1.75, 0.05), 200);
        let below = iterate(Complex::new(-1.75, -0.05), 200);

        assert_ne!(above.iterations, below.iterations);
    }

    #[test]
    fn iteration_count_is_monotonic_in_budget() {
        for c in [Complex::new(-1.7, -0.02), Complex::new(-0.5, -0.5), Complex::new(0.3, 0.1)] {
            let mut previous = 0;
            for max_iterations in [1, 4, 16, 64, 256] {
                let iterations = iterate(c, max_iterations).iterations;
                assert!(iterations >= previous);
                previous = iterations;
            }
        }
    }
}
