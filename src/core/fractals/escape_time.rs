use std::f64::consts::LN_2;

use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;

pub const BAILOUT_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `step` from `z0` until `|z|² >= 4` or the budget runs out.
///
/// `step` receives the current z and returns the next one; kernels that need
/// more history keep it in the closure.
#[inline]
pub fn escape_time<F>(z0: Complex, max_iterations: u32, mut step: F) -> EscapeResult
where
    F: FnMut(Complex) -> Complex,
{
    let mut z = z0;
    let mut iterations = 0;

    while z.magnitude_squared() < BAILOUT_RADIUS_SQUARED && iterations < max_iterations {
        z = step(z);
        iterations += 1;
    }

    if iterations >= max_iterations {
        return EscapeResult::bounded(iterations);
    }

    EscapeResult {
        iterations,
        smooth: smooth_value(iterations, z.magnitude_squared()),
        root: None,
    }
}

/// Continuous escape estimate from the `|z|²` observed at bailout.
#[inline]
#[must_use]
pub fn smooth_value(iterations: u32, magnitude_squared: f64) -> f64 {
    let log_zn = magnitude_squared.ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;

    f64::from(iterations) + 1.0 - nu
}
