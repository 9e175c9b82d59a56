use std::f64::consts::PI;

use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::seeded_random::SeededRandom;

pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;
pub const DEGENERATE_DERIVATIVE: f64 = 1e-12;

const MIN_POWER: u32 = 3;
const POWER_CHOICES: u32 = 3;

/// zᵖ − 1 with its roots of unity, fixed for a whole render.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    power: u32,
    roots: Vec<Complex>,
}

impl NewtonPolynomial {
    #[must_use]
    pub fn new(power: u32) -> Self {
        let roots = (0..power)
            .map(|index| Complex::from_angle(2.0 * PI * f64::from(index) / f64::from(power)))
            .collect();

        Self { power, roots }
    }

    /// Picks p ∈ {3, 4, 5} from the first draw of the seeded generator.
    #[must_use]
    pub fn from_seed(seed: u32) -> Self {
        let mut random = SeededRandom::new(seed);
        let choice = random.next_index(POWER_CHOICES as usize) as u32;

        Self::new(MIN_POWER + choice)
    }

    #[must_use]
    pub fn power(&self) -> u32 {
        self.power
    }

    #[must_use]
    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    /// Runs Newton's method from `z0` and reports the root it settled on.
    ///
    /// Points that hit a flat derivative or run out of iterations are
    /// assigned the nearest root instead.
    #[must_use]
    pub fn iterate(&self, z0: Complex, max_iterations: u32) -> EscapeResult {
        let mut z = z0;
        let mut iterations = 0;

        while iterations < max_iterations {
            if let Some(root) = self.converged_root(z) {
                return EscapeResult::converged(iterations, root);
            }

            let mut z_pow = Complex::ONE;
            for _ in 1..self.power {
                z_pow = z_pow * z;
            }

            let z_full = z_pow * z;
            let f = Complex::new(z_full.real - 1.0, z_full.imag);
            let f_prime = z_pow.scale(f64::from(self.power));

            if f_prime.magnitude_squared() < DEGENERATE_DERIVATIVE {
                break;
            }

            z = z - f / f_prime;
            iterations += 1;
        }

        EscapeResult::converged(iterations, self.nearest_root(z))
    }

    fn converged_root(&self, z: Complex) -> Option<usize> {
        self.roots
            .iter()
            .position(|root| z.distance(*root) < CONVERGENCE_TOLERANCE)
    }

    fn nearest_root(&self, z: Complex) -> usize {
        let mut nearest = 0;
        let mut nearest_distance = f64::INFINITY;

        for (index, root) in self.roots.iter().enumerate() {
            let distance = z.distance(*root);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = index;
            }
        }

        nearest
    }
}
