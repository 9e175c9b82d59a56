use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::fractal_config::FractalConfig;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::newton::NewtonPolynomial;
use crate::core::fractals::{burning_ship, julia, mandelbrot, phoenix, tricorn};

/// Per-render iteration kernel with its variant parameters already derived.
///
/// Built once per frame so the Phoenix coefficient and the Newton roots are
/// not recomputed for every pixel.
#[derive(Debug, Clone, PartialEq)]
pub enum Kernel {
    Mandelbrot,
    Julia { constant: Complex },
    BurningShip,
    Tricorn,
    Newton(NewtonPolynomial),
    Phoenix { p: Complex },
}

impl Kernel {
    #[must_use]
    pub fn prepare(config: &FractalConfig) -> Self {
        match config.kind {
            FractalKind::Mandelbrot => Self::Mandelbrot,
            FractalKind::Julia => Self::Julia {
                constant: config.julia_constant,
            },
            FractalKind::BurningShip => Self::BurningShip,
            FractalKind::Tricorn => Self::Tricorn,
            FractalKind::Newton => Self::Newton(NewtonPolynomial::from_seed(config.random_seed)),
            FractalKind::Phoenix => Self::Phoenix {
                p: phoenix::parameter_from_seed(config.random_seed),
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
            Self::BurningShip => FractalKind::BurningShip,
            Self::Tricorn => FractalKind::Tricorn,
            Self::Newton(_) => FractalKind::Newton,
            Self::Phoenix { .. } => FractalKind::Phoenix,
        }
    }

    #[inline]
    #[must_use]
    pub fn iterate(&self, point: Complex, max_iterations: u32) -> EscapeResult {
        match self {
            Self::Mandelbrot => mandelbrot::iterate(point, max_iterations),
            Self::Julia { constant } => julia::iterate(point, *constant, max_iterations),
            Self::BurningShip => burning_ship::iterate(point, max_iterations),
            Self::Tricorn => tricorn::iterate(point, max_iterations),
            Self::Newton(polynomial) => polynomial.iterate(point, max_iterations),
            Self::Phoenix { p } => phoenix::iterate(point, *p, max_iterations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_matches_config_kind() {
        for &kind in FractalKind::ALL {
            let config = FractalConfig::default().with_kind(kind);
            assert_eq!(Kernel::prepare(&config).kind(), kind);
        }
    }

    #[test]
    fn julia_carries_configured_constant() {
        let constant = Complex::new(-0.8, 0.156);
        let config = FractalConfig::default()
            .with_kind(FractalKind::Julia)
            .with_julia_constant(constant);

        assert_eq!(Kernel::prepare(&config), Kernel::Julia { constant });
    }

    #[test]
    fn newton_power_follows_seed() {
        let config = FractalConfig::default()
            .with_kind(FractalKind::Newton)
            .with_random_seed(13);

        match Kernel::prepare(&config) {
            Kernel::Newton(polynomial) => assert_eq!(polynomial.power(), 5),
            other => panic!("expected Newton kernel, got {other:?}"),
        }
    }

    #[test]
    fn only_newton_reports_roots() {
        let point = Complex::new(0.4, 0.3);

        for &kind in FractalKind::ALL {
            let kernel = Kernel::prepare(&FractalConfig::default().with_kind(kind));
            let result = kernel.iterate(point, 50);

            assert_eq!(result.root.is_some(), kind == FractalKind::Newton);
        }
    }

    #[test]
    fn dispatch_matches_variant_functions() {
        let point = Complex::new(-0.75, 0.12);
        let config = FractalConfig::default();

        assert_eq!(
            Kernel::prepare(&config.with_kind(FractalKind::Mandelbrot)).iterate(point, 200),
            mandelbrot::iterate(point, 200)
        );
        assert_eq!(
            Kernel::prepare(&config.with_kind(FractalKind::Tricorn)).iterate(point, 200),
            tricorn::iterate(point, 200)
        );
        assert_eq!(
            Kernel::prepare(&config.with_kind(FractalKind::Phoenix)).iterate(point, 200),
            phoenix::iterate(point, phoenix::parameter_from_seed(42), 200)
        );
    }

    #[test]
    fn all_variants_are_monotonic_in_budget() {
        let points = [
            Complex::new(-0.75, 0.1),
            Complex::new(0.3, -0.5),
            Complex::new(-1.6, -0.02),
        ];

        for &kind in FractalKind::ALL {
            let kernel = Kernel::prepare(&FractalConfig::default().with_kind(kind));

            for point in points {
                let mut previous = 0;
                for max_iterations in [1, 3, 10, 30, 100, 300] {
                    let iterations = kernel.iterate(point, max_iterations).iterations;
                    assert!(iterations >= previous, "{kind} at {point:?}");
                    previous = iterations;
                }
            }
        }
    }
}
