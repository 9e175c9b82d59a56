use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is one task. Results come back in the same row-major order as
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let width = pixel_rect.width();

    let rows: Vec<Vec<Alg::Success>> = (0..pixel_rect.height())
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
