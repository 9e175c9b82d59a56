use crate::core::data::point::Point;

/// Per-pixel computation driven by the frame generators.
///
/// Implementations must be pure: the same pixel always yields the same
/// value, whichever thread asks.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
