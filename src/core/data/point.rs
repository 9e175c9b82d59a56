/// A pixel position inside a [`PixelRect`](super::pixel_rect::PixelRect),
/// measured from the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
