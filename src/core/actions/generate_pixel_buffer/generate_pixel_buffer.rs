use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, OPAQUE, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_rect::PixelRect;

/// Generates an RGBA pixel buffer by mapping input values to colours.
///
/// `input` must hold exactly one value per pixel in row-major order.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper.map(value);

        buffer.extend_from_slice(&[r, g, b, OPAQUE]);
    }

    PixelBuffer::from_data(pixel_rect, buffer)
}
