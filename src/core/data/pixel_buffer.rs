use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;

pub const BYTES_PER_PIXEL: usize = 4;
pub const OPAQUE: u8 = 255;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// RGBA8 pixels in row-major order.
///
/// Deliberately not `Clone`: a buffer is produced once per render and moved
/// to whoever displays it.
#[derive(Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates an opaque black buffer.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let mut buffer = vec![0; pixel_rect_to_buffer_size(pixel_rect)];

        for pixel in buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = OPAQUE;
        }

        Self { pixel_rect, buffer }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Hands the raw bytes to the caller without copying.
    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    /// Iterates the RGB part of every pixel, dropping alpha.
    pub fn rgb_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|pixel| pixel[..3].iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_opaque_black_buffer() {
        let buffer = PixelBuffer::new(create_pixel_rect(10, 10));

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        for pixel in buffer.buffer().chunks_exact(4) {
            assert_eq!(pixel, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 1);
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 0, 255, 255, // (1,0) blue
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer(), data.as_slice());
    }

    #[test]
    fn test_from_data_wrong_size() {
        let pixel_rect = create_pixel_rect(2, 2);
        let result = PixelBuffer::from_data(pixel_rect, vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_into_data_returns_same_allocation() {
        let buffer = PixelBuffer::new(create_pixel_rect(4, 4));
        let ptr = buffer.buffer().as_ptr();
        let data = buffer.into_data();

        assert_eq!(data.as_ptr(), ptr);
    }

    #[test]
    fn test_rgb_bytes_drops_alpha() {
        let data = vec![1, 2, 3, 255, 4, 5, 6, 255];
        let buffer = PixelBuffer::from_data(create_pixel_rect(2, 1), data).unwrap();

        assert_eq!(buffer.rgb_bytes().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }
}
