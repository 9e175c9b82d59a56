use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished frame to disk in some image format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
