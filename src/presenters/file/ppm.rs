use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes frames as binary PPM. Alpha is dropped since P6 has no channel
/// for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn write_to(&self, buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        // P6 header: magic, width and height, max channel value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;

        let rgb: Vec<u8> = buffer.rgb_bytes().collect();
        writer.write_all(&rgb)?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut writer)
    }
}
