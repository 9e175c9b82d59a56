use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Dimensions of a render target. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPixelRect")]
pub struct PixelRect {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawPixelRect {
    width: u32,
    height: u32,
}

impl TryFrom<RawPixelRect> for PixelRect {
    type Error = PixelRectError;

    fn try_from(raw: RawPixelRect) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(121, 101).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        assert!(PixelRect::new(1, 1).is_ok());
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::new(10, 0),
            Err(PixelRectError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_aspect_ratio() {
        let rect = PixelRect::new(200, 100).unwrap();
        assert_eq!(rect.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_deserialize_rejects_zero_size() {
        let ok: PixelRect = serde_json::from_str(r#"{"width": 4, "height": 3}"#).unwrap();
        assert_eq!(ok, PixelRect::new(4, 3).unwrap());

        let bad = serde_json::from_str::<PixelRect>(r#"{"width": 0, "height": 3}"#);
        assert!(bad.is_err());
    }
}
