#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts a unit-range channel intensity to a byte by flooring and
    /// saturating at both ends. NaN maps to 0.
    #[inline]
    #[must_use]
    pub fn channel(intensity: f64) -> u8 {
        (255.0 * intensity).floor() as u8
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_floors_scaled_value() {
        assert_eq!(Colour::channel(0.5), 127);
        assert_eq!(Colour::channel(1.0), 255);
        assert_eq!(Colour::channel(0.0), 0);
    }

    #[test]
    fn channel_saturates_out_of_range_values() {
        assert_eq!(Colour::channel(-0.3), 0);
        assert_eq!(Colour::channel(1.7), 255);
        assert_eq!(Colour::channel(f64::NAN), 0);
        assert_eq!(Colour::channel(f64::NEG_INFINITY), 0);
    }
}
