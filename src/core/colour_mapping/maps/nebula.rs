use std::f64::consts::PI;

use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::data::colour::Colour;

/// Cosine palette running purple through cyan, periodic in `t`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nebula;

impl ColourScheme for Nebula {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Nebula
    }

    fn colour(&self, t: f64, _root: Option<usize>) -> Colour {
        Colour::new(
            Colour::channel(0.5 + 0.5 * (2.0 * PI * (t + 0.0)).cos()),
            Colour::channel(0.3 + 0.2 * (2.0 * PI * (t + 0.15)).cos()),
            Colour::channel(0.7 + 0.3 * (2.0 * PI * (t + 0.3)).cos()),
        )
    }
}
