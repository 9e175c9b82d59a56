use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::data::colour::Colour;

/// Deep blue to warm orange.
#[derive(Debug, Clone, Copy, Default)]
pub struct Twilight;

impl ColourScheme for Twilight {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Twilight
    }

    fn colour(&self, t: f64, _root: Option<usize>) -> Colour {
        Colour::new(
            Colour::channel(0.05 + 0.85 * t.powf(1.5)),
            Colour::channel(0.1 + 0.4 * t),
            Colour::channel(0.15 + 0.35 * (1.0 - t)),
        )
    }
}
