use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ocean;

impl ColourScheme for Ocean {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Ocean
    }

    fn colour(&self, t: f64, _root: Option<usize>) -> Colour {
        Colour::new(
            Colour::channel(0.0 + 0.2 * t),
            Colour::channel(0.2 + 0.5 * t),
            Colour::channel(0.4 + 0.6 * t),
        )
    }
}
