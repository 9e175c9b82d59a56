use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, Default)]
pub struct Monochrome;

impl ColourScheme for Monochrome {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Monochrome
    }

    fn colour(&self, t: f64, _root: Option<usize>) -> Colour {
        let value = Colour::channel(t.powf(0.5));
        Colour::new(value, value, value)
    }
}
