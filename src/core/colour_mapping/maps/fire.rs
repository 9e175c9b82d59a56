use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::data::colour::Colour;

/// Black through red and yellow to near white, one channel ramping per third.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fire;

impl ColourScheme for Fire {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Fire
    }

    fn colour(&self, t: f64, _root: Option<usize>) -> Colour {
        Colour::new(
            Colour::channel((t * 3.0).min(1.0)),
            Colour::channel(((t - 0.33) * 3.0).clamp(0.0, 1.0)),
            Colour::channel(((t - 0.67) * 3.0).clamp(0.0, 1.0)),
        )
    }
}
