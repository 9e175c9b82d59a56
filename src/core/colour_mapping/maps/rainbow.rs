use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::colour_mapping::maps::hsl::hsl_to_rgb;
use crate::core::data::colour::Colour;

const SATURATION: f64 = 0.9;
const LIGHTNESS: f64 = 0.5;

/// Full hue sweep. With a Newton root each basin gets its own third of the
/// wheel and `t` only nudges the hue within it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rainbow;

impl ColourScheme for Rainbow {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Rainbow
    }

    fn colour(&self, t: f64, root: Option<usize>) -> Colour {
        let hue = match root {
            Some(root) => (root as f64 / 3.0 + t * 0.3) % 1.0,
            None => t,
        };

        hsl_to_rgb(hue, SATURATION, LIGHTNESS)
    }
}
