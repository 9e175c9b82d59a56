use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, Default)]
pub struct Aurora;

impl ColourScheme for Aurora {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Aurora
    }

    // three linear segments: teal to green, green to violet, violet to pale
    fn colour(&self, t: f64, _root: Option<usize>) -> Colour {
        let phase = t * 3.0;

        if phase < 1.0 {
            Colour::new(
                Colour::channel(0.1),
                Colour::channel(0.3 + 0.5 * phase),
                Colour::channel(0.5 + 0.3 * phase),
            )
        } else if phase < 2.0 {
            let p = phase - 1.0;
            Colour::new(
                Colour::channel(0.1 + 0.2 * p),
                Colour::channel(0.8 - 0.2 * p),
                Colour::channel(0.8 - 0.5 * p),
            )
        } else {
            let p = phase - 2.0;
            Colour::new(
                Colour::channel(0.3 + 0.5 * p),
                Colour::channel(0.6 + 0.3 * p),
                Colour::channel(0.3 + 0.3 * p),
            )
        }
    }
}
