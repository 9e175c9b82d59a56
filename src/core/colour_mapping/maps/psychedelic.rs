use std::f64::consts::PI;

use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::data::colour::Colour;

const ROOT_PHASE: f64 = 0.33;

/// Fast sine bands, five cycles over `t`, channels a third of a cycle apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct Psychedelic;

impl ColourScheme for Psychedelic {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Psychedelic
    }

    fn colour(&self, t: f64, root: Option<usize>) -> Colour {
        let offset = root.map_or(0.0, |root| root as f64 * ROOT_PHASE);

        Colour::new(
            Colour::channel(0.5 + 0.5 * (2.0 * PI * (t * 5.0 + offset)).sin()),
            Colour::channel(0.5 + 0.5 * (2.0 * PI * (t * 5.0 + offset + 0.33)).sin()),
            Colour::channel(0.5 + 0.5 * (2.0 * PI * (t * 5.0 + offset + 0.67)).sin()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_band() {
        assert_eq!(Psychedelic.colour(0.25, None), Colour::new(255, 66, 66));
    }

    #[test]
    fn test_root_shifts_phase() {
        assert_eq!(Psychedelic.colour(0.0, Some(1)), Colour::new(239, 19, 127));
        assert_eq!(Psychedelic.colour(0.0, Some(2)), Colour::new(19, 119, 239));
    }
}
