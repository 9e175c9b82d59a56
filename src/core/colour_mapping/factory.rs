use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourScheme;
use crate::core::colour_mapping::maps::{
    aurora::Aurora, fire::Fire, monochrome::Monochrome, nebula::Nebula, ocean::Ocean,
    psychedelic::Psychedelic, rainbow::Rainbow, twilight::Twilight,
};

// palettes are stateless, so one shared instance per kind is enough
static NEBULA: Nebula = Nebula;
static OCEAN: Ocean = Ocean;
static FIRE: Fire = Fire;
static MONOCHROME: Monochrome = Monochrome;
static RAINBOW: Rainbow = Rainbow;
static TWILIGHT: Twilight = Twilight;
static AURORA: Aurora = Aurora;
static PSYCHEDELIC: Psychedelic = Psychedelic;

#[must_use]
pub fn colour_scheme_factory(kind: ColourSchemeKind) -> &'static dyn ColourScheme {
    match kind {
        ColourSchemeKind::Nebula => &NEBULA,
        ColourSchemeKind::Ocean => &OCEAN,
        ColourSchemeKind::Fire => &FIRE,
        ColourSchemeKind::Monochrome => &MONOCHROME,
        ColourSchemeKind::Rainbow => &RAINBOW,
        ColourSchemeKind::Twilight => &TWILIGHT,
        ColourSchemeKind::Aurora => &AURORA,
        ColourSchemeKind::Psychedelic => &PSYCHEDELIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourSchemeKind::ALL {
            assert_eq!(colour_scheme_factory(kind).kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourSchemeKind::ALL {
            assert_eq!(
                colour_scheme_factory(kind).display_name(),
                kind.display_name()
            );
        }
    }

    #[test]
    fn palette_endpoints_are_reproducible() {
        let expected = [
            (ColourSchemeKind::Nebula, (255, 106, 154), (255, 106, 154)),
            (ColourSchemeKind::Ocean, (0, 51, 102), (51, 178, 255)),
            (ColourSchemeKind::Fire, (0, 0, 0), (255, 255, 252)),
            (ColourSchemeKind::Monochrome, (0, 0, 0), (255, 255, 255)),
            (ColourSchemeKind::Rainbow, (242, 13, 13), (242, 13, 13)),
            (ColourSchemeKind::Twilight, (12, 25, 127), (229, 127, 38)),
            (ColourSchemeKind::Aurora, (25, 76, 127), (204, 229, 153)),
            (ColourSchemeKind::Psychedelic, (127, 239, 15), (127, 239, 15)),
        ];

        for (kind, at_zero, at_one) in expected {
            let scheme = colour_scheme_factory(kind);

            assert_eq!(scheme.colour(0.0, None), Colour::from(at_zero), "{kind} at t=0");
            assert_eq!(scheme.colour(1.0, None), Colour::from(at_one), "{kind} at t=1");
        }
    }

    #[test]
    fn palette_end_colours_differ_between_schemes() {
        let ends: Vec<Colour> = ColourSchemeKind::ALL
            .iter()
            .map(|&kind| colour_scheme_factory(kind).colour(1.0, None))
            .collect();

        for (i, a) in ends.iter().enumerate() {
            for b in &ends[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn root_index_only_shifts_root_aware_schemes() {
        for &kind in ColourSchemeKind::ALL {
            let scheme = colour_scheme_factory(kind);
            let shifted = scheme.colour(0.0, Some(1)) != scheme.colour(0.0, None);

            assert_eq!(shifted, kind.uses_root_index(), "{kind}");
        }
    }
}
