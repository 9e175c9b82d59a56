use crate::core::colour_mapping::factory::colour_scheme_factory;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

/// Maps an escape value to a colour.
///
/// Points inside the set are black for every scheme. Otherwise `value` is
/// normalised against `max_iterations` and handed to the scheme.
#[must_use]
pub fn colour_for(
    value: f64,
    max_iterations: u32,
    scheme: ColourSchemeKind,
    is_in_set: bool,
    root: Option<usize>,
) -> Colour {
    if is_in_set {
        return Colour::BLACK;
    }

    let t = value / f64::from(max_iterations);
    colour_scheme_factory(scheme).colour(t, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_set_is_black_for_every_scheme() {
        for &scheme in ColourSchemeKind::ALL {
            for value in [0.0, 12.5, 100.0] {
                assert_eq!(colour_for(value, 100, scheme, true, None), Colour::BLACK);
                assert_eq!(colour_for(value, 100, scheme, true, Some(2)), Colour::BLACK);
            }
        }
    }

    #[test]
    fn value_is_normalised_by_max_iterations() {
        // sqrt(0.25) = 0.5 -> floor(127.5)
        assert_eq!(
            colour_for(25.0, 100, ColourSchemeKind::Monochrome, false, None),
            Colour::new(127, 127, 127)
        );
        assert_eq!(
            colour_for(50.0, 200, ColourSchemeKind::Monochrome, false, None),
            Colour::new(127, 127, 127)
        );
    }

    #[test]
    fn root_index_selects_basin_hue() {
        assert_eq!(
            colour_for(0.0, 50, ColourSchemeKind::Rainbow, false, Some(1)),
            Colour::new(13, 242, 13)
        );
        assert_eq!(
            colour_for(0.0, 50, ColourSchemeKind::Rainbow, false, Some(2)),
            Colour::new(13, 13, 242)
        );
    }

    #[test]
    fn values_past_the_budget_saturate() {
        let colour = colour_for(130.0, 100, ColourSchemeKind::Ocean, false, None);
        assert_eq!(colour.b, 255);
    }
}
