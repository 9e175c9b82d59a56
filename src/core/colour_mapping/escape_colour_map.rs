use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::colour_for::colour_for;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::fractal_config::FractalConfig;

/// Colours kernel output for one frame.
///
/// Escape-time variants use the smooth estimate when enabled and paint
/// bounded points black. Newton always uses the raw iteration count and
/// its root index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeColourMap {
    scheme: ColourSchemeKind,
    max_iterations: u32,
    smooth_colouring: bool,
    escape_time: bool,
}

impl EscapeColourMap {
    #[must_use]
    pub fn from_config(config: &FractalConfig) -> Self {
        Self {
            scheme: config.colour_scheme,
            max_iterations: config.max_iterations,
            smooth_colouring: config.smooth_colouring,
            escape_time: config.kind.is_escape_time(),
        }
    }
}

impl ColourMap<EscapeResult> for EscapeColourMap {
    fn map(&self, result: EscapeResult) -> Colour {
        let value = if self.escape_time && self.smooth_colouring {
            result.smooth
        } else {
            f64::from(result.iterations)
        };
        let is_in_set = self.escape_time && result.is_in_set(self.max_iterations);

        colour_for(value, self.max_iterations, self.scheme, is_in_set, result.root)
    }

    fn display_name(&self) -> &str {
        self.scheme.display_name()
    }
}
