use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

/// A closed-form palette over the normalised escape value `t`.
///
/// `t` is nominally in `[0, 1]` but smooth colouring can push it slightly
/// outside; implementations saturate rather than fail. `root` is only
/// present for Newton renders.
pub trait ColourScheme: Send + Sync {
    fn kind(&self) -> ColourSchemeKind;

    fn colour(&self, t: f64, root: Option<usize>) -> Colour;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
