use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourSchemeKind {
    #[default]
    Nebula,
    Ocean,
    Fire,
    Monochrome,
    Rainbow,
    Twilight,
    Aurora,
    Psychedelic,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::Nebula,
        Self::Ocean,
        Self::Fire,
        Self::Monochrome,
        Self::Rainbow,
        Self::Twilight,
        Self::Aurora,
        Self::Psychedelic,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nebula => "Nebula",
            Self::Ocean => "Ocean Depths",
            Self::Fire => "Inferno",
            Self::Monochrome => "Noir",
            Self::Rainbow => "Spectrum",
            Self::Twilight => "Twilight",
            Self::Aurora => "Aurora",
            Self::Psychedelic => "Psychedelic",
        }
    }

    /// Whether a Newton root index shifts the palette.
    #[must_use]
    pub const fn uses_root_index(self) -> bool {
        matches!(self, Self::Rainbow | Self::Psychedelic)
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
