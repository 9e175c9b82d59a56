use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 1e15;
pub const MAX_RANDOM_SEED: u32 = 100;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_RANDOM_SEED: u32 = 42;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex {
    real: -0.7,
    imag: 0.27015,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Every parameter a single frame depends on.
///
/// Treated as a value: interaction code builds a new config per change
/// rather than mutating one that has been handed to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FractalConfig {
    #[serde(rename = "type")]
    pub kind: FractalKind,
    pub max_iterations: u32,
    pub zoom: f64,
    pub center_x: f64,
    pub center_y: f64,
    #[serde(rename = "colorScheme")]
    pub colour_scheme: ColourSchemeKind,
    #[serde(rename = "juliaC")]
    pub julia_constant: Complex,
    #[serde(deserialize_with = "deserialize_seed")]
    pub random_seed: u32,
    #[serde(rename = "smoothColoring")]
    pub smooth_colouring: bool,
}

impl Default for FractalConfig {
    fn default() -> Self {
        let kind = FractalKind::default();
        let center = kind.default_center();

        Self {
            kind,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom: kind.default_zoom(),
            center_x: center.real,
            center_y: center.imag,
            colour_scheme: ColourSchemeKind::default(),
            julia_constant: DEFAULT_JULIA_CONSTANT,
            random_seed: DEFAULT_RANDOM_SEED,
            smooth_colouring: true,
        }
    }
}

#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MIN_ZOOM;
    }

    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Brings a user-supplied seed, possibly negative, into `0..=MAX_RANDOM_SEED`.
#[must_use]
pub fn clamp_seed(seed: i64) -> u32 {
    // bounded by MAX_RANDOM_SEED so the narrowing is lossless
    seed.clamp(0, i64::from(MAX_RANDOM_SEED)) as u32
}

fn deserialize_seed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(clamp_seed)
}

impl FractalConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Brings interactive inputs back into the ranges the renderer accepts.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.zoom = clamp_zoom(self.zoom);
        self.random_seed = self.random_seed.min(MAX_RANDOM_SEED);
        self.max_iterations = self.max_iterations.max(1);
        self
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_x, self.center_y)
    }

    #[must_use]
    pub fn with_kind(self, kind: FractalKind) -> Self {
        Self { kind, ..self }
    }

    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            ..self
        }
    }

    #[must_use]
    pub fn with_center(self, center: Complex) -> Self {
        Self {
            center_x: center.real,
            center_y: center.imag,
            ..self
        }
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
            ..self
        }
    }

    #[must_use]
    pub fn with_colour_scheme(self, colour_scheme: ColourSchemeKind) -> Self {
        Self {
            colour_scheme,
            ..self
        }
    }

    #[must_use]
    pub fn with_julia_constant(self, julia_constant: Complex) -> Self {
        Self {
            julia_constant,
            ..self
        }
    }

    #[must_use]
    pub fn with_random_seed(self, random_seed: i64) -> Self {
        Self {
            random_seed: clamp_seed(random_seed),
            ..self
        }
    }

    #[must_use]
    pub fn with_smooth_colouring(self, smooth_colouring: bool) -> Self {
        Self {
            smooth_colouring,
            ..self
        }
    }

    /// Restores the selected variant's default center and zoom.
    #[must_use]
    pub fn with_default_view(self) -> Self {
        self.with_center(self.kind.default_center())
            .with_zoom(self.kind.default_zoom())
    }
}
