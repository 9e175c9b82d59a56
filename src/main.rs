use std::path::PathBuf;

use clap::Parser;
use fractal_forge::{
    CliRenderController, ColourSchemeKind, Complex, FractalConfig, FractalKind, PpmFilePresenter,
};
use tracing_subscriber::EnvFilter;

/// Render an escape-time or Newton fractal to a PPM image.
#[derive(Debug, Parser)]
#[command(name = "fractal_forge", version, about)]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(short, long, env = "FRACTAL_FORGE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// mandelbrot, julia, burningShip, tricorn, newton or phoenix
    #[arg(short, long, value_parser = parse_identifier::<FractalKind>)]
    kind: Option<FractalKind>,

    #[arg(short = 'i', long)]
    max_iterations: Option<u32>,

    #[arg(short, long)]
    zoom: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    center_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    center_y: Option<f64>,

    /// nebula, ocean, fire, monochrome, rainbow, twilight, aurora or psychedelic
    #[arg(short, long, value_parser = parse_identifier::<ColourSchemeKind>)]
    scheme: Option<ColourSchemeKind>,

    #[arg(long, allow_negative_numbers = true)]
    julia_real: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    julia_imag: Option<f64>,

    /// Clamped to 0..=100
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    #[arg(long)]
    smooth: Option<bool>,

    /// Compute rows on a single thread
    #[arg(long)]
    serial: bool,

    /// Print the effective config as JSON instead of rendering
    #[arg(long)]
    print_config: bool,

    /// List fractal variants and colour schemes
    #[arg(long)]
    list: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_identifier<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_owned()))
        .map_err(|_| format!("unknown identifier `{value}`"))
}

impl Args {
    fn effective_config(&self) -> Result<FractalConfig, fractal_forge::ConfigError> {
        let mut config = match &self.config {
            Some(path) => FractalConfig::from_file(path)?,
            None => FractalConfig::default(),
        };

        if let Some(kind) = self.kind {
            // switching variant without an explicit view starts at its defaults
            config = config.with_kind(kind).with_default_view();
        }
        if let Some(max_iterations) = self.max_iterations {
            config = config.with_max_iterations(max_iterations);
        }
        if let Some(zoom) = self.zoom {
            config = config.with_zoom(zoom);
        }
        let center = Complex::new(
            self.center_x.unwrap_or(config.center_x),
            self.center_y.unwrap_or(config.center_y),
        );
        config = config.with_center(center);
        if let Some(scheme) = self.scheme {
            config = config.with_colour_scheme(scheme);
        }
        let julia_constant = Complex::new(
            self.julia_real.unwrap_or(config.julia_constant.real),
            self.julia_imag.unwrap_or(config.julia_constant.imag),
        );
        config = config.with_julia_constant(julia_constant);
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(smooth) = self.smooth {
            config = config.with_smooth_colouring(smooth);
        }

        Ok(config.sanitized())
    }
}

fn print_catalogue() {
    println!("Fractals:");
    for kind in FractalKind::ALL {
        println!("  {:<16} {}", kind.display_name(), kind.formula());
    }

    println!("Colour schemes:");
    for scheme in ColourSchemeKind::ALL {
        println!("  {}", scheme.display_name());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.list {
        print_catalogue();
        return Ok(());
    }

    let config = args.effective_config()?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut controller =
        CliRenderController::new(PpmFilePresenter::new()).with_parallel(!args.serial);
    controller.render(args.width, args.height, &config)?;
    controller.write(&args.output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "fractal_forge",
            "--kind",
            "burningShip",
            "--scheme",
            "fire",
            "--center-x",
            "-1.75",
            "--seed",
            "500",
        ]);

        let config = args.effective_config().unwrap();

        assert_eq!(config.kind, FractalKind::BurningShip);
        assert_eq!(config.colour_scheme, ColourSchemeKind::Fire);
        assert_eq!(config.center_x, -1.75);
        assert_eq!(config.center_y, -0.6);
        assert_eq!(config.random_seed, 100);
    }

    #[test]
    fn test_negative_seed_is_clamped_to_zero() {
        let args = Args::parse_from(["fractal_forge", "--seed", "-5"]);

        assert_eq!(args.effective_config().unwrap().random_seed, 0);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Args::try_parse_from(["fractal_forge", "--kind", "sierpinski"]).is_err());
    }

    #[test]
    fn test_config_file_is_loaded_before_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.json");
        std::fs::write(&path, r#"{ "type": "julia", "maxIterations": 40, "zoom": 3.0 }"#).unwrap();

        let args = Args::parse_from([
            "fractal_forge",
            "--config",
            path.to_str().unwrap(),
            "--zoom",
            "6",
        ]);
        let config = args.effective_config().unwrap();

        assert_eq!(config.kind, FractalKind::Julia);
        assert_eq!(config.max_iterations, 40);
        assert_eq!(config.zoom, 6.0);
    }
}
