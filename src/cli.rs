use clap::{Parser, ValueEnum};
use cornell_box::integrator::Integrator;
use cornell_box::renderer::RenderSettings;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IntegratorKind {
    Recursive,
    Iterative,
}

impl From<IntegratorKind> for Integrator {
    fn from(kind: IntegratorKind) -> Self {
        match kind {
            IntegratorKind::Recursive => Integrator::Recursive,
            IntegratorKind::Iterative => Integrator::Iterative,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cornell_box")]
#[command(about = "Path-traced render of the boxed-room scene, written as plain PPM")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Width over height; the height is derived from it
    #[arg(long, default_value_t = 1.0, value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 10)]
    pub max_depth: u32,

    /// Seed for the random generator; equal seeds give identical images
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// PPM output file (standard output when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export recorded light paths to this OBJ file
    #[arg(long)]
    pub paths: Option<PathBuf>,

    /// Number of light paths to record when --paths is given
    #[arg(long, default_value_t = 20)]
    pub path_count: usize,

    #[arg(long, value_enum, default_value = "recursive")]
    pub integrator: IntegratorKind,

    /// Worker threads (rayon default when omitted)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}

fn parse_aspect_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("aspect ratio must be a positive finite number, got {s}"))
    }
}

impl Args {
    /// Truncates like an integer cast, never below one row.
    pub fn image_height(&self) -> u32 {
        ((self.width as f64 / self.aspect_ratio) as u32).max(1)
    }

    /// Ratio of the image actually produced, after the height was rounded down.
    pub fn image_aspect_ratio(&self) -> f64 {
        self.width as f64 / self.image_height() as f64
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            image_width: self.width,
            image_height: self.image_height(),
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            seed: self.seed,
            integrator: self.integrator.into(),
        }
    }
}
