use crate::camera::CaptureSettings;
use crate::error::ConfigError;
use crate::scene::SceneParams;
use crate::world::TraceSettings;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

fn is_ci() -> bool {
    std::env::var("CI").map(|v| v == "true").unwrap_or_default()
}

pub struct GlobalConfig {
    pub n_jobs_n_workers: (usize, usize),
}

lazy_static! {
    pub static ref CONFIGS: GlobalConfig = GlobalConfig {
        // CI is "true" on GitHub Actions, which only grants two cores
        // jobs: split image into how many parts
        // workers: maximum allowed concurrent running threads
        n_jobs_n_workers: if is_ci() { (32, 2) } else { (64, 8) },
    };
}

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

#[derive(Parser, Debug, Clone)]
#[command(name = "aotracer")]
#[command(about = "Ray traces a random scene of spheres and boxes with soft shadows and ambient occlusion")]
pub struct Args {
    /// Output width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Output height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Sub-pixel grid size; each pixel averages N x N samples
    #[arg(long, short = 's', default_value = "2")]
    pub super_samples: u32,

    /// Number of random shapes
    #[arg(long, default_value = "40")]
    pub shapes: usize,

    /// Number of random area lights
    #[arg(long, default_value = "2")]
    pub lights: usize,

    /// Shadow rays per light per shading point
    #[arg(long, default_value = "16")]
    pub light_samples: u32,

    /// Hemisphere rays per shading point for ambient occlusion
    #[arg(long, default_value = "16")]
    pub indirect_samples: u32,

    /// Maximum number of mirror bounces
    #[arg(long, default_value = "3")]
    pub max_depth: u32,

    /// Radius of the sphere the scene is spawned in
    #[arg(long, default_value = "10.0")]
    pub spawn_radius: f64,

    /// Seed for scene generation and sampling; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of row bands the image is split into
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Number of worker threads
    #[arg(long)]
    pub workers: Option<usize>,

    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub scene: SceneParams,
    pub capture: CaptureSettings,
    pub seed: u64,
    pub output: PathBuf,
}

impl Args {
    pub fn into_config(self) -> Result<RenderConfig, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.super_samples == 0 {
            return Err(ConfigError::ZeroSuperSamples);
        }
        if !(self.spawn_radius.is_finite() && self.spawn_radius > 0.0) {
            return Err(ConfigError::InvalidSpawnRadius(self.spawn_radius));
        }
        let (default_jobs, default_workers) = CONFIGS.n_jobs_n_workers;
        let n_jobs = self.jobs.unwrap_or(default_jobs);
        let n_workers = self.workers.unwrap_or(default_workers);
        if n_jobs == 0 || n_workers == 0 {
            return Err(ConfigError::ZeroConcurrency {
                jobs: n_jobs,
                workers: n_workers,
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        Ok(RenderConfig {
            scene: SceneParams {
                shape_count: self.shapes,
                light_count: self.lights,
                spawn_radius: self.spawn_radius,
                settings: TraceSettings {
                    direct_light_samples: self.light_samples,
                    indirect_light_samples: self.indirect_samples,
                    max_depth: self.max_depth,
                    ..TraceSettings::default()
                },
            },
            capture: CaptureSettings {
                width: self.width as usize,
                height: self.height as usize,
                super_samples: self.super_samples as usize,
                n_jobs,
                n_workers,
                seed,
            },
            seed,
            output: self.output,
        })
    }
}
