#![allow(clippy::float_cmp)]
#[macro_use]
extern crate lazy_static;

mod camera;
mod config;
mod error;
mod light;
mod logger;
mod material;
mod objects;
mod ray;
mod scene;
mod vec3;
mod world;

use anyhow::Context;
use clap::Parser;
use config::Args;
use error::RenderError;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
pub use ray::Ray;
use std::sync::Arc;
use std::time::Instant;
pub use vec3::Vec3;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.clone().into());
    let config = args
        .into_config()
        .map_err(RenderError::from)
        .context("invalid command line")?;
    let capture = &config.capture;
    info!(
        "{}x{} px, {}x{} samples per pixel, {} shapes, {} lights, seed {}",
        capture.width,
        capture.height,
        capture.super_samples,
        capture.super_samples,
        config.scene.shape_count,
        config.scene.light_count,
        config.seed
    );
    info!(
        "{} light samples, {} indirect samples, max depth {}, {} jobs on {} workers",
        config.scene.settings.direct_light_samples,
        config.scene.settings.indirect_light_samples,
        config.scene.settings.max_depth,
        capture.n_jobs,
        capture.n_workers
    );

    let start_time = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let world = Arc::new(scene::random_scene(&config.scene, &mut rng));
    let cam = scene::default_camera(capture.aspect_ratio());

    let ray_tracing_start_time = Instant::now();
    let result = cam
        .capture_image(world, capture)
        .context("rendering failed")?;
    let ray_tracing_time = ray_tracing_start_time.elapsed();

    result
        .save(&config.output)
        .map_err(RenderError::from)
        .with_context(|| format!("failed to save {}", config.output.display()))?;

    info!(
        "Total: {:.3}s, scene: {:.3}s, RT: {:.3}s",
        start_time.elapsed().as_secs_f64(),
        (ray_tracing_start_time - start_time).as_secs_f64(),
        ray_tracing_time.as_secs_f64()
    );
    info!("wrote {}", config.output.display());
    Ok(())
}
