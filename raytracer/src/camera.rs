use crate::error::RenderError;
use crate::vec3::degrees_to_radians;
use crate::world::World;
use crate::{Ray, Vec3};
use image::{ImageBuffer, Rgb, RgbImage};
use indicatif::ProgressBar;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::mpsc::channel;
use std::sync::Arc;
use threadpool::ThreadPool;

pub const GLOBAL_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Pinhole camera. `forward` carries the zoom, `right` the aspect ratio.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaptureSettings {
    pub width: usize,
    pub height: usize,
    // the image is sampled on a super_samples x super_samples grid per pixel
    pub super_samples: usize,
    // jobs: split image into how many row bands
    // workers: maximum allowed concurrent running threads
    pub n_jobs: usize,
    pub n_workers: usize,
    pub seed: u64,
}

impl CaptureSettings {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Rows `[begin, end)` rendered by job `i` of `n_jobs`.
pub fn band_rows(height: usize, n_jobs: usize, i: usize) -> Range<usize> {
    (height * i / n_jobs)..(height * (i + 1) / n_jobs)
}

impl Camera {
    pub fn look_at(eye: Vec3, focus: Vec3, aspect_ratio: f64, vfov: f64) -> Self {
        let zoom = 1.0 / f64::tan(degrees_to_radians(vfov) * 0.5);
        let forward = (focus - eye).unit() * zoom;
        let right = Vec3::cross(forward, GLOBAL_UP).unit() * aspect_ratio;
        let up = Vec3::cross(right, forward).unit();
        Self {
            eye,
            forward,
            right,
            up,
        }
    }

    /// `(0, 0)` is the top-left corner of the viewport, `(1, 1)` the bottom-right.
    pub fn image_ray(&self, xx: f64, yy: f64) -> Ray {
        let right = self.right * (2.0 * xx - 1.0);
        let up = self.up * (2.0 * yy - 1.0);
        Ray::primary(self.eye, (self.forward + right - up).unit())
    }

    /// Average of the jittered sub-pixel samples of pixel `(x, y)`, each
    /// clamped to [0, 1] before it is accumulated.
    fn render_pixel(
        &self,
        world: &World,
        x: usize,
        y: usize,
        opts: &CaptureSettings,
        rng: &mut StdRng,
    ) -> Vec3 {
        let n = opts.super_samples;
        let mut pixel_color = Vec3::zero();
        for j in 0..n {
            for i in 0..n {
                let xx = (x as f64 + (i as f64 + rng.gen::<f64>()) / n as f64) / opts.width as f64;
                let yy =
                    (y as f64 + (j as f64 + rng.gen::<f64>()) / n as f64) / opts.height as f64;
                let r = self.image_ray(xx, yy);
                pixel_color += world.ray_trace(&r, rng).clamped();
            }
        }
        pixel_color / (n * n) as f64
    }

    pub fn capture_image(
        &self,
        world: Arc<World>,
        opts: &CaptureSettings,
    ) -> Result<RgbImage, RenderError> {
        let (width, height) = (opts.width, opts.height);
        let n_jobs = opts.n_jobs.min(height).max(1);
        let pool = ThreadPool::new(opts.n_workers);

        let bar = ProgressBar::new(n_jobs as u64);
        let (tx, rx) = channel();
        let cam = *self;
        for i in 0..n_jobs {
            let tx = tx.clone();
            let world = world.clone();
            let opts = opts.clone();
            pool.execute(move || {
                // here, we render some of the rows of image in one thread
                let rows = band_rows(height, n_jobs, i);
                let mut img: RgbImage = ImageBuffer::new(width as u32, rows.len() as u32);
                let mut rng = StdRng::seed_from_u64(opts.seed.wrapping_add(i as u64));
                debug!("job {} rendering rows {:?}", i, rows);

                // img_y is the row in partial rendered image
                // y is real position in final image
                for (img_y, y) in rows.clone().enumerate() {
                    for x in 0..width {
                        let pixel_color = cam.render_pixel(&world, x, y, &opts, &mut rng);
                        img.put_pixel(x as u32, img_y as u32, Rgb::from(pixel_color));
                    }
                }
                if tx.send((rows, img)).is_err() {
                    warn!("job {} finished after the image was abandoned", i);
                }
            });
        }
        // only the workers hold senders now, so a dead worker ends the iteration
        drop(tx);

        let mut result: RgbImage = ImageBuffer::new(width as u32, height as u32);
        let mut received = 0;
        for (rows, img) in rx.iter().take(n_jobs) {
            // idx is the corresponding row in partial-rendered image
            for (idx, row) in rows.enumerate() {
                for col in 0..width as u32 {
                    *result.get_pixel_mut(col, row as u32) = *img.get_pixel(col, idx as u32);
                }
            }
            received += 1;
            bar.inc(1);
        }
        bar.finish();

        if received < n_jobs {
            return Err(RenderError::MissingBands {
                expected: n_jobs,
                received,
            });
        }
        Ok(result)
    }
}
