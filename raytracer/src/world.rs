use crate::light::Light;
use crate::objects::hit::{nearest, Hitable, Intersection, EPSILON};
use crate::objects::shape::Shape;
use crate::ray::INITIAL_DEPTH;
use crate::{Ray, Vec3};
use rand::RngCore;

pub const AMBIENT_LIGHT: f64 = 0.60;
pub const REFLECTIVITY: f64 = 0.30;

const HORIZON_COLOR: Vec3 = Vec3::new(0.60, 0.80, 1.0);
const ZENITH_FACTOR: f64 = 0.70;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSettings {
    pub direct_light_samples: u32,
    pub indirect_light_samples: u32,
    pub max_depth: u32,
    pub ambient_strength: f64,
    pub reflectivity: f64,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            direct_light_samples: 16,
            indirect_light_samples: 16,
            max_depth: 3,
            ambient_strength: AMBIENT_LIGHT,
            reflectivity: REFLECTIVITY,
        }
    }
}

/// Immutable scene plus the shading engine. Shared read-only between render
/// jobs; every random draw comes from the generator the caller passes in.
pub struct World {
    pub shapes: Vec<Shape>,
    pub lights: Vec<Light>,
    pub settings: TraceSettings,
}

impl World {
    pub fn new(shapes: Vec<Shape>, lights: Vec<Light>, settings: TraceSettings) -> Self {
        Self {
            shapes,
            lights,
            settings,
        }
    }

    /// Gradient from the horizon color up to a darker zenith. Downward
    /// directions stay at the horizon color.
    pub fn background_color(&self, dir: Vec3) -> Vec3 {
        let zenith = HORIZON_COLOR * ZENITH_FACTOR;
        let percent = dir.y.max(0.0);
        HORIZON_COLOR.lerp(zenith, percent)
    }

    pub fn nearest_shape(&self, r: &Ray) -> Intersection {
        nearest(&self.shapes, r)
    }

    pub fn nearest_light(&self, r: &Ray) -> Intersection {
        nearest(self.lights.iter().map(|light| &light.shape), r)
    }

    /// Fraction of hemisphere directions around `normal` that escape the
    /// scene, scaled by the ambient strength.
    pub fn ambient_percent(&self, point: Vec3, normal: Vec3, rng: &mut dyn RngCore) -> f64 {
        let samples = self.settings.indirect_light_samples;
        if samples == 0 {
            return 0.;
        }
        let mut unoccluded = 0;
        for _ in 0..samples {
            let dir = Vec3::random_hemisphere_direction(&normal, rng);
            let hemisphere_ray = Ray::new(point, dir, INITIAL_DEPTH);
            if !self.nearest_shape(&hemisphere_ray).is_hit() {
                unoccluded += 1;
            }
        }
        (unoccluded as f64 / samples as f64) * self.settings.ambient_strength
    }

    /// Soft-shadowed diffuse light arriving at `rec`, summed over all lights.
    /// `origin` is the offset shading point and `normal` faces the viewer.
    pub fn direct_light(
        &self,
        rec: &Intersection,
        origin: Vec3,
        normal: Vec3,
        rng: &mut dyn RngCore,
    ) -> Vec3 {
        let samples = self.settings.direct_light_samples;
        if samples == 0 {
            return Vec3::zero();
        }
        let mut total = Vec3::zero();
        for light in self.lights.iter() {
            let mut sum = Vec3::zero();
            for _ in 0..samples {
                let light_dir = (light.shape.random_point(rng) - rec.p).unit();
                let light_ray = Ray::new(origin, light_dir, INITIAL_DEPTH);
                let light_try = light.shape.hit(&light_ray);
                let shadow_try = self.nearest_shape(&light_ray);
                if light_try.t < shadow_try.t {
                    let cos = (light_dir * normal).max(0.);
                    sum += Vec3::elemul(rec.material.color, light.color()) * cos;
                }
            }
            // the divisor stays fixed even for samples facing away
            total += sum / samples as f64;
        }
        total
    }

    pub fn phong_at(&self, rec: &Intersection, r: &Ray, rng: &mut dyn RngCore) -> Vec3 {
        let view = -r.dir;
        let normal = if view * rec.normal > 0.0 {
            rec.normal
        } else {
            -rec.normal
        };
        let origin = rec.p + normal * EPSILON;

        let color = rec.material.color;
        let ambient = Vec3::elemul(color, self.background_color(r.dir))
            * self.ambient_percent(origin, normal, rng);

        let mut total = ambient + self.direct_light(rec, origin, normal, rng);

        if r.depth < self.settings.max_depth {
            let reflect_dir = Vec3::reflect(view, normal).unit();
            let reflect_ray = Ray::new(origin, reflect_dir, r.depth + 1);
            total += self.ray_trace(&reflect_ray, rng) * self.settings.reflectivity;
        }
        total
    }

    /// Unclamped radiance seen along `r`.
    pub fn ray_trace(&self, r: &Ray, rng: &mut dyn RngCore) -> Vec3 {
        let shape_hit = self.nearest_shape(r);
        let light_hit = self.nearest_light(r);

        if shape_hit.t < light_hit.t {
            self.phong_at(&shape_hit, r, rng)
        } else if light_hit.is_hit() {
            light_hit.material.color
        } else {
            self.background_color(r.dir)
        }
    }
}
