use crate::camera::Camera;
use crate::light::Light;
use crate::material::Material;
use crate::objects::hit::Hitable;
use crate::objects::shape::Shape;
use crate::world::{TraceSettings, World};
use crate::Vec3;
use log::debug;
use rand::{Rng, RngCore};

pub const EYE: Vec3 = Vec3::new(6.0, 3.0, 12.0);
pub const VFOV: f64 = 60.0;
const LIGHT_LIFT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub shape_count: usize,
    pub light_count: usize,
    // shapes and lights are centered inside a sphere of this radius
    pub spawn_radius: f64,
    pub settings: TraceSettings,
}

fn random_size(rng: &mut dyn RngCore) -> f64 {
    0.5 + rng.gen::<f64>()
}

/// A sphere or a box with equal probability, centered at `center`.
pub fn random_shape(center: Vec3, material: Material, rng: &mut dyn RngCore) -> Shape {
    if rng.gen_bool(0.5) {
        Shape::sphere(center, random_size(rng), material)
    } else {
        let half_extents = Vec3::new(random_size(rng), random_size(rng), random_size(rng));
        Shape::cuboid(center, half_extents, material)
    }
}

fn spawn(lift: Vec3, radius: f64, rng: &mut dyn RngCore) -> Shape {
    let material = Material::random(rng);
    let center = lift + Vec3::random_in_sphere(radius, rng);
    random_shape(center, material, rng)
}

pub fn random_scene(params: &SceneParams, rng: &mut dyn RngCore) -> World {
    let radius = params.spawn_radius;
    let mut shapes = Vec::with_capacity(params.shape_count);
    for _ in 0..params.shape_count {
        shapes.push(spawn(Vec3::zero(), radius, rng));
    }
    let mut lights = Vec::with_capacity(params.light_count);
    for _ in 0..params.light_count {
        lights.push(Light::new(spawn(LIGHT_LIFT, radius, rng)));
    }

    for light in lights.iter() {
        debug!("light at {:?}, color {:?}", light.shape.center(), light.color());
    }
    debug!(
        "{} shapes, {} spheres",
        shapes.len(),
        shapes
            .iter()
            .filter(|s| matches!(s, Shape::Sphere(_)))
            .count()
    );
    World::new(shapes, lights, params.settings)
}

pub fn default_camera(aspect_ratio: f64) -> Camera {
    Camera::look_at(EYE, Vec3::zero(), aspect_ratio, VFOV)
}
