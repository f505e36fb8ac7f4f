use crate::Vec3;
use rand::RngCore;

/// A single color that is the reflectance of a shape, or the emission of a light.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Material {
    pub color: Vec3,
}

impl Material {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }

    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self::new(Vec3::random_color(rng))
    }
}
