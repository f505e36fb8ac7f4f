use crate::material::Material;
use crate::objects::cube::Cuboid;
use crate::objects::hit::{Hitable, Intersection};
use crate::objects::sphere::Sphere;
use crate::{Ray, Vec3};
use rand::RngCore;

/// Every kind of geometry a scene can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Cuboid(Cuboid),
}

impl Shape {
    pub fn sphere(center: Vec3, radius: f64, material: Material) -> Self {
        Shape::Sphere(Sphere::new(center, radius, material))
    }

    pub fn cuboid(center: Vec3, half_extents: Vec3, material: Material) -> Self {
        Shape::Cuboid(Cuboid::new(center, half_extents, material))
    }

    fn as_hitable(&self) -> &dyn Hitable {
        match self {
            Shape::Sphere(s) => s,
            Shape::Cuboid(c) => c,
        }
    }
}

impl Hitable for Shape {
    fn hit(&self, r: &Ray) -> Intersection {
        self.as_hitable().hit(r)
    }

    fn random_point(&self, rng: &mut dyn RngCore) -> Vec3 {
        self.as_hitable().random_point(rng)
    }

    fn material(&self) -> Material {
        self.as_hitable().material()
    }

    fn center(&self) -> Vec3 {
        self.as_hitable().center()
    }
}
