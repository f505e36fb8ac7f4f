use crate::material::Material;
use crate::objects::hit::{Hitable, Intersection, EPSILON};
use crate::{Ray, Vec3};
use rand::RngCore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    /// `radius` must be positive.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hitable for Sphere {
    // Assumes a unit-length ray direction.
    fn hit(&self, r: &Ray) -> Intersection {
        let diff = self.center - r.orig;
        let b = diff * r.dir;
        let discriminant = b * b - diff * diff + self.radius * self.radius;
        if discriminant < 0. {
            return Intersection::none();
        }
        let sqrt_d = discriminant.sqrt();

        // Prefer the near root, fall back to the far one when the origin is inside.
        let (near, far) = (b - sqrt_d, b + sqrt_d);
        let root = if near > EPSILON {
            near
        } else if far > EPSILON {
            far
        } else {
            return Intersection::none();
        };

        let p = r.at(root);
        let normal = (p - self.center) / self.radius;
        Intersection::new(root, p, normal, self.material)
    }

    fn random_point(&self, rng: &mut dyn RngCore) -> Vec3 {
        self.center + Vec3::random_in_sphere(self.radius, rng)
    }

    fn material(&self) -> Material {
        self.material
    }

    fn center(&self) -> Vec3 {
        self.center
    }
}
