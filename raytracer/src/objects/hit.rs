use crate::material::Material;
use crate::{Ray, Vec3};
use rand::RngCore;

/// Distance reported when nothing was hit. Never nearer than a real hit.
pub const MAX_T: f64 = 1.0e30;

/// Minimum root accepted by intersection tests, also the offset used to lift
/// shading points off a surface.
pub const EPSILON: f64 = 1.0e-6;

/// Result of a ray/shape test. `normal` is the outward surface normal and is
/// not flipped toward the ray here; shading orients it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub t: f64,
    pub p: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Intersection {
    pub fn new(t: f64, p: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            t,
            p,
            normal,
            material,
        }
    }

    /// The "no hit" sentinel. Only `t` is meaningful.
    pub fn none() -> Self {
        Self {
            t: MAX_T,
            p: Vec3::zero(),
            normal: Vec3::zero(),
            material: Material::default(),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.t < MAX_T
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::none()
    }
}

pub trait Hitable {
    fn hit(&self, r: &Ray) -> Intersection;
    /// A point inside the shape's volume, used to sample area lights.
    fn random_point(&self, rng: &mut dyn RngCore) -> Vec3;
    fn material(&self) -> Material;
    fn center(&self) -> Vec3;
}

/// Linear scan keeping the hit with the strictly smallest `t`.
pub fn nearest<'a, H, I>(objects: I, r: &Ray) -> Intersection
where
    H: Hitable + 'a,
    I: IntoIterator<Item = &'a H>,
{
    let mut closest = Intersection::none();
    for object in objects {
        let rec = object.hit(r);
        if rec.t < closest.t {
            closest = rec;
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::shape::Shape;
    use crate::objects::sphere::Sphere;

    fn sphere_at(z: f64) -> Shape {
        Shape::Sphere(Sphere::new(
            Vec3::new(0., 0., z),
            1.,
            Material::new(Vec3::new(z, 0., 0.)),
        ))
    }

    #[test]
    fn test_sentinel_is_never_nearer() {
        let none = Intersection::none();
        assert!(!none.is_hit());
        assert_eq!(none.t, MAX_T);
        let real = Intersection::new(1e20, Vec3::zero(), Vec3::ones(), Material::default());
        assert!(real.is_hit());
        assert!(!(none.t < real.t));
    }

    #[test]
    fn test_nearest_empty_is_sentinel() {
        let r = Ray::primary(Vec3::zero(), Vec3::new(0., 0., -1.));
        let empty: Vec<Shape> = vec![];
        assert_eq!(nearest(&empty, &r).t, MAX_T);
    }

    #[test]
    fn test_nearest_all_miss_is_sentinel() {
        let r = Ray::primary(Vec3::zero(), Vec3::new(0., 0., 1.));
        let shapes = vec![sphere_at(-5.), sphere_at(-10.)];
        assert_eq!(nearest(&shapes, &r).t, MAX_T);
    }

    #[test]
    fn test_nearest_picks_smallest_t() {
        let r = Ray::primary(Vec3::zero(), Vec3::new(0., 0., -1.));
        let shapes = vec![sphere_at(-10.), sphere_at(-5.), sphere_at(-20.)];
        let rec = nearest(&shapes, &r);
        assert!((rec.t - 4.).abs() < 1e-9);
        assert_eq!(rec.material.color.x, -5.);
    }
}
