use crate::material::Material;
use crate::objects::hit::{Hitable, Intersection};
use crate::{Ray, Vec3};
use rand::RngCore;

/// Axis-aligned box. `half_extents` holds the distance from `center` to the
/// faces along x, y and z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub material: Material,
}

struct Slab {
    t_min: f64,
    t_max: f64,
    n_min: Vec3,
    n_max: Vec3,
}

impl Slab {
    // Strict comparisons: on ties the earlier axis keeps its face.
    fn narrow(&mut self, t1: f64, t2: f64, axis: Vec3) {
        if t1 < t2 {
            if t1 > self.t_min {
                self.t_min = t1;
                self.n_min = -axis;
            }
            if t2 < self.t_max {
                self.t_max = t2;
                self.n_max = axis;
            }
        } else {
            if t2 > self.t_min {
                self.t_min = t2;
                self.n_min = axis;
            }
            if t1 < self.t_max {
                self.t_max = t1;
                self.n_max = -axis;
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.t_min > self.t_max
    }
}

impl Cuboid {
    pub fn new(center: Vec3, half_extents: Vec3, material: Material) -> Self {
        Self {
            center,
            half_extents,
            material,
        }
    }

    // Distances to the low and high face along one axis. A zero direction
    // component yields +-inf or NaN, which the comparisons in `Slab` tolerate.
    fn face_distances(&self, r: &Ray, axis: usize) -> (f64, f64) {
        let (c, h, o, d) = (
            self.center[axis],
            self.half_extents[axis],
            r.orig[axis],
            r.dir[axis],
        );
        ((-h + c - o) / d, (h + c - o) / d)
    }
}

impl Hitable for Cuboid {
    fn hit(&self, r: &Ray) -> Intersection {
        let (tx1, tx2) = self.face_distances(r, 0);
        let x = Vec3::axis(0);
        let mut slab = if tx1 < tx2 {
            Slab {
                t_min: tx1,
                t_max: tx2,
                n_min: -x,
                n_max: x,
            }
        } else {
            Slab {
                t_min: tx2,
                t_max: tx1,
                n_min: x,
                n_max: -x,
            }
        };
        if slab.is_empty() {
            return Intersection::none();
        }

        for axis in 1..3 {
            let (t1, t2) = self.face_distances(r, axis);
            slab.narrow(t1, t2, Vec3::axis(axis));
            if slab.is_empty() {
                return Intersection::none();
            }
        }

        // origin inside the box: report the exit face
        if slab.t_min < 0.0 {
            slab.t_min = slab.t_max;
            slab.n_min = slab.n_max;
        }

        if slab.t_min >= 0.0 {
            let t = slab.t_min;
            Intersection::new(t, r.at(t), slab.n_min, self.material)
        } else {
            Intersection::none()
        }
    }

    fn random_point(&self, rng: &mut dyn RngCore) -> Vec3 {
        self.center + Vec3::random_in_cuboid(self.half_extents, rng)
    }

    fn material(&self) -> Material {
        self.material
    }

    fn center(&self) -> Vec3 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::assert_near;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_box() -> Cuboid {
        Cuboid::new(Vec3::zero(), Vec3::ones(), Material::new(Vec3::ones()))
    }

    #[test]
    fn test_hit_outside() {
        let r = Ray::primary(Vec3::new(0., 0., 5.), Vec3::new(0., 0., -1.));
        let rec = unit_box().hit(&r);
        assert_eq!(rec.t, 4.);
        assert_eq!(rec.p, Vec3::new(0., 0., 1.));
        assert_eq!(rec.normal, Vec3::new(0., 0., 1.));
    }

    #[test]
    fn test_hit_each_axis_face() {
        let b = unit_box();
        let cases = [
            (Vec3::new(-4., 0.2, 0.1), Vec3::new(1., 0., 0.), Vec3::new(-1., 0., 0.)),
            (Vec3::new(0.3, 6., -0.2), Vec3::new(0., -1., 0.), Vec3::new(0., 1., 0.)),
            (Vec3::new(0.1, 0.1, -3.), Vec3::new(0., 0., 1.), Vec3::new(0., 0., -1.)),
        ];
        for &(orig, dir, normal) in cases.iter() {
            let rec = b.hit(&Ray::primary(orig, dir));
            assert!(rec.is_hit());
            assert_eq!(rec.normal, normal);
        }
    }

    #[test]
    fn test_origin_inside_reports_exit() {
        let b = Cuboid::new(Vec3::zero(), Vec3::new(1., 2., 3.), Material::default());
        let rec = b.hit(&Ray::primary(Vec3::zero(), Vec3::new(1., 0., 0.)));
        assert_eq!(rec.t, 1.);
        assert_eq!(rec.normal, Vec3::new(1., 0., 0.));

        let rec = b.hit(&Ray::primary(Vec3::new(0., 0.5, 0.), Vec3::new(0., 0., -1.)));
        assert_eq!(rec.t, 3.);
        assert_eq!(rec.normal, Vec3::new(0., 0., -1.));
        assert!(rec.t >= 0.);
    }

    #[test]
    fn test_behind_origin_misses() {
        let r = Ray::primary(Vec3::new(0., 0., 5.), Vec3::new(0., 0., 1.));
        assert!(!unit_box().hit(&r).is_hit());
    }

    #[test]
    fn test_parallel_outside_slab_misses() {
        let r = Ray::primary(Vec3::new(0., 5., 5.), Vec3::new(0., 0., -1.));
        assert!(!unit_box().hit(&r).is_hit());
    }

    #[test]
    fn test_parallel_on_face_plane_is_deterministic() {
        // 0/0 on the x axis produces NaN, which must end in a clean miss
        let r = Ray::primary(Vec3::new(1., 0., 5.), Vec3::new(0., 0., -1.));
        let rec = unit_box().hit(&r);
        assert_eq!(rec, Intersection::none());
    }

    #[test]
    fn test_edge_tie_keeps_earlier_axis() {
        let r = Ray::primary(Vec3::new(5., 5., 0.), Vec3::new(-1., -1., 0.).unit());
        let rec = unit_box().hit(&r);
        assert!(rec.is_hit());
        assert_eq!(rec.normal, Vec3::new(1., 0., 0.));
        assert_near(rec.p, Vec3::new(1., 1., 0.));
    }

    #[test]
    fn test_random_point_inside() {
        let mut rng = StdRng::seed_from_u64(11);
        let b = Cuboid::new(Vec3::new(2., 0., -1.), Vec3::new(0.5, 1., 1.5), Material::default());
        for _ in 0..500 {
            let d = b.random_point(&mut rng) - b.center;
            assert!(d.x.abs() <= 0.5 && d.y.abs() <= 1. && d.z.abs() <= 1.5);
        }
    }
}
