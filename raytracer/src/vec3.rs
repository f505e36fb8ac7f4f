use image::Rgb;
use rand::{Rng, RngCore};
use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// Three components used interchangeably as a point, a direction or an RGB radiance.
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[cfg(test)]
    pub const fn ones() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along axis 0 (x), 1 (y) or 2 (z).
    pub fn axis(i: usize) -> Self {
        match i {
            0 => Self::new(1.0, 0.0, 0.0),
            1 => Self::new(0.0, 1.0, 0.0),
            2 => Self::new(0.0, 0.0, 1.0),
            _ => panic!("axis index out of range: {}", i),
        }
    }

    pub fn squared_length(&self) -> f64 {
        *self * *self
    }

    pub fn length(&self) -> f64 {
        self.squared_length().sqrt()
    }

    pub fn elemul(lhs: Self, rhs: Self) -> Self {
        Self::new(lhs.x * rhs.x, lhs.y * rhs.y, lhs.z * rhs.z)
    }

    pub fn cross(lhs: Self, rhs: Self) -> Self {
        Self::new(
            lhs.y * rhs.z - lhs.z * rhs.y,
            lhs.z * rhs.x - lhs.x * rhs.z,
            lhs.x * rhs.y - lhs.y * rhs.x,
        )
    }

    /// Unit vector in the same direction. Normalizing a zero vector is a caller bug.
    pub fn unit(&self) -> Vec3 {
        match self {
            v if v.length() == 0. => panic!("cannot normalize a zero-length vector"),
            _ => *self / self.length(),
        }
    }

    pub fn is_near_zero(&self) -> bool {
        const S: f64 = 1e-8;
        (self.x.abs() < S) && (self.y.abs() < S) && (self.z.abs() < S)
    }

    /// Mirror `v` about `normal`: `normal * 2(v . normal) - v`.
    ///
    /// `v` points away from the surface, so the result does too.
    pub fn reflect(v: Self, normal: Self) -> Self {
        normal * (2. * (v * normal)) - v
    }

    pub fn clamp(&self, low: f64, high: f64) -> Self {
        let c = |v: f64| {
            if v > high {
                high
            } else if v < low {
                low
            } else {
                v
            }
        };
        Self::new(c(self.x), c(self.y), c(self.z))
    }

    pub fn clamped(&self) -> Self {
        self.clamp(0., 1.)
    }

    pub fn lerp(&self, other: Self, percent: f64) -> Self {
        *self + (other - *self) * percent
    }

    pub fn random_color(rng: &mut dyn RngCore) -> Vec3 {
        Vec3::new(rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>())
    }

    pub fn random_in_range(min: f64, max: f64, rng: &mut dyn RngCore) -> Vec3 {
        let mut remap = || min + (max - min) * rng.gen::<f64>();
        Vec3::new(remap(), remap(), remap())
    }

    /// A unit direction drawn from the normalized [-1, 1]^3 cube.
    pub fn random_direction(rng: &mut dyn RngCore) -> Vec3 {
        loop {
            let p = Vec3::random_in_range(-1., 1., rng);
            if !p.is_near_zero() {
                return p.unit();
            }
        }
    }

    pub fn random_in_sphere(radius: f64, rng: &mut dyn RngCore) -> Vec3 {
        let dir = Vec3::random_direction(rng);
        dir * (rng.gen::<f64>() * radius)
    }

    /// `half_extents` are the distances from the center to each pair of faces.
    pub fn random_in_cuboid(half_extents: Vec3, rng: &mut dyn RngCore) -> Vec3 {
        Vec3::elemul(half_extents, Vec3::random_in_range(-1., 1., rng))
    }

    pub fn random_hemisphere_direction(normal: &Vec3, rng: &mut dyn RngCore) -> Vec3 {
        let dir = Vec3::random_direction(rng);
        if dir * *normal > 0.0 {
            dir
        } else {
            -dir
        }
    }
}

impl From<Vec3> for Rgb<u8> {
    fn from(item: Vec3) -> Self {
        let c = item.clamped();
        Self([
            (c.x * 255.).floor() as u8,
            (c.y * 255.).floor() as u8,
            (c.z * 255.).floor() as u8,
        ])
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of range: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

// dot product
impl Mul for Vec3 {
    type Output = f64;

    fn mul(self, other: Self) -> Self::Output {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, other: Vec3) -> Self::Output {
        other * self
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
pub(crate) fn assert_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_add_sub() {
        assert_eq!(
            Vec3::new(1.0, 0.0, -1.0) + Vec3::new(2.0, 4.0, 6.0),
            Vec3::new(3.0, 4.0, 5.0)
        );
        let mut x = Vec3::new(1.0, 0.0, -1.0);
        x -= Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(x, Vec3::new(-1.0, -4.0, -7.0));
    }

    #[test]
    fn test_dot_and_scale() {
        assert_eq!(Vec3::new(1.0, 0.0, -1.0) * Vec3::ones(), 0.0);
        assert_eq!(2.0 * Vec3::new(1.0, 0.0, -1.0), Vec3::new(2.0, 0.0, -2.0));
        assert_eq!(Vec3::new(1.0, -2.0, 0.0) / 2.0, Vec3::new(0.5, -1.0, 0.0));
    }

    #[test]
    fn test_elemul() {
        assert_eq!(
            Vec3::elemul(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0)),
            Vec3::new(1.0, 4.0, 9.0)
        );
    }

    #[test]
    fn test_cross() {
        assert_eq!(
            Vec3::cross(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 3.0, 4.0)),
            Vec3::new(8.0 - 9.0, 6.0 - 4.0, 3.0 - 4.0)
        );
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_unit() {
        assert_eq!(Vec3::new(233.0, 0.0, 0.0).unit(), Vec3::new(1.0, 0.0, 0.0));
        let v = Vec3::new(3.0, -7.5, 0.25).unit();
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_unit_panic() {
        Vec3::new(0.0, 0.0, 0.0).unit();
    }

    #[test]
    fn test_reflect() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let v = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(Vec3::reflect(v, n), Vec3::new(-1.0, 1.0, 0.0));

        let n = Vec3::new(1.0, 2.0, -0.5).unit();
        let v = Vec3::new(0.3, -4.0, 2.0);
        assert_near(Vec3::reflect(Vec3::reflect(v, n), n), v);
    }

    #[test]
    fn test_clamp_lerp() {
        assert_eq!(
            Vec3::new(-0.5, 0.5, 1.5).clamped(),
            Vec3::new(0.0, 0.5, 1.0)
        );
        assert_eq!(
            Vec3::new(-3.0, 0.0, 3.0).clamp(-1.0, 2.0),
            Vec3::new(-1.0, 0.0, 2.0)
        );
        assert_eq!(
            Vec3::zero().lerp(Vec3::new(2.0, 4.0, -2.0), 0.5),
            Vec3::new(1.0, 2.0, -1.0)
        );
    }

    #[test]
    fn test_to_rgb() {
        let px: Rgb<u8> = Vec3::new(1.5, 0.5, -1.0).into();
        assert_eq!(px, Rgb([255, 127, 0]));
    }

    #[test]
    fn test_random_samplers_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let half = Vec3::new(0.5, 1.0, 2.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        for _ in 0..1000 {
            let c = Vec3::random_color(&mut rng);
            assert_eq!(c, c.clamped());
            assert!(Vec3::random_in_sphere(3.0, &mut rng).length() <= 3.0);
            let p = Vec3::random_in_cuboid(half, &mut rng);
            assert!(p.x.abs() <= 0.5 && p.y.abs() <= 1.0 && p.z.abs() <= 2.0);
            let d = Vec3::random_hemisphere_direction(&normal, &mut rng);
            assert!((d.length() - 1.0).abs() < 1e-9);
            assert!(d * normal >= 0.0);
        }
    }
}
