use crate::Vec3;

/// Depth of a ray cast straight from the camera.
pub const INITIAL_DEPTH: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub orig: Vec3,
    pub dir: Vec3,
    // number of mirror bounces that produced this ray
    pub depth: u32,
}

impl Ray {
    pub fn new(orig: Vec3, dir: Vec3, depth: u32) -> Self {
        Self { orig, dir, depth }
    }
    pub fn primary(orig: Vec3, dir: Vec3) -> Self {
        Self::new(orig, dir, INITIAL_DEPTH)
    }
    pub fn at(&self, t: f64) -> Vec3 {
        self.orig + t * self.dir
    }
}
