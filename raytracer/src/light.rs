use crate::objects::hit::Hitable;
use crate::objects::shape::Shape;
use crate::Vec3;

/// An emissive shape. Its geometry is both what the camera sees and the area
/// sampled for direct illumination.
#[derive(Clone, Debug)]
pub struct Light {
    pub shape: Shape,
}

impl Light {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    pub fn color(&self) -> Vec3 {
        self.shape.material().color
    }
}
