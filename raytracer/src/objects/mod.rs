pub mod cube;
pub mod hit;
pub mod shape;
pub mod sphere;
