pub mod rotation;
pub mod vector;

#[cfg(test)]
mod rotation_test;

pub use rotation::{normalize, rotate_3d};
pub use vector::{Point3, Vector3};

pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;
