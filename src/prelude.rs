pub use crate::aarect::{AaRect, Plane};
pub use crate::camera::Camera;
pub use crate::color::{Color, to_rgb8, write_color};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::hittable_list::HittableList;
pub use crate::integrator::Integrator;
pub use crate::interval::Interval;
pub use crate::material::Material;
pub use crate::path::{LightPath, PathRecorder, PathSink, PathVertex};
pub use crate::ray::Ray;
pub use crate::vec3::{Point3, Vec3};

pub use rand::Rng;
pub use rand_chacha::ChaCha8Rng;
pub use std::sync::Arc;

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
