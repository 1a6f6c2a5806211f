use crate::prelude::*;

/// Result of a successful ray/primitive test. Borrows the material of the
/// primitive that was hit and lives only as long as one ray evaluation.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub mat: &'a Material,
}

pub trait Hittable: Send + Sync {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}
