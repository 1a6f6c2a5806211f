use crate::prelude::*;

/// Surface response to incoming light. The set of variants is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Ideal diffuse reflector.
    Lambertian { albedo: Color },
    /// Undirected emitter, identical radiance from both sides.
    DiffuseLight { radiance: Color },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    pub fn diffuse_light(radiance: Color) -> Self {
        Material::DiffuseLight { radiance }
    }

    /// Returns `(attenuation, scattered)` or `None` when the path ends here.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        _r_in: &Ray,
        rec: &HitRecord,
        rng: &mut R,
    ) -> Option<(Color, Ray)> {
        match *self {
            Material::Lambertian { albedo } => {
                let scatter_direction =
                    diffuse_direction(rec.normal, Vec3::random_unit_vector(rng));
                Some((albedo, Ray::new(rec.p, scatter_direction)))
            }
            Material::DiffuseLight { .. } => None,
        }
    }

    pub fn emitted(&self) -> Color {
        match *self {
            Material::DiffuseLight { radiance } => radiance,
            Material::Lambertian { .. } => Color::zero(),
        }
    }
}

/// Normal plus a unit perturbation, falling back to the normal when the two
/// nearly cancel.
fn diffuse_direction(normal: Vec3, perturbation: Vec3) -> Vec3 {
    let direction = normal + perturbation;
    if direction.near_zero() {
        normal
    } else {
        direction
    }
}
