use crate::prelude::*;

/// Thin-lens camera. An aperture of zero degenerates to an exact pinhole.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
}

impl Camera {
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        vup: Vec3,
        vfov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Self {
        let theta = degrees_to_radians(vfov);
        let half_height = (theta / 2.0).tan() * focus_dist;
        let half_width = half_height * aspect_ratio;

        let w = (look_from - look_at).normalized();
        let u = vup.cross(w).normalized();
        let v = w.cross(u);

        let horizontal = 2.0 * half_width * u;
        let vertical = 2.0 * half_height * v;
        let lower_left_corner = look_from - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin: look_from,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Primary ray through normalized image coordinates `(s, t)`, where
    /// `(0, 0)` is the lower-left corner of the viewport.
    pub fn get_ray<R: Rng + ?Sized>(&self, s: f64, t: f64, rng: &mut R) -> Ray {
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        if self.lens_radius <= 0.0 {
            return Ray::new(self.origin, target - self.origin);
        }

        let rd = self.lens_radius * Vec3::random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        Ray::new(self.origin + offset, target - self.origin - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn camera(aperture: f64, focus_dist: f64) -> Camera {
        Camera::new(
            Point3::new(278.0, 278.0, -800.0),
            Point3::new(278.0, 278.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            35.0,
            1.0,
            aperture,
            focus_dist,
        )
    }

    #[test]
    fn basis_is_orthonormal() {
        let cam = camera(0.0, 10.0);
        for axis in [cam.u, cam.v, cam.w] {
            assert!((axis.length() - 1.0).abs() < 1e-12);
        }
        assert!(cam.u.dot(cam.v).abs() < 1e-12);
        assert!(cam.u.dot(cam.w).abs() < 1e-12);
        assert!(cam.v.dot(cam.w).abs() < 1e-12);
        assert_eq!(-cam.w, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn pinhole_rays_start_exactly_at_look_from() {
        let cam = camera(0.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for i in 0..=10 {
            for j in 0..=10 {
                let r = cam.get_ray(i as f64 / 10.0, j as f64 / 10.0, &mut rng);
                assert_eq!(r.origin, Point3::new(278.0, 278.0, -800.0));
            }
        }
    }

    #[test]
    fn center_ray_looks_at_target() {
        let cam = camera(0.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = cam.get_ray(0.5, 0.5, &mut rng);
        let d = r.direction.normalized();
        assert!((d - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn top_of_image_is_scene_up() {
        let cam = camera(0.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let low = cam.get_ray(0.5, 0.0, &mut rng);
        let high = cam.get_ray(0.5, 1.0, &mut rng);
        assert!(high.direction.y > 0.0);
        assert!(low.direction.y < 0.0);
    }

    #[test]
    fn viewport_spans_vertical_fov() {
        let cam = camera(0.0, 4.0);
        let expected = 2.0 * (degrees_to_radians(35.0) / 2.0).tan() * 4.0;
        assert!((cam.vertical.length() - expected).abs() < 1e-9);
        assert!((cam.horizontal.length() - expected).abs() < 1e-9);
    }

    #[test]
    fn thin_lens_rays_converge_on_focus_plane() {
        let focus_dist = 500.0;
        let cam = camera(20.0, focus_dist);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let pinhole = camera(0.0, focus_dist).get_ray(0.3, 0.7, &mut rng);
        let focus_point = pinhole.at(1.0);

        for _ in 0..100 {
            let r = cam.get_ray(0.3, 0.7, &mut rng);
            let offset = r.origin - cam.origin;
            assert!(offset.length() <= 10.0 + 1e-9);
            assert!(offset.dot(cam.w).abs() < 1e-9);
            assert!((r.at(1.0) - focus_point).length() < 1e-9);
        }
    }
}
