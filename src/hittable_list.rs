use crate::prelude::*;

/// Ordered collection of rectangles searched linearly for the closest hit.
#[derive(Debug, Default, Clone)]
pub struct HittableList {
    objects: Vec<AaRect>,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: AaRect) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AaRect> {
        self.objects.iter()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_hitrecord: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in self.objects.iter() {
            if let Some(hit_rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = hit_rec.t;
                closest_hitrecord = Some(hit_rec);
            }
        }

        closest_hitrecord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_planes(near_first: bool) -> (HittableList, Material, Material) {
        let near_mat = Material::lambertian(Color::new(1.0, 0.0, 0.0));
        let far_mat = Material::lambertian(Color::new(0.0, 0.0, 1.0));
        let near = AaRect::xy(-1.0, 1.0, -1.0, 1.0, -2.0, Arc::new(near_mat));
        let far = AaRect::xy(-1.0, 1.0, -1.0, 1.0, -6.0, Arc::new(far_mat));

        let mut world = HittableList::new();
        if near_first {
            world.add(near);
            world.add(far);
        } else {
            world.add(far);
            world.add(near);
        }
        (world, near_mat, far_mat)
    }

    #[test]
    fn empty_list_never_hits() {
        let world = HittableList::new();
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(world.is_empty());
        assert!(world.hit(&r, Interval::forward(0.001)).is_none());
    }

    #[test]
    fn nearest_rectangle_wins_in_either_order() {
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        for near_first in [true, false] {
            let (world, near_mat, _) = two_planes(near_first);
            let rec = world.hit(&r, Interval::forward(0.001)).unwrap();
            assert_eq!(*rec.mat, near_mat);
            assert!((rec.t - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn lower_bound_skips_nearer_rectangle() {
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let (world, _, far_mat) = two_planes(true);
        let rec = world.hit(&r, Interval::forward(3.0)).unwrap();
        assert_eq!(*rec.mat, far_mat);
    }
}
