use crate::prelude::*;

/// Orientation of an axis-aligned rectangle, named after the two axes it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    Xy,
    Xz,
    Yz,
}

impl Plane {
    /// Axis held constant across the rectangle.
    pub fn fixed_axis(self) -> usize {
        match self {
            Plane::Xy => 2,
            Plane::Xz => 1,
            Plane::Yz => 0,
        }
    }

    /// The two axes the rectangle extends along.
    pub fn free_axes(self) -> (usize, usize) {
        match self {
            Plane::Xy => (0, 1),
            Plane::Xz => (0, 2),
            Plane::Yz => (1, 2),
        }
    }

    fn point(self, a: f64, b: f64, k: f64) -> Point3 {
        match self {
            Plane::Xy => Point3::new(a, b, k),
            Plane::Xz => Point3::new(a, k, b),
            Plane::Yz => Point3::new(k, a, b),
        }
    }
}

/// One-sided rectangle lying in the plane `axis = k`.
///
/// The normal is chosen at construction and never flipped toward the
/// incoming ray; by default it points along the positive fixed axis.
#[derive(Debug, Clone)]
pub struct AaRect {
    plane: Plane,
    a: Interval,
    b: Interval,
    k: f64,
    normal: Vec3,
    mat: Arc<Material>,
}

impl AaRect {
    pub fn new(plane: Plane, a: (f64, f64), b: (f64, f64), k: f64, mat: Arc<Material>) -> Self {
        let mut normal = Vec3::zero();
        match plane.fixed_axis() {
            0 => normal.x = 1.0,
            1 => normal.y = 1.0,
            _ => normal.z = 1.0,
        }
        Self {
            plane,
            a: Interval::new(a.0.min(a.1), a.0.max(a.1)),
            b: Interval::new(b.0.min(b.1), b.0.max(b.1)),
            k,
            normal,
            mat,
        }
    }

    pub fn xy(x0: f64, x1: f64, y0: f64, y1: f64, k: f64, mat: Arc<Material>) -> Self {
        Self::new(Plane::Xy, (x0, x1), (y0, y1), k, mat)
    }

    pub fn xz(x0: f64, x1: f64, z0: f64, z1: f64, k: f64, mat: Arc<Material>) -> Self {
        Self::new(Plane::Xz, (x0, x1), (z0, z1), k, mat)
    }

    pub fn yz(y0: f64, y1: f64, z0: f64, z1: f64, k: f64, mat: Arc<Material>) -> Self {
        Self::new(Plane::Yz, (y0, y1), (z0, z1), k, mat)
    }

    /// Same rectangle facing the negative fixed axis.
    pub fn flipped(mut self) -> Self {
        self.normal = -self.normal;
        self
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.mat
    }

    /// Corners in counter-clockwise order around the normal.
    pub fn corners(&self) -> [Point3; 4] {
        let (a, b, k) = (self.a, self.b, self.k);
        let quad = [
            self.plane.point(a.min, b.min, k),
            self.plane.point(a.max, b.min, k),
            self.plane.point(a.max, b.max, k),
            self.plane.point(a.min, b.max, k),
        ];
        let winding = (quad[1] - quad[0]).cross(quad[2] - quad[1]);
        if winding.dot(self.normal) < 0.0 {
            [quad[0], quad[3], quad[2], quad[1]]
        } else {
            quad
        }
    }
}

impl Hittable for AaRect {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let axis = self.plane.fixed_axis();
        let denom = r.direction[axis];
        if denom == 0.0 {
            return None;
        }

        let t = (self.k - r.origin[axis]) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let p = r.at(t);
        let (ia, ib) = self.plane.free_axes();
        if !self.a.contains(p[ia]) || !self.b.contains(p[ib]) {
            return None;
        }

        Some(HitRecord {
            p,
            normal: self.normal,
            t,
            mat: &self.mat,
        })
    }
}
