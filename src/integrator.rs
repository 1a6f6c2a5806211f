//! Radiance estimation along a single camera path.
//!
//! The transport series is truncated after `depth` bounces with no russian
//! roulette, so long paths lose energy. A miss returns black: the room is closed
//! and there is no sky.

use crate::prelude::*;

/// Ray parameter below which hits are ignored, to step off the surface the
/// ray just left.
pub const T_MIN: f64 = 0.001;

/// Emission below this squared magnitude is not recorded as a light vertex.
const LIGHT_VERTEX_THRESHOLD: f64 = 0.01;

/// Selects between the two equivalent formulations of the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    #[default]
    Recursive,
    Iterative,
}

impl Integrator {
    pub fn radiance<W, R>(
        self,
        r: &Ray,
        world: &W,
        depth: u32,
        rng: &mut R,
        sink: Option<&mut (dyn PathSink + '_)>,
    ) -> Color
    where
        W: Hittable + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Integrator::Recursive => ray_color(r, world, depth, rng, sink),
            Integrator::Iterative => ray_color_iterative(r, world, depth, rng, sink),
        }
    }
}

/// Any material that declines to scatter ends the path with its emission,
/// whether or not it is meant to be a light.
pub fn ray_color<W, R>(
    r: &Ray,
    world: &W,
    depth: u32,
    rng: &mut R,
    mut sink: Option<&mut (dyn PathSink + '_)>,
) -> Color
where
    W: Hittable + ?Sized,
    R: Rng + ?Sized,
{
    if depth == 0 {
        return Color::zero();
    }

    let Some(rec) = world.hit(r, Interval::forward(T_MIN)) else {
        return Color::zero();
    };

    let emitted = rec.mat.emitted();
    if let Some((attenuation, scattered)) = rec.mat.scatter(r, &rec, rng) {
        if let Some(s) = sink.as_deref_mut() {
            s.record_vertex(rec.p, rec.normal, attenuation, false);
        }
        return emitted + attenuation * ray_color(&scattered, world, depth - 1, rng, sink);
    }

    record_light(sink, &rec, emitted);
    emitted
}

/// Loop form of [`ray_color`]. Bounces are stacked as they are traced and
/// folded back from the end, so the arithmetic (and the random draws) match
/// the recursive form exactly.
pub fn ray_color_iterative<W, R>(
    r: &Ray,
    world: &W,
    depth: u32,
    rng: &mut R,
    mut sink: Option<&mut (dyn PathSink + '_)>,
) -> Color
where
    W: Hittable + ?Sized,
    R: Rng + ?Sized,
{
    let mut bounces: Vec<(Color, Color)> = Vec::with_capacity(depth as usize);
    let mut ray = *r;
    let mut tail = Color::zero();

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::forward(T_MIN)) else {
            break;
        };

        let emitted = rec.mat.emitted();
        let Some((attenuation, scattered)) = rec.mat.scatter(&ray, &rec, rng) else {
            record_light(sink, &rec, emitted);
            tail = emitted;
            break;
        };

        if let Some(s) = sink.as_deref_mut() {
            s.record_vertex(rec.p, rec.normal, attenuation, false);
        }
        bounces.push((emitted, attenuation));
        ray = scattered;
    }

    bounces
        .into_iter()
        .rev()
        .fold(tail, |acc, (emitted, attenuation)| emitted + attenuation * acc)
}

fn record_light(sink: Option<&mut (dyn PathSink + '_)>, rec: &HitRecord, emitted: Color) {
    if let Some(s) = sink.filter(|_| emitted.length_squared() > LIGHT_VERTEX_THRESHOLD) {
        s.record_vertex(rec.p, rec.normal, emitted, true);
    }
}
