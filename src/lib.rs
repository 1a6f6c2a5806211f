//! Monte Carlo path tracer for the boxed-room test scene.
//!
//! The scene is built from one-sided axis-aligned rectangles carrying either a
//! diffuse or an emissive material. Radiance is estimated per pixel by
//! averaging jittered camera paths, truncated at a fixed bounce depth, and
//! written out as a plain-text PPM image.

pub mod aarect;
pub mod camera;
pub mod color;
pub mod hittable;
pub mod hittable_list;
pub mod integrator;
pub mod interval;
pub mod material;
pub mod obj_export;
pub mod path;
pub mod prelude;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod vec3;
