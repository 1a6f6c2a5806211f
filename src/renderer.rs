use crate::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Random stream reserved for choosing which pixels get their paths recorded,
/// kept apart from the per-row sampling streams.
const PATH_SELECTION_STREAM: u64 = u64::MAX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
    pub integrator: Integrator,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 600,
            image_height: 600,
            samples_per_pixel: 200,
            max_depth: 10,
            seed: 0,
            integrator: Integrator::Recursive,
        }
    }
}

/// Tone-mapped pixels stored top row first, plus any recorded light paths.
#[derive(Debug, Clone)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
    pub paths: Vec<LightPath>,
}

impl Image {
    /// Plain-text PPM: `P3`, dimensions, `255`, then one pixel per line.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;
        for &rgb in &self.pixels {
            write_color(out, rgb)?;
        }
        Ok(())
    }
}

pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn render<W: Hittable>(&self, world: &W, camera: &Camera) -> Image {
        self.render_with_paths(world, camera, 0)
    }

    /// Renders the image and records the first sample of `path_count`
    /// randomly chosen pixels.
    ///
    /// Rows are traced in parallel, each with its own random stream derived
    /// from the seed and the row index, so the result does not depend on the
    /// number of worker threads.
    pub fn render_with_paths<W: Hittable>(
        &self,
        world: &W,
        camera: &Camera,
        path_count: usize,
    ) -> Image {
        let RenderSettings {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
            ..
        } = self.settings;
        info!(
            "Rendering {}x{}, {} samples/pixel, max depth {}, {:?} integrator",
            image_width, image_height, samples_per_pixel, max_depth, self.settings.integrator
        );

        let selected = self.select_path_pixels(path_count);
        let remaining = AtomicU32::new(image_height);
        let start = Instant::now();

        let rows: Vec<(Vec<[u8; 3]>, Vec<LightPath>)> = (0..image_height)
            .into_par_iter()
            .map(|row| {
                // Top output row samples the highest part of the viewport.
                let j = image_height - 1 - row;
                let result = self.render_row(world, camera, j, &selected);
                let left = remaining.fetch_sub(1, Ordering::Relaxed) - 1;
                if left % 20 == 0 {
                    debug!("Scanlines remaining: {}", left);
                }
                result
            })
            .collect();

        let mut pixels = Vec::with_capacity(image_width as usize * image_height as usize);
        let mut paths = Vec::new();
        for (row_pixels, row_paths) in rows {
            pixels.extend(row_pixels);
            paths.extend(row_paths);
        }

        info!(
            "Done in {:.2?}, {} light paths recorded",
            start.elapsed(),
            paths.len()
        );
        Image {
            width: image_width,
            height: image_height,
            pixels,
            paths,
        }
    }

    fn render_row<W: Hittable>(
        &self,
        world: &W,
        camera: &Camera,
        j: u32,
        selected: &BTreeSet<(u32, u32)>,
    ) -> (Vec<[u8; 3]>, Vec<LightPath>) {
        let s = &self.settings;
        let mut rng = ChaCha8Rng::seed_from_u64(s.seed);
        rng.set_stream(j as u64);

        let in_row = selected.range((j, 0)..=(j, u32::MAX)).count();
        let mut recorder = PathRecorder::new(in_row);
        let mut pixels = Vec::with_capacity(s.image_width as usize);

        for i in 0..s.image_width {
            let record = selected.contains(&(j, i));
            let mut pixel_color = Color::zero();

            for sample in 0..s.samples_per_pixel {
                let u = (i as f64 + rng.random::<f64>()) / s.image_width as f64;
                let v = (j as f64 + rng.random::<f64>()) / s.image_height as f64;
                let r = camera.get_ray(u, v, &mut rng);

                if record && sample == 0 {
                    recorder.begin_path();
                    recorder.record_vertex(
                        r.origin,
                        Vec3::new(0.0, 0.0, 1.0),
                        Color::splat(1.0),
                        false,
                    );
                    let contribution = s.integrator.radiance(
                        &r,
                        world,
                        s.max_depth,
                        &mut rng,
                        Some(&mut recorder),
                    );
                    recorder.end_path(contribution);
                    pixel_color += contribution;
                } else {
                    pixel_color += s.integrator.radiance(&r, world, s.max_depth, &mut rng, None);
                }
            }

            pixels.push(to_rgb8(pixel_color, s.samples_per_pixel));
        }

        (pixels, recorder.into_paths())
    }

    /// Pixels as `(j, i)`, row first so a row's entries are contiguous; `j`
    /// counts from the bottom row.
    fn select_path_pixels(&self, path_count: usize) -> BTreeSet<(u32, u32)> {
        let s = &self.settings;
        let mut selected = BTreeSet::new();
        let total = s.image_width as usize * s.image_height as usize;
        if s.samples_per_pixel == 0 {
            return selected;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(s.seed);
        rng.set_stream(PATH_SELECTION_STREAM);
        while selected.len() < path_count.min(total) {
            let i = rng.random_range(0..s.image_width);
            let j = rng.random_range(0..s.image_height);
            selected.insert((j, i));
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_z() -> Camera {
        Camera::new(
            Point3::zero(),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            90.0,
            1.0,
            0.0,
            1.0,
        )
    }

    fn settings(width: u32, height: u32, samples: u32, depth: u32) -> RenderSettings {
        RenderSettings {
            image_width: width,
            image_height: height,
            samples_per_pixel: samples,
            max_depth: depth,
            seed: 0,
            integrator: Integrator::Recursive,
        }
    }

    fn ppm(image: &Image) -> String {
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_scene_renders_black() {
        let image = Renderer::new(settings(2, 2, 1, 10)).render(&HittableList::new(), &looking_down_z());
        let text = ppm(&image);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(&lines[..3], &["P3", "2 2", "255"]);
        assert_eq!(lines.len(), 3 + 4);
        assert!(lines[3..].iter().all(|l| *l == "0 0 0"));
    }

    #[test]
    fn emitter_filling_view_renders_white() {
        let mut world = HittableList::new();
        let light = Arc::new(Material::diffuse_light(Color::splat(1.0)));
        world.add(AaRect::xy(-100.0, 100.0, -100.0, 100.0, -1.0, light));

        for integrator in [Integrator::Recursive, Integrator::Iterative] {
            let mut s = settings(2, 2, 1, 1);
            s.integrator = integrator;
            let text = ppm(&Renderer::new(s).render(&world, &looking_down_z()));
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 7);
            assert!(lines[3..].iter().all(|l| *l == "255 255 255"));
        }
    }

    #[test]
    fn top_row_is_scene_up() {
        let mut world = HittableList::new();
        let light = Arc::new(Material::diffuse_light(Color::splat(1.0)));
        world.add(AaRect::xy(-100.0, 100.0, 0.0, 100.0, -1.0, light));

        let image = Renderer::new(settings(3, 4, 4, 1)).render(&world, &looking_down_z());
        let top = &image.pixels[..3];
        let bottom = &image.pixels[9..];
        assert!(top.iter().all(|p| *p == [255, 255, 255]));
        assert!(bottom.iter().all(|p| *p == [0, 0, 0]));
    }

    #[test]
    fn same_seed_same_image_regardless_of_threads() {
        let world = crate::scene::cornell_box();
        let camera = crate::scene::cornell_camera(1.0);
        let mut s = settings(8, 8, 4, 5);
        s.seed = 1234;

        let parallel = Renderer::new(s).render_with_paths(&world, &camera, 5);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        let serial = pool.install(|| Renderer::new(s).render_with_paths(&world, &camera, 5));

        assert_eq!(parallel.pixels, serial.pixels);
        assert_eq!(parallel.paths, serial.paths);
        assert_eq!(parallel.paths.len(), 5);
    }

    #[test]
    fn recorded_paths_start_at_camera() {
        let world = crate::scene::cornell_box();
        let camera = crate::scene::cornell_camera(1.0);
        let image = Renderer::new(settings(6, 6, 2, 10)).render_with_paths(&world, &camera, 4);

        assert_eq!(image.paths.len(), 4);
        for path in &image.paths {
            assert_eq!(path.vertices[0].position, camera.origin());
            assert_eq!(path.depth, path.vertices.len());
            assert!(path.vertices.len() >= 2);
        }
    }

    #[test]
    fn path_selection_is_capped_by_pixel_count() {
        let renderer = Renderer::new(settings(2, 2, 1, 1));
        assert_eq!(renderer.select_path_pixels(50).len(), 4);
        assert!(renderer.select_path_pixels(0).is_empty());
    }
}
