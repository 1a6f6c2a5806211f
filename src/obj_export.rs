//! Wavefront OBJ export of recorded light paths, for inspection in a DCC tool.
//!
//! Each path becomes a chain of thin cylinders joined by small spheres at its
//! vertices. The scene rectangles can be written alongside as plain quads.

use crate::prelude::*;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const PATH_RADIUS: f64 = 0.5;
const VERTEX_RADIUS: f64 = 1.0;
const CYLINDER_SIDES: usize = 8;
const SPHERE_STACKS: usize = 6;
const SPHERE_SLICES: usize = 8;

const MTL: &str = "\
# Material file for light paths

newmtl GreenPath
Ka 0.0 0.5 0.0
Kd 0.0 1.0 0.0
Ks 0.0 1.0 0.0
Ns 10.0
d 0.8
illum 2

newmtl BoxWhite
Ka 0.7 0.7 0.7
Kd 0.73 0.73 0.73
Ks 0.0 0.0 0.0
d 0.5
illum 1
";

/// Writes `path` and a sibling `.mtl` file holding its materials.
pub fn export_paths_to_obj(
    path: &Path,
    paths: &[LightPath],
    scene: Option<&HittableList>,
) -> io::Result<()> {
    // The OBJ is opened first so a bad destination leaves no stray .mtl behind.
    let mut out = BufWriter::new(File::create(path)?);
    let mtl_path = path.with_extension("mtl");
    let mtl_name = mtl_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    write_obj(&mut out, &mtl_name, paths, scene)?;
    out.flush()?;
    std::fs::write(&mtl_path, MTL)?;

    info!(
        "Exported {} light paths to {}",
        paths.len(),
        path.display()
    );
    Ok(())
}

pub fn write_obj<W: Write>(
    out: &mut W,
    mtl_name: &str,
    paths: &[LightPath],
    scene: Option<&HittableList>,
) -> io::Result<()> {
    writeln!(out, "# Light paths")?;
    writeln!(out, "mtllib {}", mtl_name)?;
    writeln!(out)?;

    let mut obj = ObjWriter { out, next_index: 1 };

    if let Some(scene) = scene {
        writeln!(obj.out, "# Scene geometry")?;
        writeln!(obj.out, "usemtl BoxWhite")?;
        for rect in scene.iter() {
            obj.quad(&rect.corners())?;
        }
        writeln!(obj.out)?;
    }

    writeln!(obj.out, "# Light paths")?;
    writeln!(obj.out, "usemtl GreenPath")?;
    for (n, path) in paths.iter().enumerate() {
        writeln!(obj.out, "# Path {} (depth: {})", n, path.depth)?;
        for pair in path.vertices.windows(2) {
            obj.cylinder(pair[0].position, pair[1].position, PATH_RADIUS)?;
        }
        for vertex in &path.vertices {
            obj.sphere(vertex.position, VERTEX_RADIUS)?;
        }
        writeln!(obj.out)?;
    }

    Ok(())
}

/// Tracks the 1-based index of the next vertex written.
struct ObjWriter<'a, W: Write> {
    out: &'a mut W,
    next_index: usize,
}

impl<W: Write> ObjWriter<'_, W> {
    fn vertex(&mut self, p: Point3) -> io::Result<()> {
        writeln!(self.out, "v {} {} {}", p.x, p.y, p.z)
    }

    fn quad(&mut self, corners: &[Point3; 4]) -> io::Result<()> {
        for &c in corners {
            self.vertex(c)?;
        }
        let o = self.next_index;
        writeln!(self.out, "f {} {} {} {}", o, o + 1, o + 2, o + 3)?;
        self.next_index += 4;
        Ok(())
    }

    fn cylinder(&mut self, start: Point3, end: Point3, radius: f64) -> io::Result<()> {
        let direction = end - start;
        let length = direction.length();
        if length < 1e-6 {
            return Ok(());
        }

        let dir = direction / length;
        let up = if dir.y.abs() > 0.9 {
            Vec3::new(1.0, 0.0, 0.0)
        } else {
            Vec3::new(0.0, 1.0, 0.0)
        };
        let right = up.cross(dir).normalized();
        let forward = dir.cross(right);

        for center in [start, end] {
            for i in 0..CYLINDER_SIDES {
                let angle = 2.0 * PI * i as f64 / CYLINDER_SIDES as f64;
                self.vertex(center + radius * (angle.cos() * right + angle.sin() * forward))?;
            }
        }

        let o = self.next_index;
        for i in 0..CYLINDER_SIDES {
            let next = (i + 1) % CYLINDER_SIDES;
            let (v1, v2) = (o + i, o + next);
            let (v3, v4) = (o + CYLINDER_SIDES + next, o + CYLINDER_SIDES + i);
            writeln!(self.out, "f {} {} {}", v1, v2, v3)?;
            writeln!(self.out, "f {} {} {}", v1, v3, v4)?;
        }
        self.next_index += 2 * CYLINDER_SIDES;
        Ok(())
    }

    fn sphere(&mut self, center: Point3, radius: f64) -> io::Result<()> {
        for i in 0..=SPHERE_STACKS {
            let phi = PI * i as f64 / SPHERE_STACKS as f64;
            for j in 0..SPHERE_SLICES {
                let theta = 2.0 * PI * j as f64 / SPHERE_SLICES as f64;
                self.vertex(Point3::new(
                    center.x + radius * phi.sin() * theta.cos(),
                    center.y + radius * phi.cos(),
                    center.z + radius * phi.sin() * theta.sin(),
                ))?;
            }
        }

        let o = self.next_index;
        for i in 0..SPHERE_STACKS - 1 {
            for j in 0..SPHERE_SLICES {
                let next_j = (j + 1) % SPHERE_SLICES;
                let v1 = o + i * SPHERE_SLICES + j;
                let v2 = o + i * SPHERE_SLICES + next_j;
                let v3 = o + (i + 1) * SPHERE_SLICES + next_j;
                let v4 = o + (i + 1) * SPHERE_SLICES + j;
                writeln!(self.out, "f {} {} {}", v1, v2, v3)?;
                writeln!(self.out, "f {} {} {}", v1, v3, v4)?;
            }
        }
        self.next_index += (SPHERE_STACKS + 1) * SPHERE_SLICES;
        Ok(())
    }
}
