//! Observation of individual light paths for external visualization.
//!
//! A sink only watches; the integrator's returned radiance is the same with or
//! without one.

use crate::prelude::*;

pub trait PathSink {
    fn begin_path(&mut self);

    fn record_vertex(
        &mut self,
        position: Point3,
        normal: Vec3,
        contribution: Color,
        is_light_source: bool,
    );

    fn end_path(&mut self, total_contribution: Color);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVertex {
    pub position: Point3,
    pub normal: Vec3,
    pub contribution: Color,
    pub is_light_source: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightPath {
    pub vertices: Vec<PathVertex>,
    pub final_color: Color,
    pub depth: usize,
}

/// Stores up to `max_paths` complete paths; later ones are dropped.
#[derive(Debug, Clone)]
pub struct PathRecorder {
    paths: Vec<LightPath>,
    current: Option<LightPath>,
    max_paths: usize,
}

impl PathRecorder {
    pub fn new(max_paths: usize) -> Self {
        Self {
            paths: Vec::new(),
            current: None,
            max_paths,
        }
    }

    pub fn paths(&self) -> &[LightPath] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<LightPath> {
        self.paths
    }
}

impl PathSink for PathRecorder {
    fn begin_path(&mut self) {
        if self.paths.len() < self.max_paths {
            self.current = Some(LightPath::default());
        }
    }

    fn record_vertex(
        &mut self,
        position: Point3,
        normal: Vec3,
        contribution: Color,
        is_light_source: bool,
    ) {
        if let Some(path) = self.current.as_mut() {
            path.vertices.push(PathVertex {
                position,
                normal,
                contribution,
                is_light_source,
            });
            path.depth += 1;
        }
    }

    fn end_path(&mut self, total_contribution: Color) {
        if let Some(mut path) = self.current.take() {
            path.final_color = total_contribution;
            self.paths.push(path);
        }
    }
}
