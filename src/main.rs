mod cli;
mod logger;

use anyhow::Context;
use clap::Parser;
use cli::Args;
use cornell_box::obj_export::export_paths_to_obj;
use cornell_box::renderer::Renderer;
use cornell_box::scene;
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.debug_level.clone().into());

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the worker pool")?;
    }

    let world = scene::cornell_box();
    let camera = scene::cornell_camera(args.image_aspect_ratio());
    info!("Scene: {} rectangles, seed {}", world.len(), args.seed);

    let path_count = if args.paths.is_some() { args.path_count } else { 0 };
    let image = Renderer::new(args.render_settings()).render_with_paths(&world, &camera, path_count);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            image
                .write_ppm(&mut out)
                .and_then(|_| out.flush())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            image
                .write_ppm(&mut out)
                .and_then(|_| out.flush())
                .context("failed to write image to stdout")?;
        }
    }

    if let Some(path) = &args.paths {
        // The image is already written; a failed export is reported only.
        if let Err(e) = export_paths_to_obj(path, &image.paths, Some(&world)) {
            error!("Failed to export light paths to {}: {}", path.display(), e);
        }
    }

    Ok(())
}
