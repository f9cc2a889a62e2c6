mod cli;
mod output;
mod scene;

use anyhow::Result;
use clap::Parser;
use nray_renderer::{render, RegularCamera};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting nray");

    let config = args.resolve_config()?;
    let scene = scene::demo_box();
    log::info!("Demo scene: {} shapes", scene.len());

    let camera = RegularCamera::new(&scene).with_settings(config.trace);

    let image = render(&camera, &config.render, |snapshot| {
        if let Err(err) = output::save_png(snapshot, &args.output) {
            log::warn!("Skipping snapshot: {err:#}");
        }
    })?;

    // The last snapshot already wrote the finished frame; write once more so
    // a failure there is reported.
    output::save_png(&image, &args.output)?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
