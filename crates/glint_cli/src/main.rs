//! Render the demo scene to a PNG.
//!
//! Run with: cargo run --release -- [output.png] [width] [height]

use std::env;

use anyhow::{Context, Result};
use glint_core::demo::demo_scene;
use glint_renderer::{render, RenderConfig};

const DEFAULT_OUTPUT: &str = "render.png";
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let output = args.get(1).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);
    let width = parse_dimension(args.get(2), "width", DEFAULT_WIDTH)?;
    let height = parse_dimension(args.get(3), "height", DEFAULT_HEIGHT)?;

    log::info!("Starting Glint");

    let scene = demo_scene().context("Failed to build demo scene")?;
    let image = render(&scene, width, height, &RenderConfig::default())?;

    image
        .into_rgba_image()
        .context("Rendered buffer does not match its dimensions")?
        .save(output)
        .with_context(|| format!("Failed to save {}", output))?;

    log::info!("Saved {}x{} image to {}", width, height, output);
    Ok(())
}

fn parse_dimension(arg: Option<&String>, name: &str, default: u32) -> Result<u32> {
    match arg {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid {}: {}", name, value)),
        None => Ok(default),
    }
}
