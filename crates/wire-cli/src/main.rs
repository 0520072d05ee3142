//! wire - Wireframe renderer CLI
//!
//! Renders demo wireframe scenes to image files or an animated window.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "wire")]
#[command(author, version, about = "Wireframe renderer CLI")]
#[command(long_about = "
Renders wireframe scenes through a pinhole camera onto an RGB canvas.

Examples:
  wire render                                # 500x500 triangle to triangle.png
  wire render -o frame.png --width 800 --height 600
  wire render -o preview.jpg -q 80           # JPEG with quality
  wire view                                  # animated wireframe window
  wire view --width 1280 --height 720
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the demo triangle to an image file
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Open an animated wireframe demo window
    #[cfg(feature = "viewer")]
    #[command(visible_alias = "v")]
    View(ViewArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Output image (format from extension unless --format is given)
    #[arg(short, long, default_value = "triangle.png")]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value = "500")]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "500")]
    height: u32,

    /// Output format: auto, png, jpeg
    #[arg(short, long, default_value = "auto")]
    format: String,

    /// Quality (1-100, for JPEG)
    #[arg(short, long, default_value = "90")]
    quality: u8,
}

#[cfg(feature = "viewer")]
#[derive(Args)]
struct ViewArgs {
    /// Window width in points
    #[arg(long, default_value = "1024")]
    width: u32,

    /// Window height in points
    #[arg(long, default_value = "768")]
    height: u32,

    /// Window title
    #[arg(long, default_value = "wire view")]
    title: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        #[cfg(feature = "viewer")]
        Commands::View(args) => commands::view::run(args, cli.verbose),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the default level
/// from `warn` to `debug`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
