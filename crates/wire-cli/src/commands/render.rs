//! Render command - draws the demo triangle to an image file.
//!
//! The scene matches the animated one in the viewer: a single
//! wireframe triangle with corner markers, seen through the default
//! camera.

use crate::RenderArgs;
use anyhow::{Context, Result};
use tracing::{info, trace};
use wire_camera::Camera;
use wire_core::Canvas;
use wire_io::jpeg::{JpegWriter, JpegWriterOptions};
use wire_io::CanvasWriter;
use wire_math::Vec3;
use wire_raster::Tri3;

/// Output format selection.
enum OutputFormat {
    /// Detect from the output extension.
    Auto,
    /// Force PNG.
    Png,
    /// Force JPEG.
    Jpeg,
}

/// Runs the render command.
pub fn run(args: RenderArgs, verbose: bool) -> Result<()> {
    trace!(
        output = %args.output.display(),
        width = args.width,
        height = args.height,
        "render::run"
    );

    let format = parse_format(&args.format)?;

    let mut canvas = Canvas::new(args.width, args.height)
        .with_context(|| format!("Invalid canvas size {}x{}", args.width, args.height))?;

    let camera = Camera {
        aspect: canvas.aspect_ratio(),
        ..Camera::default()
    };

    // Demo triangle: wide base close to the camera, apex further back.
    let tri = Tri3::new(
        Vec3::new(-1.0, -1.0, -3.0),
        Vec3::new(0.0, 1.0, -5.0),
        Vec3::new(1.0, -1.0, -3.0),
    );

    info!(
        output = %args.output.display(),
        width = args.width,
        height = args.height,
        "Rendering demo triangle"
    );

    if verbose {
        println!(
            "Rendering {}x{} -> {}",
            args.width,
            args.height,
            args.output.display()
        );
    }

    super::draw_triangle(&mut canvas, &camera, tri);

    match format {
        OutputFormat::Auto => super::save_canvas(&args.output, &canvas)?,
        OutputFormat::Png => wire_io::png::write(&args.output, &canvas)
            .with_context(|| format!("Failed to save: {}", args.output.display()))?,
        OutputFormat::Jpeg => {
            let writer = JpegWriter::with_options(JpegWriterOptions {
                quality: args.quality,
                ..Default::default()
            });
            writer
                .write(&args.output, &canvas)
                .with_context(|| format!("Failed to save: {}", args.output.display()))?;
        }
    }

    if verbose {
        println!("Done.");
    }

    Ok(())
}

/// Parses the format string into an OutputFormat.
fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(OutputFormat::Auto),
        "png" => Ok(OutputFormat::Png),
        "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
        _ => anyhow::bail!("Unknown format '{}'. Options: auto, png, jpeg", s),
    }
}
