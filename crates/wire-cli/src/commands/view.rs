//! View command - animated wireframe demo window.
//!
//! Opens a window with a triangle whose apex bobs on a sine wave while
//! the camera look-at point sways side to side. The canvas and camera
//! aspect follow the window as it resizes.

use crate::ViewArgs;
use anyhow::Result;
use std::time::Instant;
use tracing::trace;
use wire_camera::Camera;
use wire_math::Vec3;
use wire_raster::Tri3;
use wire_view::ViewOptions;

/// Runs the view command.
pub fn run(args: ViewArgs, verbose: bool) -> Result<()> {
    trace!(width = args.width, height = args.height, "view::run");

    if verbose {
        println!("Opening {}x{} window", args.width, args.height);
    }

    let options = ViewOptions {
        width: args.width,
        height: args.height,
        title: args.title,
    };

    let start = Instant::now();
    wire_view::run(options, move |canvas| {
        let t = start.elapsed().as_secs_f64();

        let camera = Camera {
            at: Vec3::new(t.cos(), 0.0, -1.0),
            aspect: canvas.aspect_ratio(),
            ..Camera::default()
        };

        let tri = Tri3::new(
            Vec3::new(-1.0, 0.0, -3.0),
            Vec3::new(0.0, t.sin(), -3.0),
            Vec3::new(1.0, 0.0, -3.0),
        );

        canvas.clear();
        super::draw_triangle(canvas, &camera, tri);
    })?;

    Ok(())
}
