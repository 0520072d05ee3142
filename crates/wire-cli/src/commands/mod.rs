//! CLI command implementations

pub mod render;

#[cfg(feature = "viewer")]
pub mod view;

use anyhow::{Context, Result};
use std::path::Path;
use wire_camera::Camera;
use wire_core::{Canvas, Rgb};
use wire_raster::Tri3;

/// Wireframe color for the demo scenes.
pub const DEMO_COLOR: Rgb = Rgb::YELLOW;

/// Projects a triangle through the camera and draws it with corner
/// markers and edges.
pub fn draw_triangle(canvas: &mut Canvas, camera: &Camera, tri: Tri3) {
    let transform = camera.world_to_screen(canvas.width(), canvas.height());
    let projected = tri.project(&transform);
    projected.draw_corners(canvas, DEMO_COLOR);
    projected.draw(canvas, DEMO_COLOR);
}

/// Save canvas to path, detecting format from the extension.
pub fn save_canvas(path: &Path, canvas: &Canvas) -> Result<()> {
    wire_io::write(path, canvas).with_context(|| format!("Failed to save: {}", path.display()))
}
