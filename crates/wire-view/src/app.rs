//! Presenter application with eframe/egui integration.
//!
//! Owns the canvas, drives the render callback once per repaint and
//! uploads the result as a GPU texture.

use egui::{Color32, ColorImage, TextureHandle, TextureOptions};
use wire_core::Canvas;

/// Configuration for launching the presenter window.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Initial window width in points.
    pub width: u32,
    /// Initial window height in points.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "wire view".into(),
        }
    }
}

/// Presenter application.
///
/// Each frame the canvas is resized to the window, handed to the
/// render callback, then uploaded with nearest-neighbor filtering so
/// single-pixel wireframe lines stay crisp.
pub struct ViewApp<F> {
    /// Render target handed to the callback.
    canvas: Canvas,
    /// Per-frame render callback.
    frame_fn: F,
    /// Current display texture.
    texture: Option<TextureHandle>,
}

impl<F> ViewApp<F>
where
    F: FnMut(&mut Canvas),
{
    /// Creates the presenter around an initial canvas.
    pub fn new(canvas: Canvas, frame_fn: F) -> Self {
        Self {
            canvas,
            frame_fn,
            texture: None,
        }
    }

    /// Keeps the canvas dimensions in sync with the panel.
    fn sync_canvas_size(&mut self, available: egui::Vec2) {
        let width = available.x.max(1.0) as u32;
        let height = available.y.max(1.0) as u32;
        if (width, height) != self.canvas.dimensions() {
            if let Err(e) = self.canvas.resize(width, height) {
                tracing::warn!("canvas resize to {}x{} failed: {}", width, height, e);
            }
        }
    }
}

impl<F> eframe::App for ViewApp<F>
where
    F: FnMut(&mut Canvas),
{
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            self.sync_canvas_size(available);

            (self.frame_fn)(&mut self.canvas);

            let (width, height) = self.canvas.dimensions();
            let image = ColorImage::from_rgb([width as usize, height as usize], self.canvas.data());

            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("wire_canvas", image, TextureOptions::NEAREST));
                }
            }

            if let Some(ref texture) = self.texture {
                let (rect, _response) = ui.allocate_exact_size(available, egui::Sense::hover());
                let painter = ui.painter_at(rect);
                painter.image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        });

        // Animation loop: render the next frame as soon as possible.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_options_default() {
        let options = ViewOptions::default();
        assert_eq!(options.width, 1024);
        assert_eq!(options.height, 768);
        assert_eq!(options.title, "wire view");
    }
}
