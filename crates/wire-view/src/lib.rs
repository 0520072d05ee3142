//! # wire-view
//!
//! Windowed presenter for animated canvas rendering.
//!
//! Features:
//! - Per-frame render callback into an RGB [`Canvas`](wire_core::Canvas)
//! - Canvas follows the window size
//! - Nearest-neighbor texture upload (crisp single-pixel lines)
//! - Continuous repaint for animation
//!
//! # Quick Start
//!
//! ```ignore
//! use wire_view::{run, ViewOptions};
//! use wire_core::Rgb;
//!
//! let options = ViewOptions::default();
//! run(options, |canvas| {
//!     canvas.clear();
//!     canvas.set(10, 10, Rgb::WHITE);
//! })?;
//! ```
//!
//! The callback runs once per repaint with a canvas already sized to
//! the window; draw the whole frame each time.
//!
//! # Keyboard Shortcuts
//!
//! | Key | Action |
//! |-----|--------|
//! | `Esc` | Exit |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app;
mod error;

pub use app::{ViewApp, ViewOptions};
pub use error::{ViewError, ViewResult};

use wire_core::Canvas;

/// Runs the presenter window until it is closed.
///
/// Creates an eframe window and enters the event loop. The callback
/// is invoked once per frame with the canvas resized to the current
/// window dimensions.
///
/// # Arguments
/// * `options` - Window size and title
/// * `frame_fn` - Per-frame render callback
///
/// # Errors
///
/// Returns [`ViewError::Canvas`] for a zero-sized initial canvas and
/// [`ViewError::Window`] if the window or GPU surface cannot be
/// created.
pub fn run<F>(options: ViewOptions, frame_fn: F) -> ViewResult<()>
where
    F: FnMut(&mut Canvas) + 'static,
{
    tracing::debug!(
        "opening {}x{} window: {}",
        options.width,
        options.height,
        options.title
    );

    let canvas = Canvas::new(options.width, options.height)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&options.title)
            .with_inner_size([options.width as f32, options.height as f32])
            .with_min_inner_size([64.0, 64.0]),
        ..Default::default()
    };

    eframe::run_native(
        &options.title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ViewApp::new(canvas, frame_fn)))),
    )
    .map_err(|e| ViewError::Window(e.to_string()))
}
