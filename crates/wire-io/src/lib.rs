//! # wire-io
//!
//! Canvas I/O for wireframe rendering.
//!
//! This crate reads and writes the file formats used to store rendered
//! frames:
//!
//! - **PNG** - Lossless, the default output format
//! - **JPEG** - Lossy compression for previews
//!
//! # Architecture
//!
//! The crate uses a trait-based design for extensibility:
//!
//! - [`CanvasReader`] - Trait for format readers
//! - [`CanvasWriter`] - Trait for format writers
//! - [`read`] / [`write`] - High-level functions with format auto-detection
//!
//! All readers produce an 8-bit RGB [`Canvas`](wire_core::Canvas);
//! other color types convert on load.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wire_io::{read, write};
//!
//! // Read any supported format (auto-detected)
//! let canvas = read("frame.png")?;
//!
//! // Write to a different format
//! write("frame.jpg", &canvas)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths | Features |
//! |--------|------|-------|------------|----------|
//! | PNG | Yes | Yes | 8, 16 | sRGB chunk, lossless roundtrip |
//! | JPEG | Yes | Yes | 8 | Quality setting, grayscale output |
//!
//! # Dependencies
//!
//! - [`wire-core`] - Canvas and pixel types
//! - [`png`] - PNG support
//! - [`jpeg-decoder`] / [`jpeg-encoder`] - JPEG support
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod traits;
mod detect;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::{CanvasReader, CanvasWriter};

use std::path::Path;
use wire_core::Canvas;

/// Reads a canvas from a file, auto-detecting the format.
///
/// The format is detected by magic bytes with a fallback to the file
/// extension.
///
/// # Example
///
/// ```rust,ignore
/// use wire_io::read;
///
/// let canvas = read("frame.png")?;
/// println!("Size: {}x{}", canvas.width(), canvas.height());
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Canvas> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    tracing::debug!("detected {:?} for {}", format, path.display());

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Writes a canvas to a file, detecting format from extension.
///
/// # Example
///
/// ```rust,ignore
/// use wire_io::{read, write};
///
/// let canvas = read("frame.png")?;
/// write("frame.jpg", &canvas)?;
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created
/// - The extension is not a supported format
pub fn write<P: AsRef<Path>>(path: P, canvas: &Canvas) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, canvas),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, canvas),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire_core::Rgb;

    #[test]
    fn test_write_read_by_extension() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.set(4, 4, Rgb::YELLOW);

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("frame.png");

        write(&path, &canvas).expect("Write failed");
        let loaded = read(&path).expect("Read failed");
        assert_eq!(loaded, canvas);
    }

    #[test]
    fn test_unsupported_extension() {
        let canvas = Canvas::new(4, 4).unwrap();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("frame.bmp");

        let err = write(&path, &canvas).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_read_detects_by_magic_despite_extension() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.fill(Rgb::RED);

        let dir = tempfile::tempdir().expect("temp dir");
        // PNG bytes behind a .jpg name; magic detection wins.
        let path = dir.path().join("mislabeled.jpg");
        png::write(&path, &canvas).expect("Write failed");

        let loaded = read(&path).expect("Read failed");
        assert_eq!(loaded, canvas);
    }
}
