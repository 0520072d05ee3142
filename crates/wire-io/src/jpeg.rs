//! JPEG format support.
//!
//! Provides reading and writing of JPEG files for compact previews of
//! rendered frames.
//!
//! # Overview
//!
//! JPEG is lossy and 8-bit only, which suits preview output but not
//! pixel-exact archiving. For lossless roundtrips use [`crate::png`].
//!
//! # Architecture
//!
//! This module provides two approaches:
//!
//! 1. **Struct + Trait** (for quality control):
//!    - [`JpegReader`] implements [`CanvasReader`] for reading
//!    - [`JpegWriter`] implements [`CanvasWriter`] for writing
//!    - Configure via [`JpegWriterOptions`]
//!
//! 2. **Convenience functions** (simple cases):
//!    - [`read()`] - read with defaults
//!    - [`write()`] - write with defaults
//!
//! # Examples
//!
//! Simple usage:
//! ```rust,ignore
//! use wire_io::jpeg;
//!
//! let canvas = jpeg::read("frame.jpg")?;
//! jpeg::write("preview.jpg", &canvas)?;
//! ```
//!
//! With quality control:
//! ```rust,ignore
//! use wire_io::jpeg::{JpegWriter, JpegWriterOptions};
//! use wire_io::CanvasWriter;
//!
//! let writer = JpegWriter::with_options(JpegWriterOptions {
//!     quality: 95,
//!     ..Default::default()
//! });
//! writer.write("highq.jpg", &canvas)?;
//! ```

use crate::{CanvasReader, CanvasWriter, IoError, IoResult};
use std::io::{BufReader, Cursor};
use std::path::Path;
use wire_core::Canvas;

// ============================================================================
// Color Type
// ============================================================================

/// JPEG output color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorType {
    /// Full color RGB output.
    #[default]
    Rgb,
    /// Grayscale output (smaller files for monochrome wireframes).
    Grayscale,
}

// ============================================================================
// Writer Options
// ============================================================================

/// Options for writing JPEG files.
///
/// Controls quality and color output mode.
///
/// # Example
///
/// ```rust,ignore
/// use wire_io::jpeg::{JpegWriter, JpegWriterOptions};
/// use wire_io::CanvasWriter;
///
/// let options = JpegWriterOptions {
///     quality: 95,
///     ..Default::default()
/// };
/// JpegWriter::with_options(options).write("frame.jpg", &canvas)?;
/// ```
#[derive(Debug, Clone)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    /// Default: 90 (good balance for most uses).
    pub quality: u8,
    /// Output color mode. Default: RGB.
    pub color_type: ColorType,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self {
            quality: 90,
            color_type: ColorType::Rgb,
        }
    }
}

// ============================================================================
// JpegReader
// ============================================================================

/// JPEG file reader.
///
/// Implements [`CanvasReader`]. Grayscale input expands to RGB; CMYK
/// is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegReader;

impl JpegReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Internal read implementation.
    fn read_impl<R: std::io::Read>(&self, reader: R) -> IoResult<Canvas> {
        let buf_reader = BufReader::new(reader);
        let mut decoder = jpeg_decoder::Decoder::new(buf_reader);
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::DecodeError(e.to_string()))?;

        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        let width = info.width as u32;
        let height = info.height as u32;

        let rgb = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels,
            jpeg_decoder::PixelFormat::L8 => {
                // Grayscale to RGB
                pixels.iter().flat_map(|&g| [g, g, g]).collect()
            }
            jpeg_decoder::PixelFormat::L16 => {
                // 16-bit grayscale to 8-bit RGB (high byte)
                pixels
                    .chunks(2)
                    .flat_map(|l16| {
                        let g = l16[0];
                        [g, g, g]
                    })
                    .collect()
            }
            jpeg_decoder::PixelFormat::CMYK32 => {
                return Err(IoError::UnsupportedColorType("CMYK JPEG".into()));
            }
        };

        Canvas::from_data(width, height, rgb).map_err(|e| IoError::DecodeError(e.to_string()))
    }
}

impl CanvasReader for JpegReader {
    /// Reads a JPEG file from disk.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<Canvas> {
        let data = std::fs::read(path.as_ref())?;
        self.read_impl(Cursor::new(&data))
    }

    /// Reads a JPEG from a byte slice.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Canvas> {
        self.read_impl(Cursor::new(data))
    }
}

// ============================================================================
// JpegWriter
// ============================================================================

/// JPEG file writer.
///
/// Implements [`CanvasWriter`] with configurable quality and color
/// mode.
///
/// # Example
///
/// ```rust,ignore
/// use wire_io::jpeg::{JpegWriter, JpegWriterOptions};
/// use wire_io::CanvasWriter;
///
/// // Low quality for thumbnails
/// let writer = JpegWriter::with_options(JpegWriterOptions {
///     quality: 60,
///     ..Default::default()
/// });
/// writer.write("thumb.jpg", &canvas)?;
/// ```
#[derive(Debug, Clone)]
pub struct JpegWriter {
    options: JpegWriterOptions,
}

impl JpegWriter {
    /// Creates a new writer with default options (quality 90).
    pub fn new() -> Self {
        Self::with_options(JpegWriterOptions::default())
    }

    /// Creates a writer with custom options.
    pub fn with_options(options: JpegWriterOptions) -> Self {
        Self { options }
    }

    /// Internal write implementation.
    fn write_impl(&self, canvas: &Canvas) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType as JpegColorType, Encoder};

        // JPEG dimensions are 16-bit
        if canvas.width() > u16::MAX as u32 || canvas.height() > u16::MAX as u32 {
            return Err(IoError::EncodeError(format!(
                "canvas {}x{} exceeds the JPEG limit of 65535",
                canvas.width(),
                canvas.height()
            )));
        }

        let (color_type, pixel_data) = match self.options.color_type {
            ColorType::Rgb => (JpegColorType::Rgb, canvas.data().to_vec()),
            ColorType::Grayscale => {
                // ITU-R BT.601 luma coefficients
                let gray = canvas
                    .data()
                    .chunks_exact(Canvas::CHANNELS)
                    .map(|px| {
                        let r = px[0] as f32;
                        let g = px[1] as f32;
                        let b = px[2] as f32;
                        (0.299 * r + 0.587 * g + 0.114 * b) as u8
                    })
                    .collect();
                (JpegColorType::Luma, gray)
            }
        };

        let mut buffer = Vec::new();
        let encoder = Encoder::new(&mut buffer, self.options.quality);
        encoder
            .encode(
                &pixel_data,
                canvas.width() as u16,
                canvas.height() as u16,
                color_type,
            )
            .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

        Ok(buffer)
    }
}

impl Default for JpegWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasWriter for JpegWriter {
    /// Writes a JPEG file to disk.
    fn write<P: AsRef<Path>>(&self, path: P, canvas: &Canvas) -> IoResult<()> {
        let data = self.write_to_memory(canvas)?;
        std::fs::write(path.as_ref(), data)?;
        Ok(())
    }

    /// Writes a JPEG to a byte vector.
    fn write_to_memory(&self, canvas: &Canvas) -> IoResult<Vec<u8>> {
        self.write_impl(canvas)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Reads a JPEG file with default options.
///
/// Convenience wrapper around [`JpegReader`].
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Canvas> {
    JpegReader::new().read(path)
}

/// Writes a JPEG file with default options (quality 90).
///
/// Convenience wrapper around [`JpegWriter`]. For custom options,
/// use [`JpegWriter::with_options`].
pub fn write<P: AsRef<Path>>(path: P, canvas: &Canvas) -> IoResult<()> {
    JpegWriter::new().write(path, canvas)
}

// ============================================================================
// Tests
// ============================================================================
