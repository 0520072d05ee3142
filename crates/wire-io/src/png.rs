//! PNG format support.
//!
//! Provides reading and writing of PNG files. Writing always emits
//! 8-bit RGB with an sRGB chunk; reading converts other PNG color
//! types to 8-bit RGB on load.
//!
//! # Features
//!
//! - 8-bit and 16-bit input (16-bit narrowed to 8)
//! - RGB, RGBA, grayscale input
//! - Lossless roundtrip for canvas data
//!
//! # Example
//!
//! ```rust,ignore
//! use wire_io::png::{read, write};
//!
//! let canvas = read("input.png")?;
//! write("output.png", &canvas)?;
//! ```

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use wire_core::Canvas;

/// Reads a PNG file from the given path.
///
/// # Example
///
/// ```rust,ignore
/// use wire_io::png;
///
/// let canvas = png::read("input.png")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Canvas> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;

    let rgb = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => buf[..info.buffer_size()].to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            // Drop alpha
            buf[..info.buffer_size()]
                .chunks(4)
                .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
                .collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            // Expand grayscale to RGB
            buf[..info.buffer_size()]
                .iter()
                .flat_map(|&g| [g, g, g])
                .collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            // Expand grayscale to RGB, drop alpha
            buf[..info.buffer_size()]
                .chunks(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0]])
                .collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            // PNG 16-bit is big-endian; keep the high byte
            buf[..info.buffer_size()].chunks(2).map(|c| c[0]).collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            buf[..info.buffer_size()]
                .chunks(8)
                .flat_map(|px| [px[0], px[2], px[4]])
                .collect()
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedColorType(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Canvas::from_data(width, height, rgb).map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes a canvas to a PNG file.
///
/// The output is always 8-bit RGB tagged as sRGB.
///
/// # Example
///
/// ```rust,ignore
/// use wire_io::png;
///
/// png::write("output.png", &canvas)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, canvas: &Canvas) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    // Add sRGB chunk
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(canvas.data())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
