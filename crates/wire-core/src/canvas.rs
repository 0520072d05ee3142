//! RGB pixel buffer.
//!
//! [`Canvas`] is the surface everything renders into: the rasterizer
//! writes pixels through [`Canvas::set`], encoders and the window
//! presenter consume the raw bytes through [`Canvas::data`].
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-left origin, 3 bytes
//! per pixel:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0 (top)
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! # Bounds Policy
//!
//! [`Canvas::set`] takes signed coordinates and **silently drops**
//! writes outside the canvas. There is no clipping stage in the
//! pipeline, so geometry behind the camera or off-screen routinely
//! produces far out-of-range coordinates; dropping them at this seam
//! keeps every draw routine above it unconditional.
//!
//! # Usage
//!
//! ```rust
//! use wire_core::{Canvas, Rgb};
//!
//! let mut canvas = Canvas::new(100, 100)?;
//! canvas.set(50, 50, Rgb::RED);
//! assert_eq!(canvas.get(50, 50), Some(Rgb::RED));
//! canvas.set(-1, 200, Rgb::RED); // dropped
//! # Ok::<(), wire_core::Error>(())
//! ```

use crate::{Error, Result, Rgb};

/// An owned RGB pixel buffer with top-left origin.
///
/// Created by the renderer or the window presenter, written by the
/// rasterizer through a mutable reference, and never reallocated by
/// anything but [`Canvas::resize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Interleaved RGB bytes, `3 * width * height` long
    data: Vec<u8>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl Canvas {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// Creates a new all-black canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is
    /// zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wire_core::Canvas;
    ///
    /// let canvas = Canvas::new(1024, 768)?;
    /// assert_eq!(canvas.dimensions(), (1024, 768));
    /// # Ok::<(), wire_core::Error>(())
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::validate(width, height)?;
        Ok(Self {
            data: vec![0; Self::CHANNELS * width as usize * height as usize],
            width,
            height,
        })
    }

    /// Creates a canvas from existing interleaved RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is
    /// zero or `data` is not exactly `3 * width * height` bytes.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::validate(width, height)?;
        let expected = Self::CHANNELS * width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a canvas filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let mut canvas = Self::new(width, height)?;
        canvas.fill(color);
        Ok(canvas)
    }

    fn validate(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "zero-area canvas",
            ));
        }
        Ok(())
    }

    /// Returns the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the width-to-height aspect ratio.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Returns a reference to the raw interleaved RGB bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the raw bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the byte offset for the pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS
    }

    /// Writes the pixel at (x, y).
    ///
    /// Coordinates outside the canvas are silently dropped; see the
    /// module-level bounds policy.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Resets every pixel to black.
    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Fills the entire canvas with a color.
    pub fn fill(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(Self::CHANNELS) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Returns a row of pixels as a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * Self::CHANNELS;
        let end = start + self.width as usize * Self::CHANNELS;
        &self.data[start..end]
    }

    /// Reallocates the canvas to new dimensions.
    ///
    /// Prior content is destroyed; the new canvas is all black. Used
    /// by the window presenter when the window size changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is
    /// zero; the canvas is left untouched in that case.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        Self::validate(width, height)?;
        self.data = vec![0; Self::CHANNELS * width as usize * height as usize];
        self.width = width;
        self.height = height;
        Ok(())
    }
}
