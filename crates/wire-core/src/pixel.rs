//! RGB pixel color.
//!
//! Wireframe rendering needs nothing beyond an 8-bit RGB triple: the
//! canvas stores interleaved `[R G B]` bytes and every draw call takes
//! an [`Rgb`] value.
//!
//! # Usage
//!
//! ```rust
//! use wire_core::Rgb;
//!
//! let c = Rgb::new(255, 255, 0);
//! assert_eq!(c, Rgb::YELLOW);
//! assert_eq!(c.to_array(), [255, 255, 0]);
//! ```

/// An 8-bit RGB color.
///
/// # Memory Layout
///
/// `#[repr(C)]` with channels in R, G, B order, matching the canvas
/// byte layout, so a `[Rgb]` slice and the raw canvas bytes agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Black (0, 0, 0), the canvas background.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red (255, 0, 0).
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green (0, 255, 0).
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue (0, 0, 255).
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Yellow (255, 255, 0).
    pub const YELLOW: Self = Self::new(255, 255, 0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [u8; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(a: [u8; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(c: Rgb) -> [u8; 3] {
        c.to_array()
    }
}
