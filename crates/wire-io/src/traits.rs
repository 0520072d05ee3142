//! I/O traits for canvas readers and writers.
//!
//! These traits define the interface for format-specific implementations.

use crate::IoResult;
use std::path::Path;
use wire_core::Canvas;

/// Trait for canvas format readers.
///
/// Implement this trait to add support for reading a new file format.
/// Readers always produce an 8-bit RGB [`Canvas`]; formats with other
/// color types convert on load.
pub trait CanvasReader {
    /// Reads a canvas from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<Canvas>;

    /// Reads a canvas from memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Canvas>;
}

/// Trait for canvas format writers.
///
/// Implement this trait to add support for writing a new file format.
pub trait CanvasWriter {
    /// Writes a canvas to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, canvas: &Canvas) -> IoResult<()>;

    /// Writes a canvas to memory.
    fn write_to_memory(&self, canvas: &Canvas) -> IoResult<Vec<u8>>;
}
