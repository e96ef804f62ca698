//! Register region abstraction
//!
//! The seam between real hardware mappings and the memory-backed simulation:
//! everything above this trait (views, initialization, the blink loop) is
//! exercised in CI without a Tegra present.

use crate::error::Result;

/// A bounds-checked window of 32-bit hardware registers.
///
/// Implementations must make every access a single, ordered, non-elidable
/// transaction against the backing store. For real mappings that means
/// volatile reads and writes — successive writes of the same value to the
/// same offset are observably distinct hardware operations and must all be
/// emitted, in program order.
pub trait RegisterRegion {
    /// Region length in bytes.
    fn len(&self) -> usize;

    /// Whether the region is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the 32-bit register at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset + 4` exceeds the region.
    fn read32(&self, offset: usize) -> Result<u32>;

    /// Write the 32-bit register at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset + 4` exceeds the region.
    fn write32(&mut self, offset: usize, value: u32) -> Result<()>;
}
