//! Memory-backed register region
//!
//! Stands in for a real mapping wherever no Tegra is present: the view,
//! initialization, and blink logic run against it unchanged, so the whole
//! stack above [`RegisterRegion`] is testable in CI.
//!
//! Reads and writes go through plain memory — "volatile" is vacuous here
//! because nothing else aliases the words — but bounds semantics are
//! identical to [`crate::MappedPage`].

use crate::error::{GpioError, Result};
use crate::region::RegisterRegion;

/// A register region backed by ordinary memory.
#[derive(Debug, Clone)]
pub struct SimRegion {
    words: Vec<u32>,
    writes: usize,
}

impl SimRegion {
    /// Create a zero-filled region of `len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a multiple of 4.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len % 4 == 0, "region length must be word-aligned");
        Self {
            words: vec![0; len / 4],
            writes: 0,
        }
    }

    /// Create a region the size of a typical 4 KB page.
    #[must_use]
    pub fn page() -> Self {
        Self::new(0x1000)
    }

    /// Preset a word without counting it as a register write.
    ///
    /// Used by tests to plant sentinels (e.g. in a read-only register).
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of bounds or unaligned.
    pub fn preset(&mut self, offset: usize, value: u32) {
        assert!(offset % 4 == 0 && offset + 4 <= self.len());
        self.words[offset / 4] = value;
    }

    /// Number of register writes issued through [`RegisterRegion::write32`].
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl RegisterRegion for SimRegion {
    fn len(&self) -> usize {
        self.words.len() * 4
    }

    fn read32(&self, offset: usize) -> Result<u32> {
        if offset % 4 != 0 || offset + 4 > self.len() {
            return Err(GpioError::OutOfBounds {
                offset,
                len: self.len(),
            });
        }
        Ok(self.words[offset / 4])
    }

    fn write32(&mut self, offset: usize, value: u32) -> Result<()> {
        if offset % 4 != 0 || offset + 4 > self.len() {
            return Err(GpioError::OutOfBounds {
                offset,
                len: self.len(),
            });
        }
        self.words[offset / 4] = value;
        self.writes += 1;
        tracing::trace!("sim write32 @ {offset:#x} = {value:#x}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_bounds_and_unaligned() {
        let mut sim = SimRegion::new(0x80);
        assert!(sim.read32(0x80).is_err());
        assert!(sim.write32(0x7E, 0).is_err());
        assert!(sim.read32(2).is_err());
        assert!(sim.read32(0x7C).is_ok());
    }

    #[test]
    fn preset_does_not_count_as_write() {
        let mut sim = SimRegion::page();
        sim.preset(0x30, 0xDEAD_BEEF);
        assert_eq!(sim.write_count(), 0);
        assert_eq!(sim.read32(0x30).unwrap(), 0xDEAD_BEEF);
    }
}
