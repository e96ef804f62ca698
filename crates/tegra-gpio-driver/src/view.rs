//! Typed view over one bank's register block
//!
//! Replaces the reference tool's raw struct-overlay-on-a-pointer with a
//! bounds-checked view: the region must hold the whole 0x80-byte block at
//! construction time, field offsets are computed from the layout rather
//! than pointer arithmetic, and the hardware's read-only contract on the
//! input register is enforced at runtime.

use crate::error::{GpioError, Result};
use crate::region::RegisterRegion;
use tegra_gpio_chip::regs::{init, Field, Layout, BLOCK_LEN};

/// Typed, ordered access to one GPIO bank.
///
/// Owns the underlying region; every access routes through
/// [`Layout::field_offset`] and the region's bounds-checked volatile I/O.
#[derive(Debug)]
pub struct BankView<R: RegisterRegion> {
    region: R,
    /// Byte offset of the register block within the region.
    block_offset: usize,
    layout: Layout,
    port: usize,
}

impl<R: RegisterRegion> BankView<R> {
    /// Overlay the register block on `region` at `block_offset`.
    ///
    /// # Errors
    ///
    /// - [`GpioError::InvalidPort`] if `port` is out of range for `layout`
    /// - [`GpioError::RegionTooSmall`] if the region cannot hold the whole
    ///   block at that offset
    pub fn new(region: R, block_offset: usize, layout: Layout, port: usize) -> Result<Self> {
        if port >= layout.ports() {
            return Err(GpioError::InvalidPort {
                port,
                count: layout.ports(),
            });
        }
        if block_offset + BLOCK_LEN > region.len() {
            return Err(GpioError::RegionTooSmall {
                offset: block_offset,
                needed: BLOCK_LEN,
                len: region.len(),
            });
        }
        Ok(Self {
            region,
            block_offset,
            layout,
            port,
        })
    }

    fn field_offset(&self, field: Field) -> usize {
        // port < layout.ports() was checked at construction
        self.block_offset + self.layout.field_offset(field, self.port)
    }

    /// Read `field` for the configured port.
    ///
    /// # Errors
    ///
    /// Propagates region access errors; unreachable for in-bounds views.
    pub fn read(&self, field: Field) -> Result<u32> {
        self.region.read32(self.field_offset(field))
    }

    /// Write `field` for the configured port.
    ///
    /// Writes are full 32-bit words; only the low 8 bits are meaningful for
    /// an 8-pin bank, the rest are written as zero.
    ///
    /// # Errors
    ///
    /// Returns [`GpioError::ReadOnlyField`] for [`Field::In`].
    pub fn write(&mut self, field: Field, value: u32) -> Result<()> {
        if field.is_read_only() {
            return Err(GpioError::ReadOnlyField { field });
        }
        self.region.write32(self.field_offset(field), value)
    }

    /// One-time bank setup: force GPIO mode, all pins output, driven high,
    /// interrupts off. Never touches the read-only input register.
    ///
    /// # Errors
    ///
    /// Propagates region access errors.
    pub fn init(&mut self) -> Result<()> {
        self.write(Field::Cnf, init::CNF)?;
        self.write(Field::Oe, init::OE)?;
        self.write(Field::Out, init::OUT)?;
        self.write(Field::IntEnb, init::INT_ENB)?;

        tracing::info!(
            "initialized bank (layout {:?}, port {}): CNF={:#06x} OE={:#04x} OUT={:#04x}",
            self.layout,
            self.port,
            init::CNF,
            init::OE,
            init::OUT,
        );
        Ok(())
    }

    /// Read every field of the configured port, in address order.
    ///
    /// # Errors
    ///
    /// Propagates region access errors.
    pub fn snapshot(&self) -> Result<Vec<(Field, u32)>> {
        Field::ALL
            .iter()
            .map(|&f| self.read(f).map(|v| (f, v)))
            .collect()
    }

    /// Arrangement this view was built for.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Port this view addresses.
    #[must_use]
    pub const fn port(&self) -> usize {
        self.port
    }

    /// Give back the underlying region.
    pub fn into_region(self) -> R {
        self.region
    }

    /// Borrow the underlying region.
    pub fn region(&self) -> &R {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegion;

    #[test]
    fn rejects_short_region() {
        let sim = SimRegion::new(0x40);
        assert!(matches!(
            BankView::new(sim, 0, Layout::SingleBank, 0),
            Err(GpioError::RegionTooSmall { .. })
        ));

        // Fits at offset 0 but not at 0x100
        let sim = SimRegion::new(0x100);
        assert!(BankView::new(sim.clone(), 0, Layout::SingleBank, 0).is_ok());
        assert!(BankView::new(sim, 0x100, Layout::SingleBank, 0).is_err());
    }

    #[test]
    fn rejects_invalid_port() {
        let sim = SimRegion::page();
        assert!(matches!(
            BankView::new(sim, 0, Layout::SingleBank, 1),
            Err(GpioError::InvalidPort { count: 1, .. })
        ));
    }

    #[test]
    fn refuses_to_write_input_register() {
        let sim = SimRegion::page();
        let mut view = BankView::new(sim, 0, Layout::MultiController, 2).unwrap();
        assert!(matches!(
            view.write(Field::In, 0),
            Err(GpioError::ReadOnlyField { field: Field::In })
        ));
        // Reading it is fine
        assert_eq!(view.read(Field::In).unwrap(), 0);
    }
}
