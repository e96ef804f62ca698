//! Periodic output toggling
//!
//! The reference tool's infinite blink loop, restructured around a stop
//! token so library consumers and tests can end it deterministically. The
//! `blink` binary never sets the token — the process runs until killed,
//! matching the reference behavior.

use crate::error::Result;
use crate::region::RegisterRegion;
use crate::view::BankView;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tegra_gpio_chip::Field;

/// Mask of the 8 meaningful pin bits in a bank register.
pub const PIN_MASK: u8 = 0xFF;

/// Blink parameters.
#[derive(Debug, Clone, Copy)]
pub struct BlinkConfig {
    /// Field the toggled value is written to each period.
    pub field: Field,
    /// Fixed sleep between writes.
    pub period: Duration,
}

impl BlinkConfig {
    /// Blink `field` once per `period`.
    #[must_use]
    pub const fn new(field: Field, period: Duration) -> Self {
        Self { field, period }
    }
}

/// Tracks the alternating pin value.
///
/// Starts at all-high; each tick inverts the low 8 bits, so from reset the
/// written sequence is `0x00, 0xFF, 0x00, ...`.
#[derive(Debug)]
pub struct Blinker {
    value: u8,
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new()
    }
}

impl Blinker {
    /// Blinker at its reset value (all pins high).
    #[must_use]
    pub const fn new() -> Self {
        Self { value: PIN_MASK }
    }

    /// Invert the tracked value and write it to `field`.
    ///
    /// Returns the value that was written.
    ///
    /// # Errors
    ///
    /// Propagates view errors (read-only field, out-of-bounds region).
    pub fn tick<R: RegisterRegion>(
        &mut self,
        view: &mut BankView<R>,
        field: Field,
    ) -> Result<u8> {
        self.value ^= PIN_MASK;
        view.write(field, u32::from(self.value))?;
        Ok(self.value)
    }
}

/// Toggle `cfg.field` forever, one write per period, until `stop` is set.
///
/// Each iteration sleeps the fixed period and then writes the inverted
/// value; the token is checked once per period, so cancellation latency is
/// at most one period. No retries, no other blocking.
///
/// # Errors
///
/// Propagates the first write failure; a validated view cannot fail here
/// unless `cfg.field` is the read-only input register.
pub fn blink_loop<R: RegisterRegion>(
    view: &mut BankView<R>,
    cfg: &BlinkConfig,
    stop: &AtomicBool,
) -> Result<()> {
    let mut blinker = Blinker::new();

    tracing::info!(
        "blinking {} every {:?} (layout {:?}, port {})",
        cfg.field,
        cfg.period,
        view.layout(),
        view.port(),
    );

    while !stop.load(Ordering::Relaxed) {
        std::thread::sleep(cfg.period);
        let value = blinker.tick(view, cfg.field)?;
        tracing::debug!("wrote {value:#04x} to {}", cfg.field);
    }

    tracing::info!("blink loop stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegion;
    use tegra_gpio_chip::Layout;

    #[test]
    fn tick_alternates_from_reset() {
        let sim = SimRegion::page();
        let mut view = BankView::new(sim, 0, Layout::SingleBank, 0).unwrap();
        let mut blinker = Blinker::new();

        let seq: Vec<u8> = (0..4)
            .map(|_| blinker.tick(&mut view, Field::Oe).unwrap())
            .collect();
        assert_eq!(seq, [0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!(view.read(Field::Oe).unwrap(), 0xFF);
    }

    #[test]
    fn loop_returns_when_stop_already_set() {
        let sim = SimRegion::page();
        let mut view = BankView::new(sim, 0, Layout::SingleBank, 0).unwrap();
        let cfg = BlinkConfig::new(Field::Oe, Duration::from_millis(1));

        let stop = AtomicBool::new(true);
        blink_loop(&mut view, &cfg, &stop).unwrap();

        // Never ticked: register still at its zeroed reset value
        assert_eq!(view.read(Field::Oe).unwrap(), 0);
        assert_eq!(view.region().write_count(), 0);
    }
}
