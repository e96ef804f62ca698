//! Bank selection — which physical block and port to drive.
//!
//! Replaces the reference programs' scattered magic addresses with one
//! validated structure, built once at startup.

use crate::addrs::{controller_base, SINGLE_BANK_ADDR};
use crate::regs::{Field, Layout};

/// A validated selection of one GPIO bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    /// Physical base address of the register block.
    pub base: u64,
    /// Register arrangement at that address.
    pub layout: Layout,
    /// Port within the block (always 0 for the single-bank arrangement).
    pub port: usize,
}

impl BankConfig {
    /// The single-bank arrangement at its fixed address.
    #[must_use]
    pub const fn single_bank() -> Self {
        Self {
            base: SINGLE_BANK_ADDR,
            layout: Layout::SingleBank,
            port: 0,
        }
    }

    /// The multi-controller arrangement for `controller`/`port`.
    ///
    /// Returns `None` if either index is out of range.
    #[must_use]
    pub fn multi_controller(controller: usize, port: usize) -> Option<Self> {
        let base = controller_base(controller)?;
        if port >= Layout::MultiController.ports() {
            return None;
        }
        Some(Self {
            base,
            layout: Layout::MultiController,
            port,
        })
    }

    /// Field the blinker toggles by default for this bank's arrangement.
    #[must_use]
    pub const fn toggle_field(&self) -> Field {
        self.layout.default_toggle_field()
    }
}
