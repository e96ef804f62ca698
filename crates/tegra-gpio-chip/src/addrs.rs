//! Physical address map for the Tegra GPIO controller block.
//!
//! ```text
//! Controller  Base
//! ──────────  ──────────
//!  0          0x6000_d000
//!  1          0x6000_d100
//!  2          0x6000_d200
//!  ...        (stride 0x100)
//!  7          0x6000_d700
//! ```
//!
//! Each controller decodes 0x100 bytes and groups four 8-pin ports. The
//! single-bank register arrangement (see [`crate::regs::Layout`]) addresses
//! one bank directly at `0x6000_d100`, which is the same physical block the
//! multi-controller arrangement reaches as controller 1 — the two views
//! differ only in how the register words are strided.

/// Base physical address of the GPIO controller block.
pub const GPIO_BASE: u64 = 0x6000_d000;

/// Number of GPIO controllers in the block.
pub const CONTROLLER_COUNT: usize = 8;

/// Byte stride between consecutive controller register sets.
pub const CONTROLLER_STRIDE: u64 = 0x100;

/// Ports per controller (each port is an independent 8-pin bank).
pub const PORTS_PER_CONTROLLER: usize = 4;

/// Pins per port. Only the low 8 bits of each register word are meaningful.
pub const PINS_PER_PORT: usize = 8;

/// Physical address of the bank driven by the single-bank arrangement.
pub const SINGLE_BANK_ADDR: u64 = 0x6000_d100;

/// Physical base address of controller `index`, or `None` if out of range.
#[must_use]
pub fn controller_base(index: usize) -> Option<u64> {
    if index < CONTROLLER_COUNT {
        Some(GPIO_BASE + CONTROLLER_STRIDE * index as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_bases_span_documented_range() {
        assert_eq!(controller_base(0), Some(0x6000_d000));
        assert_eq!(controller_base(1), Some(0x6000_d100));
        assert_eq!(controller_base(7), Some(0x6000_d700));
        assert_eq!(controller_base(8), None);
    }

    #[test]
    fn single_bank_addr_is_controller_1() {
        assert_eq!(controller_base(1), Some(SINGLE_BANK_ADDR));
    }
}
