//! Register map for one GPIO controller.
//!
//! Every register is a 32-bit word. The TRM documents the same eight
//! registers under two arrangements of the identical silicon:
//!
//! ```text
//! Offset  Single-bank view          Multi-controller view
//! ──────  ────────────────────────  ─────────────────────────────
//! 0x00    CNF      (+ 12B pad)      CNF[0..4]      one word/port
//! 0x10    OE       (+ 12B pad)      OE[0..4]
//! 0x20    OUT      (+ 12B pad)      OUT[0..4]
//! 0x30    IN       (+ 12B pad)      IN[0..4]       read-only
//! 0x40    INT_STA  (+ 12B pad)      INT_STA[0..4]
//! 0x50    INT_ENB  (+ 12B pad)      INT_ENB[0..4]
//! 0x60    INT_LVL  (+ 12B pad)      INT_LVL[0..4]
//! 0x70    INT_CLR  (+ 12B pad)      INT_CLR[0..4]
//! ```
//!
//! Both views are 0x80 bytes long and place each field group at the same
//! 16-byte stride; they differ only in whether the three words after the
//! first are padding or the registers of ports 1..3.

use crate::addrs::PORTS_PER_CONTROLLER;
use std::fmt;

/// Byte length of one register block (either layout).
pub const BLOCK_LEN: usize = 0x80;

/// Byte stride between consecutive register field groups.
pub const FIELD_STRIDE: usize = 0x10;

/// One register field of the GPIO bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Pin configuration — GPIO mode vs. special function.
    Cnf,
    /// Output enable.
    Oe,
    /// Output value.
    Out,
    /// Input value. Read-only by hardware contract.
    In,
    /// Interrupt status.
    IntSta,
    /// Interrupt enable.
    IntEnb,
    /// Interrupt level/edge selection.
    IntLvl,
    /// Interrupt flag set-to-clear.
    IntClr,
}

impl Field {
    /// All fields in address order.
    pub const ALL: [Self; 8] = [
        Self::Cnf,
        Self::Oe,
        Self::Out,
        Self::In,
        Self::IntSta,
        Self::IntEnb,
        Self::IntLvl,
        Self::IntClr,
    ];

    /// Position of this field's group within the block (0..8).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Cnf => 0,
            Self::Oe => 1,
            Self::Out => 2,
            Self::In => 3,
            Self::IntSta => 4,
            Self::IntEnb => 5,
            Self::IntLvl => 6,
            Self::IntClr => 7,
        }
    }

    /// Whether the hardware forbids writing this field.
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::In)
    }

    /// Register name as it appears in the TRM.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cnf => "CNF",
            Self::Oe => "OE",
            Self::Out => "OUT",
            Self::In => "IN",
            Self::IntSta => "INT_STA",
            Self::IntEnb => "INT_ENB",
            Self::IntLvl => "INT_LVL",
            Self::IntClr => "INT_CLR",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Register arrangement variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One bank; each field padded to 16 bytes, only word 0 is live.
    SingleBank,
    /// One controller; each field group holds one word per port, packed.
    MultiController,
}

impl Layout {
    /// Number of independently addressable ports in this arrangement.
    #[must_use]
    pub const fn ports(self) -> usize {
        match self {
            Self::SingleBank => 1,
            Self::MultiController => PORTS_PER_CONTROLLER,
        }
    }

    /// Byte offset of `field` for `port`, relative to the block base.
    ///
    /// # Panics
    ///
    /// Panics if `port` is out of range for this arrangement.
    #[must_use]
    pub fn field_offset(self, field: Field, port: usize) -> usize {
        assert!(port < self.ports(), "port {port} out of range");
        field.index() * FIELD_STRIDE + port * 4
    }

    /// Field the reference blinker toggles under this arrangement.
    ///
    /// The single-bank program blinks by gating output enable; the
    /// multi-controller program drives the output value directly.
    #[must_use]
    pub const fn default_toggle_field(self) -> Field {
        match self {
            Self::SingleBank => Field::Oe,
            Self::MultiController => Field::Out,
        }
    }
}

/// One-time bank initialization values.
///
/// Forces all eight pins into GPIO mode, enables them as outputs driving
/// high, and leaves interrupt generation off. Writes are full 32-bit words;
/// the upper 24 bits are don't-care for an 8-pin bank and are written as
/// zero.
pub mod init {
    /// CNF — bit set selects GPIO mode over the special function.
    pub const CNF: u32 = 0x00FF;
    /// OE — all eight pins driven as outputs.
    pub const OE: u32 = 0xFF;
    /// OUT — all eight pins high.
    pub const OUT: u32 = 0xFF;
    /// INT_ENB — interrupt generation disabled.
    pub const INT_ENB: u32 = 0x00;
}
