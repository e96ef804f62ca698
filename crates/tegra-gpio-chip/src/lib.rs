//! Silicon model for the Tegra GPIO controller block.
//!
//! This crate has **no dependencies** and **no hardware access** — it is a
//! pure model of the silicon: physical addresses, register layouts for both
//! documented bank arrangements, bank selection, and the page arithmetic
//! needed to map a register block through `/dev/mem`.
//!
//! Everything here follows the TRM register map for the controller at
//! `0x6000_d000`; offsets are asserted by tests against the documented
//! address comments in the map.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`addrs`] | Physical address map — controller bases, strides, counts |
//! | [`regs`] | Register fields, both bank layouts, initialization values |
//! | [`bank`] | Validated bank selection (which controller/port to drive) |
//! | [`page`] | Page-alignment arithmetic for `/dev/mem` mappings |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod addrs;
pub mod bank;
pub mod page;
pub mod regs;

pub use bank::BankConfig;
pub use regs::{Field, Layout};
