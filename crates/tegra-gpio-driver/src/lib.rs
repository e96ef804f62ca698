//! Userspace register mapper for the Tegra GPIO controller.
//!
//! Maps the controller's register page through `/dev/mem` and exposes a
//! typed, bounds-checked, volatile view over one bank — the safe shape of
//! the classic "overlay a struct on a mapped pointer" pattern.
//!
//! # Stack
//!
//! ```text
//! BankView<R>        typed field access, read-only guard, init()
//!   RegisterRegion   bounds-checked ordered 32-bit I/O (the seam)
//!     MappedPage     volatile MMIO over one /dev/mem page
//!     SimRegion      plain memory, for tests and CI
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use tegra_gpio_driver::prelude::*;
//! use std::sync::atomic::AtomicBool;
//! use std::time::Duration;
//!
//! # fn main() -> tegra_gpio_driver::Result<()> {
//! let bank = BankConfig::single_bank();
//! let mem = DevMem::open()?; // needs root
//! let page = mem.map_page(bank.base)?;
//! let offset = page.offset();
//!
//! let mut view = BankView::new(page, offset, bank.layout, bank.port)?;
//! view.init()?;
//!
//! let cfg = BlinkConfig::new(bank.toggle_field(), Duration::from_secs(1));
//! let stop = AtomicBool::new(false);
//! blink_loop(&mut view, &cfg, &stop)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod blink;
mod devmem;
mod error;
mod mmap;
mod region;
pub mod sim;
mod view;

pub use blink::{blink_loop, BlinkConfig, Blinker, PIN_MASK};
pub use devmem::{DevMem, DEV_MEM};
pub use error::{GpioError, Result};
pub use mmap::MappedPage;
pub use region::RegisterRegion;
pub use sim::SimRegion;
pub use view::BankView;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        blink_loop, BankView, BlinkConfig, Blinker, DevMem, GpioError, MappedPage,
        RegisterRegion, Result, SimRegion,
    };
    pub use tegra_gpio_chip::{BankConfig, Field, Layout};
}
