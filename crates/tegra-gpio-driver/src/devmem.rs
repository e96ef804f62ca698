//! Physical-memory device handle
//!
//! Opens `/dev/mem` read/write with `O_SYNC` so mapped register pages are
//! uncached, and hands out single-page mappings of physical addresses.

use crate::error::{GpioError, Result};
use crate::mmap::MappedPage;
use rustix::fs::{open, Mode, OFlags};
use std::os::unix::io::OwnedFd;

/// Path of the physical-memory device.
pub const DEV_MEM: &str = "/dev/mem";

/// Open handle to the physical-memory device.
///
/// The fd closes when the handle drops; mappings created from it stay valid
/// independently (the kernel keeps the backing alive per mapping).
#[derive(Debug)]
pub struct DevMem {
    fd: OwnedFd,
}

impl DevMem {
    /// Open `/dev/mem` for register mapping.
    ///
    /// # Errors
    ///
    /// Returns [`GpioError::DeviceOpen`] if the device cannot be opened —
    /// most commonly `EACCES` because the process lacks root privilege.
    pub fn open() -> Result<Self> {
        let fd = open(DEV_MEM, OFlags::RDWR | OFlags::SYNC, Mode::empty())
            .map_err(|e| GpioError::device_open(DEV_MEM, e.into()))?;

        tracing::debug!("opened {DEV_MEM} (O_RDWR | O_SYNC)");
        Ok(Self { fd })
    }

    /// Map the one page of physical memory containing `phys`.
    ///
    /// The returned mapping covers exactly one system page starting at the
    /// page boundary below `phys`; [`MappedPage::offset`] gives the in-page
    /// position of `phys` itself.
    ///
    /// # Errors
    ///
    /// Returns [`GpioError::Map`] if the kernel rejects the mapping
    /// (address not mappable, resource limits).
    pub fn map_page(&self, phys: u64) -> Result<MappedPage> {
        MappedPage::map(&self.fd, phys)
    }
}
