//! Memory-mapped register page
//!
//! One page of physical memory mapped shared/read-write through `/dev/mem`,
//! with bounds-checked volatile access. Unsafe is confined to the mmap
//! itself and the volatile loads/stores.

// MMIO registers are naturally aligned by hardware, so pointer casts are safe
#![allow(clippy::cast_ptr_alignment)]

use crate::error::{GpioError, Result};
use crate::region::RegisterRegion;
use rustix::mm::{mmap, munmap, MapFlags, ProtFlags};
use rustix::param::page_size;
use std::os::unix::io::{AsFd, OwnedFd};
use std::ptr::NonNull;
use tegra_gpio_chip::page;

/// One mapped page of physical memory.
///
/// Created via [`crate::DevMem::map_page`]. The mapping is released in
/// `Drop` — the reference tool never tears down, but deterministic release
/// costs nothing and lets the mapping be a normal owned resource.
pub struct MappedPage {
    ptr: NonNull<u8>,
    len: usize,
    /// In-page byte offset of the originally requested physical address.
    offset: usize,
    /// Page-aligned physical address the mapping starts at.
    page_base: u64,
}

impl std::fmt::Debug for MappedPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedPage")
            .field("ptr", &format_args!("{:p}", self.ptr))
            .field("len", &self.len)
            .field("offset", &format_args!("{:#x}", self.offset))
            .field("page_base", &format_args!("{:#x}", self.page_base))
            .finish()
    }
}

// SAFETY: Send - MappedPage owns the mapping exclusively and mmap'd memory is
// process-wide; moving the owner between threads does not invalidate it.
unsafe impl Send for MappedPage {}

// SAFETY: Sync - reads take &self and are bounds-checked volatile loads
// (idempotent for concurrent readers); writes require &mut self, so exclusive
// access is enforced by the borrow checker.
unsafe impl Sync for MappedPage {}

impl MappedPage {
    /// Map the page containing physical address `phys`.
    pub(crate) fn map(fd: &OwnedFd, phys: u64) -> Result<Self> {
        let len = page_size();
        let page_base = page::base(phys, len);
        let offset = page::offset(phys, len);

        tracing::debug!(
            "mapping page at {page_base:#x} (requested {phys:#x}, in-page offset {offset:#x})"
        );

        // SAFETY: mmap is required to reach physical memory. Invariants:
        // (1) fd is a valid open /dev/mem descriptor; (2) len is the system
        // page size, non-zero; (3) page_base is page-aligned by construction;
        // (4) PROT_READ|PROT_WRITE + MAP_SHARED is the register-access
        // contract; (5) rustix returns Result, failures are propagated;
        // (6) the pointer is unmapped exactly once, in Drop.
        let ptr = unsafe {
            let addr = mmap(
                std::ptr::null_mut(),
                len,
                ProtFlags::READ | ProtFlags::WRITE,
                MapFlags::SHARED,
                fd.as_fd(),
                page_base,
            )
            .map_err(|e| GpioError::map_failed(page_base, e.into()))?;

            NonNull::new(addr.cast::<u8>())
                .expect("rustix mmap returns non-null pointer on success")
        };

        tracing::info!("mapped {len} bytes at {ptr:p} for physical {page_base:#x}");

        Ok(Self {
            ptr,
            len,
            offset,
            page_base,
        })
    }

    /// In-page byte offset of the physical address this page was mapped for.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Page-aligned physical address the mapping starts at.
    #[must_use]
    pub const fn page_base(&self) -> u64 {
        self.page_base
    }
}

impl RegisterRegion for MappedPage {
    fn len(&self) -> usize {
        self.len
    }

    fn read32(&self, offset: usize) -> Result<u32> {
        if offset + 4 > self.len {
            return Err(GpioError::OutOfBounds {
                offset,
                len: self.len,
            });
        }

        // SAFETY: read_volatile is required for MMIO — the hardware can
        // change the value and the access must not be elided or reordered.
        // Invariants: ptr is valid for self.len bytes (from successful mmap),
        // offset + 4 <= self.len (checked above), registers are 4-byte
        // aligned per the TRM.
        let value = unsafe { self.ptr.as_ptr().add(offset).cast::<u32>().read_volatile() };

        tracing::trace!("read32 @ {offset:#x} = {value:#x}");
        Ok(value)
    }

    fn write32(&mut self, offset: usize, value: u32) -> Result<()> {
        if offset + 4 > self.len {
            return Err(GpioError::OutOfBounds {
                offset,
                len: self.len,
            });
        }

        tracing::trace!("write32 @ {offset:#x} = {value:#x}");

        // SAFETY: write_volatile is required for MMIO — writes trigger
        // hardware side effects, so repeated writes of the same value are
        // distinct operations and must all be emitted in program order.
        // Invariants: ptr valid for self.len bytes, offset + 4 <= self.len
        // (checked above), registers 4-byte aligned per the TRM.
        unsafe {
            self.ptr.as_ptr().add(offset).cast::<u32>().write_volatile(value);
        }

        Ok(())
    }
}

impl Drop for MappedPage {
    fn drop(&mut self) {
        // SAFETY: munmap requires the exact pointer/length pair returned by
        // mmap in map(); both are stored unmodified. Drop runs at most once
        // and no other references to the mapping exist.
        unsafe {
            if let Err(e) = munmap(self.ptr.as_ptr().cast(), self.len) {
                tracing::error!("munmap failed during drop: {e}");
            }
        }
        tracing::debug!("unmapped page at physical {:#x}", self.page_base);
    }
}
