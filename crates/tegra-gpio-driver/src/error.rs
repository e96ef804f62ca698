//! Error types for GPIO mapper operations

use std::path::PathBuf;
use tegra_gpio_chip::Field;
use thiserror::Error;

/// Result type alias for GPIO mapper operations
pub type Result<T> = std::result::Result<T, GpioError>;

/// Errors that can occur while mapping and driving GPIO registers
#[derive(Debug, Error)]
pub enum GpioError {
    /// Physical-memory device could not be opened (usually insufficient
    /// privilege — the hint is part of the message by design of the
    /// reference tool).
    #[error("cannot open {path}: {source} — run as root (for example with sudo)")]
    DeviceOpen {
        /// Device path that was opened
        path: PathBuf,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// The OS rejected the page mapping request
    #[error("mmap of page at {addr:#x} failed: {source}")]
    Map {
        /// Page-aligned physical address that was requested
        addr: u64,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// Region cannot hold the register block at the requested offset
    #[error("region too small: block needs {needed:#x} bytes at offset {offset:#x}, region is {len:#x}")]
    RegionTooSmall {
        /// Offset of the block within the region
        offset: usize,
        /// Bytes required from that offset
        needed: usize,
        /// Total region length
        len: usize,
    },

    /// Register access beyond the mapped region
    #[error("out of bounds access: offset={offset:#x}, size=4, limit={len:#x}")]
    OutOfBounds {
        /// Requested byte offset
        offset: usize,
        /// Region length
        len: usize,
    },

    /// Attempted write to a register the hardware defines as read-only
    #[error("register {field} is read-only")]
    ReadOnlyField {
        /// The offending field
        field: Field,
    },

    /// Port index out of range for the selected arrangement
    #[error("port {port} out of range (arrangement has {count} ports)")]
    InvalidPort {
        /// Requested port
        port: usize,
        /// Ports available
        count: usize,
    },
}

impl GpioError {
    /// Create a device-open error
    pub fn device_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DeviceOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a map-failed error
    pub fn map_failed(addr: u64, source: std::io::Error) -> Self {
        Self::Map { addr, source }
    }
}
