//! Error definitions.
//!
//! Register accesses never fail: a device answers every offset inside its window,
//! sometimes with a no-op. Errors only exist at the host-facing edges:
//! 1. **Configuration:** Loading and validating a [`Config`](crate::config::Config).
//! 2. **Bus Wiring:** Registering devices and decoding addresses no device claims.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for the expected schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The MMIO base is not word aligned.
    #[error("MMIO base {0:#x} is not 4-byte aligned")]
    UnalignedBase(u64),

    /// The window wraps around the end of the physical address space.
    #[error("MMIO window at {base:#x} with size {size:#x} overflows the address space")]
    WindowOverflow {
        /// Configured base address.
        base: u64,
        /// Configured window size.
        size: u64,
    },

    /// The interrupt number does not fit the bus's 64-bit pending mask.
    #[error("interrupt number {irq} is out of range (max {max})")]
    IrqOutOfRange {
        /// Configured interrupt number.
        irq: u32,
        /// Largest accepted interrupt number.
        max: u32,
    },

    /// Bus wiring failed while assembling the system.
    #[error(transparent)]
    Bus(#[from] BusError),
}

/// Errors raised by the interconnect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    /// A new device window intersects a window already on the bus.
    #[error("device {new} at {new_base:#x} overlaps {existing} at {existing_base:#x}")]
    Overlap {
        /// Name of the device being registered.
        new: String,
        /// Base of the device being registered.
        new_base: u64,
        /// Name of the device already on the bus.
        existing: String,
        /// Base of the device already on the bus.
        existing_base: u64,
    },

    /// No device claims the physical address.
    #[error("no device mapped at {0:#x}")]
    Unmapped(u64),
}
