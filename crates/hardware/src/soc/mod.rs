//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components that make up the simulated platform:
//! the system bus, the device models, the interrupt output capability, and
//! the builder that assembles them from configuration.

/// System builder for assembling SoC components.
pub mod builder;

/// Memory-mapped I/O device implementations.
pub mod devices;

/// System bus interconnect and routing.
pub mod interconnect;

/// Interrupt output lines handed to devices.
pub mod irq;

/// Device trait definitions for MMIO access.
pub mod traits;

pub use builder::System;
