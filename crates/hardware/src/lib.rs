//! Virtual Foo device model.
//!
//! This crate implements a register-level model of the `virt-foo` MMIO peripheral:
//! 1. **Device:** A four-register file, the bus access dispatcher with its read-gating
//!    policy, and the raise/acknowledge interrupt protocol.
//! 2. **Interrupts:** An injected output-line capability instead of a platform singleton.
//! 3. **Platform:** Bus interconnect, configuration, and a builder that wires the device in.
//!
//! Accesses are synchronous and serialized by the caller (`&mut self`); the model never
//! blocks and never reports bus errors to the initiator.

/// Common types (access width and direction, errors).
pub mod common;
/// Platform configuration (defaults, JSON loading, validation).
pub mod config;
/// System-on-chip (builder, bus, devices, interrupt lines, traits).
pub mod soc;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The Foo device.
pub use crate::soc::devices::VirtFoo;
/// Top-level system (bus and interrupt line); construct with `System::new`.
pub use crate::soc::System;
