//! Memory-Mapped IO Devices.
//!
//! This module contains the device models that can be attached to the
//! system bus. The Foo device is the only peripheral the platform carries.

/// Virtual Foo device (register file, access dispatcher, interrupt output).
pub mod virt_foo;

pub use virt_foo::{IrqCause, VirtFoo};

pub use crate::soc::traits::Device;
