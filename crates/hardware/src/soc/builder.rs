//! Platform construction and top-level `System` type.
//!
//! This module builds the platform from configuration. It performs:
//! 1. **Validation:** Rejects placements the bus cannot honour.
//! 2. **Interrupt wiring:** Creates the shared line the Foo device drives.
//! 3. **Device registration:** Instantiates the Foo device and attaches it to the bus.

use crate::common::{AccessWidth, ConfigError};
use crate::config::Config;
use crate::soc::devices::VirtFoo;
use crate::soc::interconnect::Bus;
use crate::soc::irq::IrqLevel;

/// Top-level platform instance: the bus and the host side of the Foo interrupt line.
#[derive(Debug)]
pub struct System {
    /// System interconnect; routes accesses to MMIO devices.
    pub bus: Bus,
    /// Host-side handle on the line the Foo device drives.
    irq_line: IrqLevel,
}

impl System {
    /// Builds a new system from configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`Config::validate`], or
    /// [`ConfigError::Bus`] if the device cannot be attached.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut bus = Bus::new();
        let irq_line = IrqLevel::new();

        let foo = VirtFoo::new(config.foo.base_addr, config.foo.chip_id, irq_line.clone())
            .with_irq_id(config.foo.irq);
        bus.add_device(Box::new(foo))?;

        Ok(Self { bus, irq_line })
    }

    /// Returns the host-side handle on the Foo interrupt line.
    pub const fn irq_line(&self) -> &IrqLevel {
        &self.irq_line
    }

    /// Reads at a physical address; unclaimed addresses read as 0.
    pub fn read(&mut self, paddr: u64, width: AccessWidth) -> u64 {
        self.bus.read(paddr, width)
    }

    /// Writes at a physical address; writes to unclaimed addresses are dropped.
    pub fn write(&mut self, paddr: u64, width: AccessWidth, val: u64) {
        self.bus.write(paddr, width, val);
    }

    /// Resets every device on the bus.
    pub fn reset(&mut self) {
        self.bus.reset();
    }
}
