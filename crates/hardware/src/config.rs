//! Configuration for the Foo platform.
//!
//! This module defines the configuration structures used to assemble a [`System`](crate::soc::System). It provides:
//! 1. **Defaults:** Baseline platform constants (MMIO base, chip identity, IRQ number).
//! 2. **Structures:** A root [`Config`] with one section per device.
//! 3. **Loading:** JSON parsing from text or file, followed by validation.
//!
//! Every field is optional in JSON; omitted fields take the defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::soc::devices::virt_foo::{DEFAULT_CHIP_ID, MMIO_SIZE};

/// Default configuration constants for the platform.
mod defaults {
    /// Base address of the Foo device MMIO window.
    ///
    /// Matches the slot the `virt` board reserves for its first platform device.
    pub const FOO_BASE: u64 = 0x0900_0000;

    /// Identity value reported by the ID register.
    pub const FOO_CHIP_ID: u32 = super::DEFAULT_CHIP_ID;

    /// Platform interrupt number routed to the Foo output line.
    pub const FOO_IRQ: u32 = 8;

    /// Largest interrupt number the bus pending mask can report.
    pub const MAX_IRQ: u32 = 63;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use virtfoo_core::config::Config;
///
/// let config = Config::from_json(r#"{ "foo": { "chip_id": 4660 } }"#).unwrap();
/// assert_eq!(config.foo.chip_id, 0x1234);
/// assert_eq!(config.foo.base_addr, 0x0900_0000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Foo device placement and identity.
    #[serde(default)]
    pub foo: FooConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks the configuration for placements the bus cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnalignedBase`] if the Foo base is not word
    /// aligned, [`ConfigError::WindowOverflow`] if the window runs past the
    /// end of the address space, or [`ConfigError::IrqOutOfRange`] if the
    /// interrupt number has no bit in the bus pending mask.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.foo.base_addr;
        if base % 4 != 0 {
            return Err(ConfigError::UnalignedBase(base));
        }
        if base.checked_add(MMIO_SIZE).is_none() {
            return Err(ConfigError::WindowOverflow {
                base,
                size: MMIO_SIZE,
            });
        }
        if self.foo.irq > defaults::MAX_IRQ {
            return Err(ConfigError::IrqOutOfRange {
                irq: self.foo.irq,
                max: defaults::MAX_IRQ,
            });
        }
        Ok(())
    }
}

/// Foo device configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooConfig {
    /// MMIO base address
    #[serde(default = "FooConfig::default_base_addr")]
    pub base_addr: u64,

    /// Identity value returned by the ID register
    #[serde(default = "FooConfig::default_chip_id")]
    pub chip_id: u32,

    /// Platform interrupt number for the output line
    #[serde(default = "FooConfig::default_irq")]
    pub irq: u32,
}

impl FooConfig {
    /// Returns the default MMIO base address.
    const fn default_base_addr() -> u64 {
        defaults::FOO_BASE
    }

    /// Returns the default identity value.
    const fn default_chip_id() -> u32 {
        defaults::FOO_CHIP_ID
    }

    /// Returns the default interrupt number.
    const fn default_irq() -> u32 {
        defaults::FOO_IRQ
    }
}

impl Default for FooConfig {
    fn default() -> Self {
        Self {
            base_addr: defaults::FOO_BASE,
            chip_id: defaults::FOO_CHIP_ID,
            irq: defaults::FOO_IRQ,
        }
    }
}
