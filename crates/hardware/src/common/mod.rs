//! Common types shared by the device model and its host.
//!
//! This module provides the small vocabulary used across the crate:
//! 1. **Access Types:** Bus operation kind and the size qualifier that accompanies it.
//! 2. **Error Handling:** Typed errors for the host-facing edges (configuration and bus wiring).

/// Bus access kind and width definitions.
pub mod data;

/// Error types for configuration and bus registration.
pub mod error;

pub use data::{AccessType, AccessWidth};
pub use error::{BusError, ConfigError};
