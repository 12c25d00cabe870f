//! Bus Access Types.
//!
//! This module defines how a bus access is classified before it reaches a device:
//! 1. **Direction:** Whether the access reads or writes a register.
//! 2. **Width:** The size qualifier (8/16/32/64-bit) the initiator attached to the access.
//!
//! Devices are free to ignore the width. The Foo device does exactly that and always
//! stores and returns the full 32-bit register value.

use std::fmt;

/// Direction of a bus access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Register read (load from the device).
    Read,
    /// Register write (store to the device).
    Write,
}

/// Size qualifier of a bus access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    #[default]
    Word,
    /// 64-bit access.
    Double,
}

impl AccessWidth {
    /// Maps a size in bytes to a width; `None` for anything other than 1, 2, 4 or 8.
    pub const fn from_bytes(bytes: u32) -> Option<Self> {
        match bytes {
            1 => Some(Self::Byte),
            2 => Some(Self::Half),
            4 => Some(Self::Word),
            8 => Some(Self::Double),
            _ => None,
        }
    }

    /// Returns the access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bytes() * 8)
    }
}
