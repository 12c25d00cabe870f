//! Foo register file.
//!
//! # Register Map
//!
//! | Offset | Register   | Access | Reset      |
//! |--------|------------|--------|------------|
//! | `0x0`  | ID         | RO     | chip id    |
//! | `0x4`  | INIT       | RW     | 0          |
//! | `0x8`  | CMD        | RW     | 0          |
//! | `0xC`  | INT_STATUS | RO     | 0          |
//!
//! Bit 0 of INIT (`CHIP_EN`) is the enable bit.

/// Offset of the identity register.
pub const REG_ID: u64 = 0x0;
/// Offset of the init/enable register.
pub const REG_INIT: u64 = 0x4;
/// Offset of the command register.
pub const REG_CMD: u64 = 0x8;
/// Offset of the interrupt status register.
pub const REG_INT_STATUS: u64 = 0xc;

/// Enable bit within INIT.
pub const CHIP_EN: u32 = 1 << 0;

/// Identity value the device reports when none is configured.
pub const DEFAULT_CHIP_ID: u32 = 0xf001;

/// Size of the MMIO window in bytes.
pub const MMIO_SIZE: u64 = 0x200;

/// The four architected registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FooReg {
    /// Identity (read-only).
    Id,
    /// Init; bit 0 enables register reads.
    Init,
    /// Command.
    Cmd,
    /// Interrupt status; reading it acknowledges the interrupt.
    IntStatus,
}

impl FooReg {
    /// All registers in offset order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Init, Self::Cmd, Self::IntStatus];

    /// Decodes a device-relative offset. Only exact register offsets match.
    pub const fn from_offset(offset: u64) -> Option<Self> {
        match offset {
            REG_ID => Some(Self::Id),
            REG_INIT => Some(Self::Init),
            REG_CMD => Some(Self::Cmd),
            REG_INT_STATUS => Some(Self::IntStatus),
            _ => None,
        }
    }

    /// Returns the register's device-relative offset.
    pub const fn offset(self) -> u64 {
        match self {
            Self::Id => REG_ID,
            Self::Init => REG_INIT,
            Self::Cmd => REG_CMD,
            Self::IntStatus => REG_INT_STATUS,
        }
    }

    /// Returns the register mnemonic.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Init => "INIT",
            Self::Cmd => "CMD",
            Self::IntStatus => "INT_STATUS",
        }
    }
}

/// Raw register storage.
///
/// Accessors are side-effect free; interrupt behaviour lives in the device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    id: u32,
    init: u32,
    cmd: u32,
    status: u32,
}

impl RegisterFile {
    /// Creates a register file in its reset state with the given identity.
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            init: 0,
            cmd: 0,
            status: 0,
        }
    }

    /// Returns the stored value of `which`.
    pub const fn get(&self, which: FooReg) -> u32 {
        match which {
            FooReg::Id => self.id,
            FooReg::Init => self.init,
            FooReg::Cmd => self.cmd,
            FooReg::IntStatus => self.status,
        }
    }

    /// Stores the full INIT value, enable bit included.
    pub const fn set_init(&mut self, val: u32) {
        self.init = val;
    }

    /// Stores the CMD value.
    pub const fn set_cmd(&mut self, val: u32) {
        self.cmd = val;
    }

    /// Stores the interrupt cause.
    pub const fn set_status(&mut self, val: u32) {
        self.status = val;
    }

    /// Returns the enable bit of INIT.
    pub const fn is_enabled(&self) -> bool {
        self.init & CHIP_EN != 0
    }

    /// Zeroes every register except ID.
    pub const fn clear(&mut self) {
        *self = Self::new(self.id);
    }
}
