//! Virtual Foo device.
//!
//! A minimal interrupt-raising MMIO peripheral with four 32-bit registers
//! in a `0x200`-byte window (see [`regs`] for the map).
//!
//! # Access Policy
//!
//! * Reads are gated on the enable bit: while INIT bit 0 is clear every offset
//!   reads as 0, the ID register included.
//! * Writes are never gated. A nonzero INIT write raises [`IrqCause::Enabled`];
//!   every CMD write raises [`IrqCause::BufferDequeued`].
//! * Reading INT_STATUS deasserts the interrupt line but leaves the stored
//!   cause in place.
//! * The access width is accepted and ignored.
//!
//! # Interrupts
//!
//! Status is a single slot. Raising a cause overwrites whatever was there, so
//! two raises without an intervening status read leave only the second cause
//! visible while the line stays high.

use std::fmt;

use tracing::{debug, trace};

use crate::common::AccessWidth;
use crate::soc::devices::Device;
use crate::soc::irq::IrqLine;

/// Register map and raw register storage.
pub mod regs;

pub use regs::{DEFAULT_CHIP_ID, FooReg, MMIO_SIZE, RegisterFile};

/// Reason recorded in INT_STATUS when the line is asserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum IrqCause {
    /// The device was initialised with a nonzero INIT value.
    Enabled = 1 << 0,
    /// A command was written and its buffer consumed.
    BufferDequeued = 1 << 1,
}

impl IrqCause {
    /// Returns the flag value stored in INT_STATUS.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decodes an INT_STATUS value.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0b01 => Some(Self::Enabled),
            0b10 => Some(Self::BufferDequeued),
            _ => None,
        }
    }
}

/// Virtual Foo device structure.
pub struct VirtFoo {
    /// Base physical address of the device.
    base_addr: u64,
    /// Register storage.
    regs: RegisterFile,
    /// Output line owned by the platform.
    irq: Box<dyn IrqLine>,
    /// Level last driven onto `irq`.
    irq_asserted: bool,
    /// Platform interrupt number, if the host routes one.
    irq_id: Option<u32>,
}

impl VirtFoo {
    /// Creates a Foo device in its reset state.
    ///
    /// # Arguments
    ///
    /// * `base_addr` - The base physical address.
    /// * `chip_id` - Value reported by the ID register once enabled.
    /// * `irq` - Output line the device drives.
    pub fn new(base_addr: u64, chip_id: u32, irq: impl IrqLine + 'static) -> Self {
        Self {
            base_addr,
            regs: RegisterFile::new(chip_id),
            irq: Box::new(irq),
            irq_asserted: false,
            irq_id: None,
        }
    }

    /// Sets the platform interrupt number reported by [`Device::get_irq_id`].
    #[must_use]
    pub fn with_irq_id(mut self, irq_id: u32) -> Self {
        self.irq_id = Some(irq_id);
        self
    }

    /// Returns the identity constant.
    pub const fn chip_id(&self) -> u32 {
        self.regs.get(FooReg::Id)
    }

    /// Returns the register file without applying any access side effects.
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Returns `true` while the output line is asserted.
    pub const fn irq_asserted(&self) -> bool {
        self.irq_asserted
    }

    /// Records `cause` and asserts the line.
    ///
    /// Any unread cause is overwritten. The line is driven high even if it
    /// already is.
    pub fn raise(&mut self, cause: IrqCause) {
        debug!(?cause, previous = self.regs.get(FooReg::IntStatus), "virt-foo: raise irq");
        self.regs.set_status(cause.bits());
        self.irq_asserted = true;
        self.irq.raise();
    }

    /// Deasserts the line; INT_STATUS keeps its value.
    pub fn acknowledge(&mut self) {
        debug!(status = self.regs.get(FooReg::IntStatus), "virt-foo: clear irq");
        self.irq_asserted = false;
        self.irq.lower();
    }
}

impl fmt::Debug for VirtFoo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtFoo")
            .field("base_addr", &format_args!("{:#x}", self.base_addr))
            .field("regs", &self.regs)
            .field("irq_asserted", &self.irq_asserted)
            .field("irq_id", &self.irq_id)
            .finish_non_exhaustive()
    }
}

impl Device for VirtFoo {
    /// Returns the device name.
    fn name(&self) -> &str {
        "virt-foo"
    }

    /// Returns the address range (Base, Size).
    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, MMIO_SIZE)
    }

    /// Reads a register.
    ///
    /// Returns 0 for every offset while the device is disabled. Reading
    /// INT_STATUS acknowledges the interrupt.
    fn read(&mut self, offset: u64, width: AccessWidth) -> u64 {
        if !self.regs.is_enabled() {
            debug!(offset, "virt-foo: read while device is disabled");
            return 0;
        }

        let val = match FooReg::from_offset(offset) {
            Some(FooReg::IntStatus) => {
                self.acknowledge();
                self.regs.get(FooReg::IntStatus)
            }
            Some(reg) => self.regs.get(reg),
            None => 0,
        };
        trace!(offset, %width, val, "virt-foo: read");
        val as u64
    }

    /// Writes a register.
    ///
    /// Not gated on the enable bit. Values are truncated to 32 bits; the
    /// nonzero test on INIT looks at the value as presented on the bus.
    fn write(&mut self, offset: u64, width: AccessWidth, val: u64) {
        trace!(offset, %width, val, "virt-foo: write");
        match FooReg::from_offset(offset) {
            Some(FooReg::Init) => {
                self.regs.set_init(val as u32);
                if val != 0 {
                    self.raise(IrqCause::Enabled);
                }
            }
            Some(FooReg::Cmd) => {
                self.regs.set_cmd(val as u32);
                self.raise(IrqCause::BufferDequeued);
            }
            Some(FooReg::Id | FooReg::IntStatus) | None => {}
        }
    }

    /// Returns the registers to their reset values and lowers the line.
    fn reset(&mut self) {
        debug!("virt-foo: reset");
        self.regs.clear();
        self.irq_asserted = false;
        self.irq.lower();
    }

    fn get_irq_id(&self) -> Option<u32> {
        self.irq_id
    }

    fn irq_pending(&self) -> bool {
        self.irq_asserted
    }
}
