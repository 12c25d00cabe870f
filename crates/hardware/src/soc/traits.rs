//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait implemented by every bus-attached component. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Sized read/write at device-relative offsets.
//! 3. **Lifecycle:** `reset` back to the power-on state.
//! 4. **Interrupts:** Optional IRQ number and line level for the bus to aggregate.
//!
//! All implementors must be `Send + Sync` so a host can move the bus across threads.

use crate::common::AccessWidth;

/// Trait for memory-mapped I/O devices attached to the system bus.
pub trait Device: Send + Sync {
    /// Returns a short name for this device (e.g., `"virt-foo"`).
    fn name(&self) -> &str;
    /// Returns (base_address, size_in_bytes) for this device's MMIO window.
    fn address_range(&self) -> (u64, u64);

    /// Reads at the given device-relative offset.
    ///
    /// Reads take `&mut self` because a read may have side effects
    /// (for example, acknowledging an interrupt).
    fn read(&mut self, offset: u64, width: AccessWidth) -> u64;
    /// Writes `val` at the given device-relative offset.
    fn write(&mut self, offset: u64, width: AccessWidth, val: u64);

    /// Restores the device to its power-on state.
    fn reset(&mut self);

    /// Reads four bytes at the given offset.
    fn read_u32(&mut self, offset: u64) -> u32 {
        self.read(offset, AccessWidth::Word) as u32
    }
    /// Writes four bytes at the given offset.
    fn write_u32(&mut self, offset: u64, val: u32) {
        self.write(offset, AccessWidth::Word, val as u64);
    }

    /// Returns the IRQ ID for this device if it can raise interrupts.
    fn get_irq_id(&self) -> Option<u32> {
        None
    }
    /// Returns `true` while the device drives its interrupt output high.
    fn irq_pending(&self) -> bool {
        false
    }
}
