//! System interconnect (bus) for MMIO access.
//!
//! This module implements the host side of address decoding. It provides:
//! 1. **Device registration:** Devices are added by address range, checked for overlap, and sorted.
//! 2. **Access routing:** Read/write by physical address with a last-device hint.
//! 3. **IRQ aggregation:** Line levels of all devices collected into a pending mask.
//! 4. **Reset:** Resets every attached device.
//!
//! Devices only ever see device-relative offsets inside their own window.

use tracing::debug;

use super::devices::Device;
use crate::common::{AccessWidth, BusError};

/// System bus; routes accesses by physical address.
pub struct Bus {
    /// Registered MMIO devices, sorted by base address.
    devices: Vec<Box<dyn Device>>,
    last_device_idx: usize,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.devices.iter().map(|d| (d.name(), d.address_range())))
            .finish()
    }
}

const fn contains(start: u64, size: u64, paddr: u64) -> bool {
    paddr >= start && paddr - start < size
}

impl Bus {
    /// Creates an empty bus; add devices with `add_device`.
    pub const fn new() -> Self {
        Self {
            devices: Vec::new(),
            last_device_idx: 0,
        }
    }

    /// Registers a device on the bus.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::Overlap`] if the device's window intersects one
    /// already on the bus. The bus is left unchanged.
    pub fn add_device(&mut self, dev: Box<dyn Device>) -> Result<(), BusError> {
        let (base, size) = dev.address_range();
        let end = base.saturating_add(size);
        if let Some(existing) = self.devices.iter().find(|d| {
            let (b, s) = d.address_range();
            base < b.saturating_add(s) && b < end
        }) {
            return Err(BusError::Overlap {
                new: dev.name().to_owned(),
                new_base: base,
                existing: existing.name().to_owned(),
                existing_base: existing.address_range().0,
            });
        }

        debug!(name = dev.name(), base, size, "bus: device attached");
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        self.last_device_idx = 0;
        Ok(())
    }

    /// Returns the number of attached devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if no device is attached.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterates over attached devices in address order.
    pub fn devices(&self) -> impl Iterator<Item = &dyn Device> {
        self.devices.iter().map(|d| &**d as &dyn Device)
    }

    /// Returns whether any device's window contains `paddr`.
    pub fn is_valid_address(&self, paddr: u64) -> bool {
        self.devices.iter().any(|d| {
            let (start, size) = d.address_range();
            contains(start, size, paddr)
        })
    }

    /// Returns a bitmask with bit `n` set when the device with IRQ ID `n` (< 64)
    /// has its line asserted.
    pub fn irq_pending_mask(&self) -> u64 {
        self.devices
            .iter()
            .filter(|d| d.irq_pending())
            .filter_map(|d| d.get_irq_id())
            .filter(|&id| id < 64)
            .fold(0, |mask, id| mask | (1 << id))
    }

    /// Resets every attached device.
    pub fn reset(&mut self) {
        for dev in &mut self.devices {
            dev.reset();
        }
    }

    fn find_device(&mut self, paddr: u64) -> Option<(&mut Box<dyn Device>, u64)> {
        if self.last_device_idx < self.devices.len() {
            let (start, size) = self.devices[self.last_device_idx].address_range();
            if contains(start, size, paddr) {
                return Some((&mut self.devices[self.last_device_idx], paddr - start));
            }
        }

        for (i, dev) in self.devices.iter_mut().enumerate() {
            let (start, size) = dev.address_range();
            if contains(start, size, paddr) {
                self.last_device_idx = i;
                return Some((dev, paddr - start));
            }
        }
        None
    }

    /// Reads at the given physical address; returns 0 if no device claims it.
    pub fn read(&mut self, paddr: u64, width: AccessWidth) -> u64 {
        self.try_read(paddr, width).unwrap_or(0)
    }

    /// Writes at the given physical address; dropped if no device claims it.
    pub fn write(&mut self, paddr: u64, width: AccessWidth, val: u64) {
        let _ = self.try_write(paddr, width, val);
    }

    /// Reads at the given physical address.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::Unmapped`] if no device claims `paddr`.
    pub fn try_read(&mut self, paddr: u64, width: AccessWidth) -> Result<u64, BusError> {
        let (dev, offset) = self.find_device(paddr).ok_or(BusError::Unmapped(paddr))?;
        Ok(dev.read(offset, width))
    }

    /// Writes at the given physical address.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::Unmapped`] if no device claims `paddr`.
    pub fn try_write(&mut self, paddr: u64, width: AccessWidth, val: u64) -> Result<(), BusError> {
        let (dev, offset) = self.find_device(paddr).ok_or(BusError::Unmapped(paddr))?;
        dev.write(offset, width, val);
        Ok(())
    }

    /// Reads four bytes at the given physical address; returns 0 if unclaimed.
    pub fn read_u32(&mut self, paddr: u64) -> u32 {
        self.read(paddr, AccessWidth::Word) as u32
    }

    /// Writes four bytes at the given physical address; no-op if unclaimed.
    pub fn write_u32(&mut self, paddr: u64, val: u32) {
        self.write(paddr, AccessWidth::Word, val as u64);
    }
}
