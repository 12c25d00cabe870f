//! Interrupt output lines.
//!
//! A device never owns the interrupt controller it signals. It is handed an
//! [`IrqLine`] at construction and only ever drives that line's level; routing
//! the level upward (to a PLIC, a vCPU, a test probe) is the host's job.
//!
//! Two implementations ship with the crate:
//! * [`IrqLevel`]: a shared level the host can sample from any clone.
//! * [`NoIrq`]: a line that goes nowhere.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Capability for driving a single level-triggered interrupt output.
pub trait IrqLine: Send + Sync {
    /// Drives the line to `asserted`.
    fn set_level(&self, asserted: bool);

    /// Asserts the line.
    fn raise(&self) {
        self.set_level(true);
    }

    /// Deasserts the line.
    fn lower(&self) {
        self.set_level(false);
    }
}

impl<T: IrqLine + ?Sized> IrqLine for Arc<T> {
    fn set_level(&self, asserted: bool) {
        (**self).set_level(asserted);
    }
}

impl<T: IrqLine + ?Sized> IrqLine for Box<T> {
    fn set_level(&self, asserted: bool) {
        (**self).set_level(asserted);
    }
}

#[derive(Debug, Default)]
struct LevelState {
    asserted: AtomicBool,
    /// Low-to-high transitions seen so far.
    edges: AtomicU64,
}

/// Shared interrupt level.
///
/// Clones observe the same line, so the host keeps one handle for sampling and
/// passes another into the device.
#[derive(Clone, Debug, Default)]
pub struct IrqLevel {
    state: Arc<LevelState>,
}

impl IrqLevel {
    /// Creates a deasserted line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current level.
    pub fn is_asserted(&self) -> bool {
        self.state.asserted.load(Ordering::Acquire)
    }

    /// Returns the number of rising edges driven onto the line.
    ///
    /// Re-asserting an already high line is not an edge.
    pub fn assertions(&self) -> u64 {
        self.state.edges.load(Ordering::Relaxed)
    }
}

impl IrqLine for IrqLevel {
    fn set_level(&self, asserted: bool) {
        let was = self.state.asserted.swap(asserted, Ordering::AcqRel);
        if asserted && !was {
            let _ = self.state.edges.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// An unconnected interrupt output; every level change is discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIrq;

impl IrqLine for NoIrq {
    fn set_level(&self, _asserted: bool) {}
}
