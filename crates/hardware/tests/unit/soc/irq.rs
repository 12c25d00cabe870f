//! Interrupt line tests.

use std::sync::Arc;

use virtfoo_core::soc::irq::{IrqLevel, IrqLine, NoIrq};

#[test]
fn level_starts_low() {
    let line = IrqLevel::new();
    assert!(!line.is_asserted());
    assert_eq!(line.assertions(), 0);
}

#[test]
fn clones_share_the_line() {
    let host = IrqLevel::new();
    let device_side = host.clone();

    device_side.raise();
    assert!(host.is_asserted());

    device_side.lower();
    assert!(!host.is_asserted());
}

#[test]
fn only_rising_edges_are_counted() {
    let line = IrqLevel::new();
    line.raise();
    line.raise();
    assert_eq!(line.assertions(), 1);

    line.lower();
    line.lower();
    line.raise();
    assert_eq!(line.assertions(), 2);
}

#[test]
fn arc_and_box_forward_to_inner_line() {
    let host = IrqLevel::new();

    let shared: Arc<dyn IrqLine> = Arc::new(host.clone());
    shared.raise();
    assert!(host.is_asserted());

    let boxed: Box<dyn IrqLine> = Box::new(host.clone());
    boxed.lower();
    assert!(!host.is_asserted());
}

#[test]
fn no_irq_discards_levels() {
    let line = NoIrq;
    line.raise();
    line.lower();
    line.set_level(true);
}
