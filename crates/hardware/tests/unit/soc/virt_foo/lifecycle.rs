//! Construction, reset and inspection.

use pretty_assertions::assert_eq;
use virtfoo_core::soc::devices::Device;
use virtfoo_core::soc::devices::virt_foo::{DEFAULT_CHIP_ID, FooReg, MMIO_SIZE, RegisterFile, VirtFoo};
use virtfoo_core::soc::irq::{IrqLevel, NoIrq};

use crate::common::harness::{TEST_BASE, TestContext};

#[test]
fn name_and_window() {
    let foo = VirtFoo::new(TEST_BASE, DEFAULT_CHIP_ID, NoIrq);
    assert_eq!(foo.name(), "virt-foo");
    assert_eq!(foo.address_range(), (TEST_BASE, MMIO_SIZE));
}

#[test]
fn construction_state() {
    let ctx = TestContext::with_chip_id(0xabcd);
    assert_eq!(ctx.foo.chip_id(), 0xabcd);
    assert_eq!(ctx.foo.registers(), &RegisterFile::new(0xabcd));
    assert!(!ctx.foo.irq_asserted());
    assert!(!ctx.foo.irq_pending());
    assert!(!ctx.line_high());
    assert_eq!(ctx.foo.get_irq_id(), None);
}

#[test]
fn irq_id_is_reported() {
    let foo = VirtFoo::new(TEST_BASE, 1, NoIrq).with_irq_id(5);
    assert_eq!(foo.get_irq_id(), Some(5));
}

#[test]
fn irq_pending_follows_line() {
    let mut ctx = TestContext::new();
    ctx.write(FooReg::Cmd, 1);
    assert!(ctx.foo.irq_pending());
    ctx.write(FooReg::Init, 1);
    let _ = ctx.read(FooReg::IntStatus);
    assert!(!ctx.foo.irq_pending());
}

#[test]
fn reset_restores_construction_state() {
    let mut ctx = TestContext::with_chip_id(0x55);
    ctx.write(FooReg::Init, 0xff);
    ctx.write(FooReg::Cmd, 0x99);
    assert!(ctx.line_high());

    ctx.foo.reset();

    assert_eq!(ctx.foo.registers(), &RegisterFile::new(0x55));
    assert!(!ctx.foo.irq_asserted());
    assert!(!ctx.line_high());
    assert_eq!(ctx.read(FooReg::Id), 0);
}

#[test]
fn device_usable_after_reset() {
    let mut ctx = TestContext::enabled();
    ctx.foo.reset();

    ctx.write(FooReg::Init, 1);
    assert_eq!(ctx.read(FooReg::Id), DEFAULT_CHIP_ID);
    assert_eq!(ctx.read(FooReg::IntStatus), 0x1);
}

#[test]
fn debug_output_names_device() {
    let foo = VirtFoo::new(0x1000, 1, IrqLevel::new());
    let text = format!("{foo:?}");
    assert!(text.starts_with("VirtFoo"));
    assert!(text.contains("0x1000"));
}
