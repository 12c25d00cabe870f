//! Read dispatch and enable gating.

use rstest::rstest;
use virtfoo_core::common::AccessWidth;
use virtfoo_core::soc::devices::Device;
use virtfoo_core::soc::devices::virt_foo::{DEFAULT_CHIP_ID, FooReg, IrqCause};

use crate::common::harness::{TestContext, capture_logs};

#[test]
fn fresh_device_reads_zero_everywhere() {
    let mut ctx = TestContext::new();
    for reg in FooReg::ALL {
        assert_eq!(ctx.read(reg), 0, "{} should read 0 before enable", reg.name());
    }
}

#[test]
fn identity_hidden_until_enabled() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.read(FooReg::Id), 0);

    ctx.write(FooReg::Init, 1);
    assert_eq!(ctx.read(FooReg::Id), DEFAULT_CHIP_ID);
}

#[test]
fn enabled_reads_return_stored_values() {
    let mut ctx = TestContext::enabled();
    ctx.write(FooReg::Cmd, 0xcafe);
    assert_eq!(ctx.read(FooReg::Init), 1);
    assert_eq!(ctx.read(FooReg::Cmd), 0xcafe);
    assert_eq!(ctx.read(FooReg::IntStatus), IrqCause::BufferDequeued.bits());
}

#[test]
fn init_reads_back_all_bits() {
    let mut ctx = TestContext::new();
    ctx.write(FooReg::Init, 0xabcd_0001);
    assert_eq!(ctx.read(FooReg::Init), 0xabcd_0001);
}

#[test]
fn disabled_reads_hide_nonzero_internal_state() {
    let mut ctx = TestContext::enabled();
    ctx.write(FooReg::Cmd, 0x77);
    // Nonzero INIT with the enable bit clear disables the device.
    ctx.write(FooReg::Init, 0x2);

    let regs = ctx.foo.registers().clone();
    assert_eq!(regs.get(FooReg::Cmd), 0x77);
    assert_ne!(regs.get(FooReg::IntStatus), 0);

    assert_eq!(ctx.read(FooReg::Id), 0);
    assert_eq!(ctx.read(FooReg::Init), 0);
    assert_eq!(ctx.read(FooReg::Cmd), 0);
    assert_eq!(ctx.read(FooReg::IntStatus), 0);
}

#[test]
fn disabled_status_read_does_not_acknowledge() {
    let mut ctx = TestContext::new();
    ctx.write(FooReg::Cmd, 1);
    assert!(ctx.line_high());

    assert_eq!(ctx.read(FooReg::IntStatus), 0);
    assert!(ctx.line_high());
    assert!(ctx.foo.irq_asserted());
}

#[rstest]
#[case(0x1)]
#[case(0x3)]
#[case(0x10)]
#[case(0x100)]
#[case(0x1fc)]
fn undefined_offsets_read_zero(#[case] offset: u64) {
    let mut ctx = TestContext::enabled();
    ctx.write(FooReg::Cmd, 5);
    let before = ctx.foo.registers().clone();

    assert_eq!(ctx.foo.read_u32(offset), 0);
    assert_eq!(ctx.foo.registers(), &before);
    assert!(ctx.line_high(), "undefined read must not acknowledge");
}

#[rstest]
#[case(AccessWidth::Byte)]
#[case(AccessWidth::Half)]
#[case(AccessWidth::Word)]
#[case(AccessWidth::Double)]
fn width_does_not_narrow_reads(#[case] width: AccessWidth) {
    let mut ctx = TestContext::with_chip_id(0x1234_5678);
    ctx.write(FooReg::Init, 1);
    assert_eq!(ctx.foo.read(FooReg::Id.offset(), width), 0x1234_5678);
}

#[test]
fn gated_read_is_not_reported_as_a_warning() {
    let mut ctx = TestContext::new();
    let logs = capture_logs(|| {
        assert_eq!(ctx.read(FooReg::Id), 0);
    });

    assert!(logs.contains("read while device is disabled"), "logs: {logs}");
    assert!(logs.contains("DEBUG"), "logs: {logs}");
    assert!(!logs.contains("WARN"), "logs: {logs}");
}
