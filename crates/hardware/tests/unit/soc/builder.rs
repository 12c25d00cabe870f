//! System builder tests.

use virtfoo_core::common::{AccessWidth, ConfigError};
use virtfoo_core::config::Config;
use virtfoo_core::soc::System;
use virtfoo_core::soc::devices::IrqCause;

#[test]
fn default_system_has_foo_at_default_base() {
    let system = System::new(&Config::default()).unwrap();
    let names: Vec<(String, (u64, u64))> = system
        .bus
        .devices()
        .map(|d| (d.name().to_owned(), d.address_range()))
        .collect();
    assert_eq!(names, vec![("virt-foo".to_owned(), (0x0900_0000, 0x200))]);
    assert_eq!(system.bus.devices().next().and_then(|d| d.get_irq_id()), Some(8));
}

#[test]
fn system_wires_interrupt_line_to_host() {
    let mut config = Config::default();
    config.foo.chip_id = 0x1234;
    let mut system = System::new(&config).unwrap();
    let base = config.foo.base_addr;

    assert_eq!(system.read(base, AccessWidth::Word), 0);
    system.write(base + 0x4, AccessWidth::Word, 1);
    assert!(system.irq_line().is_asserted());
    assert_eq!(system.bus.irq_pending_mask(), 1 << 8);

    assert_eq!(system.read(base, AccessWidth::Word), 0x1234);
    assert_eq!(
        system.read(base + 0xc, AccessWidth::Word),
        IrqCause::Enabled.bits() as u64
    );
    assert!(!system.irq_line().is_asserted());
    assert_eq!(system.irq_line().assertions(), 1);
}

#[test]
fn system_reset_lowers_line_and_clears_registers() {
    let mut system = System::new(&Config::default()).unwrap();
    system.write(0x0900_0008, AccessWidth::Word, 9);
    assert!(system.irq_line().is_asserted());

    system.reset();
    assert!(!system.irq_line().is_asserted());
    system.write(0x0900_0004, AccessWidth::Word, 1);
    assert_eq!(system.read(0x0900_0008, AccessWidth::Word), 0);
}

#[test]
fn system_rejects_invalid_config() {
    let mut config = Config::default();
    config.foo.base_addr = 0x0900_0001;
    let err = System::new(&config).unwrap_err();
    assert!(matches!(err, ConfigError::UnalignedBase(0x0900_0001)));
}

#[test]
fn system_rejects_irq_without_pending_bit() {
    let mut config = Config::default();
    config.foo.irq = 70;
    let err = System::new(&config).unwrap_err();
    assert!(matches!(err, ConfigError::IrqOutOfRange { irq: 70, .. }));
}

#[test]
fn highest_irq_reaches_pending_mask() {
    let mut config = Config::default();
    config.foo.irq = 63;
    let mut system = System::new(&config).unwrap();
    system.bus.write_u32(config.foo.base_addr + 0x8, 1);

    assert!(system.irq_line().is_asserted());
    assert_eq!(system.bus.irq_pending_mask(), 1 << 63);
}
