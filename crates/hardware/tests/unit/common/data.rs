//! Access width tests.

use rstest::rstest;
use virtfoo_core::common::AccessWidth;

#[rstest]
#[case(1, AccessWidth::Byte)]
#[case(2, AccessWidth::Half)]
#[case(4, AccessWidth::Word)]
#[case(8, AccessWidth::Double)]
fn width_from_bytes(#[case] bytes: u32, #[case] width: AccessWidth) {
    assert_eq!(AccessWidth::from_bytes(bytes), Some(width));
    assert_eq!(width.bytes(), bytes);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(16)]
fn width_rejects_odd_sizes(#[case] bytes: u32) {
    assert_eq!(AccessWidth::from_bytes(bytes), None);
}

#[test]
fn width_defaults_to_word() {
    assert_eq!(AccessWidth::default(), AccessWidth::Word);
}

#[test]
fn width_display() {
    assert_eq!(AccessWidth::Byte.to_string(), "8-bit");
    assert_eq!(AccessWidth::Double.to_string(), "64-bit");
}
