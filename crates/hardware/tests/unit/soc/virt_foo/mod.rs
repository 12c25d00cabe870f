//! # Foo Device Tests

/// Construction, reset and inspection.
pub mod lifecycle;



/// Read dispatch and enable gating.
pub mod reads;
