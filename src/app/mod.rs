//! Application core: lifecycle orchestration over the device components.
//!
//! All interaction with hardware and with the outside world happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
