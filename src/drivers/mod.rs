//! Actuator drivers and background producers.

pub mod led;
pub mod producer;
