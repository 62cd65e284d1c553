//! Device attribute core.
//!
//! Two independently locked components, a switchable LED and a running
//! sensor aggregator, exposed as named text attributes:
//!
//! - [`drivers::led::LedController`]: validated `0`/`1` writes that drive a
//!   GPIO line inside the same critical section that records the state.
//! - [`sensors::SensorAggregator`]: current/min/max/average over a stream of
//!   integer samples, with a non-blocking update path for interrupt-like
//!   producers.
//! - [`attributes::AttributeRegistry`]: `group/name` → typed show/store
//!   accessors, independent of any particular frontend.
//! - [`app::service::DeviceService`]: attach/detach lifecycle tying the
//!   three together.
//!
//! Hardware and the outside world are reached only through the traits in
//! [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod attributes;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
