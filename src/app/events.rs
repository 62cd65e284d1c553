//! Outbound device events.
//!
//! The [`DeviceService`](super::service::DeviceService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::error::AttrError;
use crate::pins::PinId;

/// Structured events emitted by the device service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// Pin acquired and both attribute groups registered.
    Attached { led_pin: PinId },

    /// Attribute groups removed, LED forced off and pin released.
    Detached,

    /// A store request was applied.
    AttributeStored { path: String, bytes: usize },

    /// A store request was rejected; no state changed.
    StoreRejected { path: String, error: AttrError },
}
