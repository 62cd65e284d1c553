//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing device events through the `log`
//! facade.  Rejected stores go out at `warn`, everything else at `info`.

use log::{info, warn};

use crate::app::events::DeviceEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`DeviceEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DeviceEvent) {
        match event {
            DeviceEvent::Attached { led_pin } => {
                info!("ATTACH | led={} | groups=led,sensor", led_pin);
            }
            DeviceEvent::Detached => {
                info!("DETACH | groups removed, led off");
            }
            DeviceEvent::AttributeStored { path, bytes } => {
                info!("STORE | {} <- {} bytes", path, bytes);
            }
            DeviceEvent::StoreRejected { path, error } => {
                warn!("STORE | {} rejected: {}", path, error);
            }
        }
    }
}
