//! Mock hardware adapters for integration tests.
//!
//! Records every GPIO call so tests can assert on the full command history
//! without touching real pins.  The call log is shared, so it stays
//! readable after the mock has been moved into a controller.

use devattr::app::events::DeviceEvent;
use devattr::app::ports::{EventSink, GpioPort};
use devattr::error::GpioError;
use devattr::pins::PinId;
use embedded_hal::digital::PinState;
use std::sync::{Arc, Mutex};

// ── GPIO call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum GpioCall {
    Request { pin: PinId, initial: PinState },
    Write { pin: PinId, level: PinState },
    Free { pin: PinId },
}

#[derive(Clone, Default)]
pub struct GpioLog(Arc<Mutex<Vec<GpioCall>>>);

#[allow(dead_code)]
impl GpioLog {
    pub fn calls(&self) -> Vec<GpioCall> {
        self.0.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<PinState> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GpioCall::Write { level, .. } => Some(level),
                _ => None,
            })
            .collect()
    }

    /// Level the pin was last driven to, counting the request's initial
    /// level.  `None` once the pin has been freed.
    pub fn level(&self) -> Option<PinState> {
        match self.calls().last()? {
            GpioCall::Request { initial, .. } => Some(*initial),
            GpioCall::Write { level, .. } => Some(*level),
            GpioCall::Free { .. } => None,
        }
    }

    fn push(&self, call: GpioCall) {
        self.0.lock().unwrap().push(call);
    }
}

// ── MockGpio ──────────────────────────────────────────────────

pub struct MockGpio {
    log: GpioLog,
    refuse: bool,
}

#[allow(dead_code)]
impl MockGpio {
    pub fn new() -> (Self, GpioLog) {
        let log = GpioLog::default();
        (
            Self {
                log: log.clone(),
                refuse: false,
            },
            log,
        )
    }

    /// A GPIO whose every request fails with `Busy`.
    pub fn refusing() -> (Self, GpioLog) {
        let (mut gpio, log) = Self::new();
        gpio.refuse = true;
        (gpio, log)
    }
}

impl GpioPort for MockGpio {
    fn request(
        &mut self,
        pin: PinId,
        _label: &'static str,
        initial: PinState,
    ) -> Result<(), GpioError> {
        if self.refuse {
            return Err(GpioError::Busy(pin));
        }
        self.log.push(GpioCall::Request { pin, initial });
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: PinState) {
        self.log.push(GpioCall::Write { pin, level });
    }

    fn free(&mut self, pin: PinId) {
        self.log.push(GpioCall::Free { pin });
    }
}

// ── Event sink ────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<DeviceEvent>,
}

impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &DeviceEvent) {
        self.events.push(event.clone());
    }
}
