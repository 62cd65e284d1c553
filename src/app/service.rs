//! Device service: attach/detach lifecycle and attribute routing.
//!
//! [`DeviceService`] owns one [`LedController`] and one
//! [`SensorAggregator`], registers their attribute groups, and routes
//! text show/store requests to them.
//!
//! ```text
//!   GpioPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                │       DeviceService      │
//!  show/store ──▶│  LED · Sensor · Registry │◀── producers (update)
//!                └──────────────────────────┘
//! ```

use std::sync::Arc;

use log::{info, warn};

use crate::attributes::bindings::{LED_GROUP, SENSOR_GROUP, led_attributes, sensor_attributes};
use crate::attributes::{AttrEntry, AttributeRegistry, ShowBuf};
use crate::config::{SystemConfig, validate_config};
use crate::drivers::led::LedController;
use crate::error::{AttrError, Result};
use crate::sensors::SensorAggregator;

use super::events::DeviceEvent;
use super::ports::{EventSink, GpioPort};

// ───────────────────────────────────────────────────────────────
// DeviceService
// ───────────────────────────────────────────────────────────────

pub struct DeviceService<G: GpioPort + 'static> {
    led: Arc<LedController<G>>,
    sensor: Arc<SensorAggregator>,
    registry: AttributeRegistry,
    attached: bool,
}

impl<G: GpioPort + 'static> DeviceService<G> {
    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring the device up: claim the LED pin, create the sensor, register
    /// both attribute groups.
    ///
    /// Nothing is left claimed or registered if any step fails.
    pub fn attach(config: &SystemConfig, gpio: G, sink: &mut impl EventSink) -> Result<Self> {
        validate_config(config)?;

        let led = Arc::new(LedController::initialize(config.led_gpio, gpio)?);
        let sensor = Arc::new(SensorAggregator::new(config.isr_lock_retries));

        let mut registry = AttributeRegistry::new();
        if let Err(e) = registry.create_group(led_attributes(Arc::clone(&led))) {
            warn!("Failed to create {} group: {}", LED_GROUP, e);
            led.shutdown();
            return Err(e.into());
        }
        if let Err(e) = registry.create_group(sensor_attributes(Arc::clone(&sensor))) {
            warn!("Failed to create {} group: {}", SENSOR_GROUP, e);
            registry.remove_group(LED_GROUP);
            led.shutdown();
            return Err(e.into());
        }
        info!("Sensor driver initialized");

        sink.emit(&DeviceEvent::Attached {
            led_pin: led.pin(),
        });

        Ok(Self {
            led,
            sensor,
            registry,
            attached: true,
        })
    }

    /// Tear down: remove groups, force the LED off and release its pin.
    /// Idempotent.
    pub fn detach(&mut self, sink: &mut impl EventSink) {
        if !self.attached {
            return;
        }
        self.registry.remove_group(SENSOR_GROUP);
        info!("Sensor driver removed");
        self.registry.remove_group(LED_GROUP);
        self.led.shutdown();
        self.attached = false;
        sink.emit(&DeviceEvent::Detached);
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ── Attribute access ──────────────────────────────────────

    pub fn show(&self, path: &str) -> core::result::Result<ShowBuf, AttrError> {
        self.registry.show(path)
    }

    /// Route a textual store.  Returns the number of bytes consumed.
    pub fn store(
        &self,
        path: &str,
        text: &str,
        sink: &mut impl EventSink,
    ) -> core::result::Result<usize, AttrError> {
        match self.registry.store(path, text) {
            Ok(bytes) => {
                sink.emit(&DeviceEvent::AttributeStored {
                    path: path.to_owned(),
                    bytes,
                });
                Ok(bytes)
            }
            Err(error) => {
                sink.emit(&DeviceEvent::StoreRejected {
                    path: path.to_owned(),
                    error,
                });
                Err(error)
            }
        }
    }

    pub fn attributes(&self) -> Vec<AttrEntry> {
        self.registry.entries()
    }

    // ── Component handles ─────────────────────────────────────

    pub fn led(&self) -> &LedController<G> {
        &self.led
    }

    /// Shared handle for producers calling `update`.
    pub fn sensor(&self) -> Arc<SensorAggregator> {
        Arc::clone(&self.sensor)
    }
}
