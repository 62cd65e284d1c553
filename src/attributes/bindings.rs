//! Attribute groups for the LED and sensor components.
//!
//! | Path             | Mode | Accessor                            |
//! |------------------|------|-------------------------------------|
//! | `led/state`      | rw   | [`LedController::read`] / `write`   |
//! | `sensor/current` | r    | [`SensorAggregator::read_current`]  |
//! | `sensor/min`     | r    | [`SensorAggregator::read_minimum`]  |
//! | `sensor/max`     | r    | [`SensorAggregator::read_maximum`]  |
//! | `sensor/average` | r    | [`SensorAggregator::read_average`]  |

use std::sync::Arc;

use super::{Attribute, AttributeGroup};
use crate::app::ports::GpioPort;
use crate::drivers::led::LedController;
use crate::sensors::SensorAggregator;

pub const LED_GROUP: &str = "led";
pub const SENSOR_GROUP: &str = "sensor";

/// `led/state`: `0`/`1` on read, `0`/`1` accepted on write.
pub fn led_attributes<G>(led: Arc<LedController<G>>) -> AttributeGroup
where
    G: GpioPort + 'static,
{
    let reader = Arc::clone(&led);
    AttributeGroup::new(LED_GROUP).with(Attribute::read_write(
        "state",
        move || u8::from(reader.read()),
        move |text| led.write(text).map(drop),
    ))
}

/// Read-only `current`, `min`, `max` and `average`.
pub fn sensor_attributes(sensor: Arc<SensorAggregator>) -> AttributeGroup {
    let current = Arc::clone(&sensor);
    let minimum = Arc::clone(&sensor);
    let maximum = Arc::clone(&sensor);
    AttributeGroup::new(SENSOR_GROUP)
        .with(Attribute::read_only("current", move || current.read_current()))
        .with(Attribute::read_only("min", move || minimum.read_minimum()))
        .with(Attribute::read_only("max", move || maximum.read_maximum()))
        .with(Attribute::read_only("average", move || sensor.read_average()))
}
