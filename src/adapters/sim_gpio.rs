//! Host-side GPIO simulation.
//!
//! Tracks claimed lines and their current level in memory so the console
//! binary can run without hardware.

use std::collections::HashMap;

use embedded_hal::digital::PinState;
use log::{debug, warn};

use crate::app::ports::GpioPort;
use crate::error::GpioError;
use crate::pins::PinId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SimLine {
    label: &'static str,
    level: PinState,
}

#[derive(Debug, Default)]
pub struct SimGpio {
    lines: HashMap<PinId, SimLine>,
}

impl SimGpio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of a claimed line, `None` if nobody holds it.
    pub fn level(&self, pin: PinId) -> Option<PinState> {
        self.lines.get(&pin).map(|l| l.level)
    }

    pub fn is_claimed(&self, pin: PinId) -> bool {
        self.lines.contains_key(&pin)
    }
}

impl GpioPort for SimGpio {
    fn request(
        &mut self,
        pin: PinId,
        label: &'static str,
        initial: PinState,
    ) -> Result<(), GpioError> {
        if pin.number() < 0 {
            return Err(GpioError::InvalidPin(pin));
        }
        if let Some(line) = self.lines.get(&pin) {
            warn!("{} busy (held by '{}')", pin, line.label);
            return Err(GpioError::Busy(pin));
        }
        debug!("sim: {} requested by '{}' ({:?})", pin, label, initial);
        self.lines.insert(pin, SimLine { label, level: initial });
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: PinState) {
        match self.lines.get_mut(&pin) {
            Some(line) => {
                debug!("sim: {} -> {:?}", pin, level);
                line.level = level;
            }
            None => warn!("sim: write to unrequested {} ignored", pin),
        }
    }

    fn free(&mut self, pin: PinId) {
        self.lines.remove(&pin);
    }
}
