//! [`GpioPort`] over a single `embedded-hal` output pin.
//!
//! Any HAL that implements [`OutputPin`] (ESP-IDF, RP2040, Linux
//! `gpio-cdev` wrappers...) plugs in here.  The adapter is bound to one
//! [`PinId`] and refuses requests for any other line.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

use crate::app::ports::GpioPort;
use crate::error::GpioError;
use crate::pins::PinId;

pub struct HalGpio<P> {
    id: PinId,
    pin: P,
    owner: Option<&'static str>,
}

impl<P: OutputPin> HalGpio<P> {
    pub fn new(id: PinId, pin: P) -> Self {
        Self {
            id,
            pin,
            owner: None,
        }
    }

    pub fn owner(&self) -> Option<&'static str> {
        self.owner
    }

    /// Give the pin back to the caller.
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, level: PinState) {
        if let Err(e) = self.pin.set_state(level) {
            warn!("{}: set {:?} failed ({:?})", self.id, level, e.kind());
        }
    }
}

impl<P: OutputPin + Send> GpioPort for HalGpio<P> {
    fn request(
        &mut self,
        pin: PinId,
        label: &'static str,
        initial: PinState,
    ) -> Result<(), GpioError> {
        if pin != self.id {
            return Err(GpioError::InvalidPin(pin));
        }
        if self.owner.is_some() {
            return Err(GpioError::Busy(pin));
        }
        self.owner = Some(label);
        self.drive(initial);
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: PinState) {
        if pin != self.id || self.owner.is_none() {
            warn!("write to unrequested {} ignored", pin);
            return;
        }
        self.drive(level);
    }

    fn free(&mut self, pin: PinId) {
        if pin == self.id {
            self.owner = None;
        }
    }
}
