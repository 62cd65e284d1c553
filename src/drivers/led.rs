//! Single-pin LED actuator.
//!
//! The logical state and the GPIO adapter live behind one mutex, so the
//! pin write happens inside the same critical section that updates the
//! state.  A reader therefore never sees a value that was not also sent to
//! the pin.
//!
//! ## Lifecycle
//!
//! [`LedController::initialize`] claims the pin driven LOW;
//! [`LedController::shutdown`] (also run on drop) drives it LOW again and
//! releases it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use embedded_hal::digital::PinState;
use log::{error, info, warn};

use crate::app::ports::GpioPort;
use crate::attributes::parse::parse_switch;
use crate::error::{GpioError, ValidationError};
use crate::pins::{self, PinId};

struct LedState<G> {
    on: bool,
    released: bool,
    gpio: G,
}

pub struct LedController<G: GpioPort> {
    pin: PinId,
    inner: Mutex<LedState<G>>,
}

impl<G: GpioPort> LedController<G> {
    /// Claim `pin` through `gpio` and start with the LED off.
    pub fn initialize(pin: PinId, mut gpio: G) -> Result<Self, GpioError> {
        if let Err(e) = gpio.request(pin, pins::LED_LABEL, PinState::Low) {
            error!("Failed to request {}: {}", pin, e);
            return Err(e);
        }
        info!("LED driver initialized on {}", pin);

        Ok(Self {
            pin,
            inner: Mutex::new(LedState {
                on: false,
                released: false,
                gpio,
            }),
        })
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Current logical state.
    pub fn read(&self) -> bool {
        self.lock().on
    }

    /// Apply a textual `0`/`1` request.
    ///
    /// Validation completes before the lock is taken; a rejected request
    /// leaves both the state and the pin untouched.  `Ok(false)` means the
    /// request was valid but the controller is already shut down.
    pub fn write(&self, text: &str) -> Result<bool, ValidationError> {
        let on = parse_switch(text)?;
        Ok(self.set(on))
    }

    /// Drive the LED and record the new state.  Returns `false` without
    /// touching the pin once [`shutdown`](Self::shutdown) has run.
    pub fn set(&self, on: bool) -> bool {
        let mut led = self.lock();
        if led.released {
            warn!("LED write after shutdown ignored ({})", self.pin);
            return false;
        }
        led.gpio.write(self.pin, PinState::from(on));
        led.on = on;
        true
    }

    /// Force the LED off and release the pin.  Idempotent.
    pub fn shutdown(&self) {
        let mut led = self.lock();
        if led.released {
            return;
        }
        led.gpio.write(self.pin, PinState::Low);
        led.gpio.free(self.pin);
        led.on = false;
        led.released = true;
        info!("LED driver removed");
    }

    pub fn is_released(&self) -> bool {
        self.lock().released
    }

    /// Run `f` against the GPIO adapter under the controller lock.
    pub fn inspect_gpio<R>(&self, f: impl FnOnce(&G) -> R) -> R {
        f(&self.lock().gpio)
    }

    fn lock(&self) -> MutexGuard<'_, LedState<G>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G: GpioPort> Drop for LedController<G> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
