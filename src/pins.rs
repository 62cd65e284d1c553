//! GPIO pin identifiers and board assignments.
//!
//! Single source of truth for pin numbers; drivers take a [`PinId`]
//! rather than a bare integer.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque hardware output line, numbered the way the board's GPIO
/// controller numbers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(pub i32);

impl PinId {
    pub const fn number(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output driving the status LED (active HIGH).
pub const LED_GPIO: PinId = PinId(17);

/// Consumer label passed with the LED pin request.
pub const LED_LABEL: &str = "led_gpio";
