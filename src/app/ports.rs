//! Port traits: the hexagonal boundary between the device core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LedController / SensorAggregator / DeviceService
//! ```
//!
//! Driven adapters (GPIO, sample producers, event sinks, config storage)
//! implement these traits.  The core consumes them via generics, so it
//! never touches hardware directly.

use embedded_hal::digital::PinState;

use crate::config::SystemConfig;
use crate::error::GpioError;
use crate::pins::PinId;

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Pin-level output primitives the LED controller relies on.
///
/// `write` is fire-and-forget: it is called with the controller's lock
/// held, so implementations must not block (a register write, not a bus
/// transaction).  Failures are the adapter's to log.
pub trait GpioPort: Send {
    /// Claim `pin` as an output and drive it to `initial`.
    fn request(&mut self, pin: PinId, label: &'static str, initial: PinState)
    -> Result<(), GpioError>;

    /// Drive a previously requested pin.
    fn write(&mut self, pin: PinId, level: PinState);

    /// Release a previously requested pin.  Releasing an unclaimed pin is a
    /// no-op.
    fn free(&mut self, pin: PinId);
}

// ───────────────────────────────────────────────────────────────
// Sample source (driven adapter: sensor hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Anything that yields integer sensor samples for the aggregator.
pub trait SampleSource: Send {
    /// Next sample, or `None` once the source is exhausted.
    fn next_sample(&mut self) -> Option<i32>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The service emits structured [`DeviceEvent`](super::events::DeviceEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::DeviceEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate config values before persisting and
/// reject invalid ranges with [`ConfigError::ValidationFailed`].
pub trait ConfigPort {
    /// Load configuration.  Returns [`SystemConfig::default()`] if no stored
    /// config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
