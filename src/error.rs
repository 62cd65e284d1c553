//! Unified error types for the device attribute core.
//!
//! Every subsystem has a small `Copy` error enum; all of them convert into
//! the top-level [`Error`] so callers that straddle subsystems (the
//! lifecycle service, the console binary) can use a single `?` path.

use core::fmt;

use crate::app::ports::ConfigError;
use crate::pins::PinId;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A stored value was rejected before any state was touched.
    Validation(ValidationError),
    /// An attribute lookup or registration failed.
    Attribute(AttrError),
    /// The GPIO collaborator refused a pin request.
    Gpio(GpioError),
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Attribute(e) => write!(f, "attribute: {e}"),
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Rejection of a textual store request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not a single decimal integer.
    NotParsable,
    /// Input parsed, but lies outside the accepted set of values.
    OutOfDomain,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotParsable => write!(f, "not a single integer"),
            Self::OutOfDomain => write!(f, "value out of domain"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Attribute registry errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrError {
    /// No attribute is registered under the requested path.
    NotFound,
    /// Store attempted on an attribute without a store accessor.
    ReadOnly,
    /// A group with this name is already registered.
    GroupExists(&'static str),
    /// Rendered value did not fit the show buffer.
    Overflow,
    /// The store accessor rejected the input.
    Invalid(ValidationError),
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no such attribute"),
            Self::ReadOnly => write!(f, "attribute is read-only"),
            Self::GroupExists(name) => write!(f, "group '{name}' already registered"),
            Self::Overflow => write!(f, "show buffer overflow"),
            Self::Invalid(e) => write!(f, "invalid value: {e}"),
        }
    }
}

impl std::error::Error for AttrError {}

impl From<ValidationError> for AttrError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

impl From<AttrError> for Error {
    fn from(e: AttrError) -> Self {
        match e {
            AttrError::Invalid(v) => Self::Validation(v),
            other => Self::Attribute(other),
        }
    }
}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// The adapter does not drive this pin.
    InvalidPin(PinId),
    /// The pin is already claimed by another owner.
    Busy(PinId),
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(f, "{pin} is not available"),
            Self::Busy(pin) => write!(f, "{pin} already requested"),
        }
    }
}

impl std::error::Error for GpioError {}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
