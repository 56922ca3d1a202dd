/// Errors from registry initialization and device selection.
use thiserror::Error;

use crate::device::DriverError;

/// Errors that end a run before any info block is shown.
#[derive(Debug, Error)]
pub enum TdcError {
    /// The driver could not be queried for boards.
    #[error("Device layer unavailable: {0}")]
    DeviceLayer(#[from] DriverError),

    /// The driver answered, but reported no usable boards.
    #[error("No TDC devices found (device count {count}).")]
    NoDevices {
        /// Count as reported by the driver.
        count: i32,
    },

    /// The `-tdc` value is not a number.
    #[error("Invalid first argument <{token}>, Error: {reason}")]
    InvalidSelector {
        /// The value as typed.
        token: String,
        /// Why it did not parse.
        reason: String,
    },

    /// The `-tdc` value looks like a serial number but no board has it.
    #[error("Serial number entered <{token}> is not found.")]
    SerialNotFound {
        /// The value as typed.
        token: String,
    },

    /// The `-tdc` value is an index outside the registry.
    #[error("Board index entered <{token}> is out of bound.")]
    IndexOutOfBounds {
        /// The value as typed.
        token: String,
    },
}

impl TdcError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DeviceLayer(_) | Self::NoDevices { .. } => 2,
            Self::InvalidSelector { .. }
            | Self::SerialNotFound { .. }
            | Self::IndexOutOfBounds { .. } => 4,
        }
    }
}
