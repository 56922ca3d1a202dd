/// Errors from the driver-side information layer.
use thiserror::Error;

/// Raw status code returned by the xHPTDC8 driver calls.
pub type RawDriverCode = i32;

/// Driver status codes, numbered as the vendor's `CRONO_*` constants.
pub mod codes {
    use super::RawDriverCode;

    pub const OK: RawDriverCode = 0;
    pub const DEVICE_NOT_FOUND: RawDriverCode = 2;
    pub const NOT_INITIALIZED: RawDriverCode = 3;
    pub const INTERNAL_ERROR: RawDriverCode = 15;
    pub const INVALID_ARGUMENTS: RawDriverCode = 17;
}

/// Typed errors from the driver layer.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The driver has not been initialized, or has already been torn down.
    #[error("driver is not initialized")]
    NotInitialized,

    /// No board exists at the requested index.
    #[error("no device at index {index}")]
    DeviceNotFound {
        /// Index that was asked for.
        index: usize,
    },

    /// The driver refused the arguments of a call.
    #[error("invalid arguments: {context}")]
    InvalidArguments {
        /// Which call was rejected.
        context: String,
    },

    /// Writing an info block failed.
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding an info block as JSON failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other non-zero driver status.
    #[error("driver failure (code {code}): {context}")]
    Failure {
        /// Raw driver status code.
        code: RawDriverCode,
        /// Which call failed.
        context: String,
    },
}

impl DriverError {
    /// Numeric status code reported next to the message.
    #[must_use]
    pub fn code(&self) -> RawDriverCode {
        match self {
            Self::NotInitialized => codes::NOT_INITIALIZED,
            Self::DeviceNotFound { .. } => codes::DEVICE_NOT_FOUND,
            Self::InvalidArguments { .. } => codes::INVALID_ARGUMENTS,
            Self::Io(_) | Self::Json(_) => codes::INTERNAL_ERROR,
            Self::Failure { code, .. } => *code,
        }
    }
}

/// Map a raw driver status code to a typed `DriverError`.
///
/// # Errors
///
/// Returns `Err(DriverError)` for any code other than `codes::OK`.
pub fn check_driver_code(code: RawDriverCode, context: &str) -> Result<(), DriverError> {
    match code {
        codes::OK => Ok(()),
        codes::NOT_INITIALIZED => Err(DriverError::NotInitialized),
        codes::INVALID_ARGUMENTS => Err(DriverError::InvalidArguments {
            context: context.to_owned(),
        }),
        c => Err(DriverError::Failure {
            code: c,
            context: context.to_owned(),
        }),
    }
}
