//! Error handling and exit codes.

use byteint_core::BigIntError;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error (I/O, invalid configuration).
    pub const ERROR_GENERIC: u8 = 1;
    /// Malformed value or unsupported base.
    pub const ERROR_FORMAT: u8 = 2;
    /// Value longer than the configured maximum size.
    pub const ERROR_SIZE: u8 = 3;
    /// Undefined operation or invalid rounding mode.
    pub const ERROR_DOMAIN: u8 = 4;
    /// Wrong kind of input for the requested base.
    pub const ERROR_INPUT_KIND: u8 = 5;
}

/// Map an application error to its exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<BigIntError>()
        .map_or(exit_codes::ERROR_GENERIC, bigint_exit_code)
}

/// Exit code for a library error.
#[must_use]
pub fn bigint_exit_code(err: &BigIntError) -> u8 {
    match err {
        BigIntError::Format(_) => exit_codes::ERROR_FORMAT,
        BigIntError::Size { .. } | BigIntError::InvalidMaxSize(_) => exit_codes::ERROR_SIZE,
        BigIntError::Domain(_) => exit_codes::ERROR_DOMAIN,
        BigIntError::InvalidInputKind(_) => exit_codes::ERROR_INPUT_KIND,
    }
}
