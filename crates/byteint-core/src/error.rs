//! Error type for big-integer operations.

/// Error type for parsing, formatting and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// Malformed input or unsupported base.
    #[error("format error: {0}")]
    Format(String),

    /// A result (or input) needs more digits than the configured limit.
    #[error("size error: {len} digits exceeds the limit of {max}")]
    Size {
        /// Digits the value would need.
        len: usize,
        /// Configured `MAX_SIZE`.
        max: usize,
    },

    /// `MAX_SIZE` outside its valid range.
    #[error("size error: max size {0} is outside [1, 67108864]")]
    InvalidMaxSize(usize),

    /// Mathematically undefined operation or invalid mode.
    #[error("domain error: {0}")]
    Domain(String),

    /// Input of the wrong kind for the requested base.
    #[error("input kind error: {0}")]
    InvalidInputKind(String),
}

impl BigIntError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// True for both size variants.
    #[must_use]
    pub fn is_size(&self) -> bool {
        matches!(self, Self::Size { .. } | Self::InvalidMaxSize(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BigIntError>;
