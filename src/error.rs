/// Errors that can occur while encoding a host name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// Label could not be Punycode-encoded
    InvalidLabel,
    /// Encoded label exceeds 63 bytes
    LabelTooLong,
}

impl core::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidLabel => "Invalid host label",
            Self::LabelTooLong => "Host label too long",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {}

/// Result type for host encoding operations
pub type Result<T> = core::result::Result<T, EncodingError>;
