use thiserror::Error;

/// Errors raised by the codecs.
///
/// Every failure is reported at the point of detection. None of the codecs attempt a fallback
/// decoding, so a malformed input never yields a partial result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Unknown ABI type tag or unsupported value shape.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
    /// A negative value where only non-negative values are accepted.
    #[error("value out of range: {0}")]
    Range(String),
    /// Malformed hex text.
    #[error("invalid hex format: {0}")]
    Format(String),
    /// Wrong byte or word length.
    #[error("invalid length: {0}")]
    Length(String),
    /// The value cannot be represented as the required numeric type.
    #[error("could not convert {0} to an integer")]
    Conversion(String),
    /// The value is not a `0x`-prefixed, 40 digit address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// A primitive number was required.
    #[error("expected a number, got {0}")]
    Type(String),
    /// The leading RLP byte falls in a range the decoder does not handle.
    #[error("unsupported RLP prefix byte 0x{0:02x}")]
    UnsupportedFormat(u8),
}

/// Codec result type.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;
