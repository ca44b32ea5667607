use thiserror::Error;

pub type EncodingResult<T> = Result<T, EncodingError>;

/// The single error surface of the encoder.
///
/// Any error is fatal for the current encoding: no further output is
/// produced and the encoder must be [`reset`](crate::JsonEncoder::reset)
/// before reuse.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// A configured encoding limit was exceeded.
    #[error("encoding limit exceeded: {0}")]
    LimitExceeded(&'static str),
    /// A variant type id out of range, or a structure without a codec.
    #[error("unknown type: {0}")]
    UnknownType(String),
    /// The caller drove the token writer into an illegal state.
    #[error("invalid encoder state: {0}")]
    InvalidState(&'static str),
    /// The underlying sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
