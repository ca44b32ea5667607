use base64ct::{Base64, Encoding};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid base-64 byte string")]
pub struct ByteStringError;

/// An opaque sequence of bytes, distinct from the null byte string.
///
/// Byte strings travel as standard-alphabet base-64 with `=` padding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteString {
    value: Option<Vec<u8>>,
}

impl ByteString {
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.value.is_none()
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn from_base64(input: &str) -> Result<Self, ByteStringError> {
        Base64::decode_vec(input)
            .map(Self::from)
            .map_err(|_| ByteStringError)
    }

    /// The base-64 rendition, or `None` for the null byte string.
    #[must_use]
    pub fn as_base64(&self) -> Option<String> {
        self.value.as_deref().map(Base64::encode_string)
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(value: Vec<u8>) -> Self {
        Self { value: Some(value) }
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        Self {
            value: Some(value.to_vec()),
        }
    }
}

impl Display for ByteString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.as_base64() {
            Some(s) => s.fmt(f),
            None => "null".fmt(f),
        }
    }
}
