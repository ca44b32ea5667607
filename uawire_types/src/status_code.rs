use std::fmt::{self, Display, Formatter};

use crate::status_codes::STATUS_CODE_NAMES;

/// A 32-bit OPC UA status code. The two most significant bits carry the
/// severity: 00 good, 01 uncertain, 1x bad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatusCode(u32);

impl StatusCode {
    pub const GOOD: Self = Self(0x0000_0000);
    pub const UNCERTAIN: Self = Self(0x4000_0000);
    pub const BAD: Self = Self(0x8000_0000);

    pub const BAD_UNEXPECTED_ERROR: Self = Self(0x8001_0000);
    pub const BAD_INTERNAL_ERROR: Self = Self(0x8002_0000);
    pub const BAD_OUT_OF_MEMORY: Self = Self(0x8003_0000);
    pub const BAD_ENCODING_ERROR: Self = Self(0x8006_0000);
    pub const BAD_DECODING_ERROR: Self = Self(0x8007_0000);
    pub const BAD_ENCODING_LIMITS_EXCEEDED: Self = Self(0x8008_0000);
    pub const BAD_TIMEOUT: Self = Self(0x800A_0000);
    pub const BAD_OUT_OF_RANGE: Self = Self(0x803C_0000);
    pub const BAD_NOT_SUPPORTED: Self = Self(0x803D_0000);
    pub const BAD_INVALID_ARGUMENT: Self = Self(0x80AB_0000);
    pub const BAD_INVALID_STATE: Self = Self(0x80AF_0000);
    pub const UNCERTAIN_INITIAL_VALUE: Self = Self(0x4092_0000);
    pub const UNCERTAIN_LAST_USABLE_VALUE: Self = Self(0x4090_0000);

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_good(self) -> bool {
        self.0 & 0xC000_0000 == 0
    }

    #[must_use]
    pub const fn is_uncertain(self) -> bool {
        self.0 & 0xC000_0000 == 0x4000_0000
    }

    #[must_use]
    pub const fn is_bad(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    /// The symbolic name associated with the code, if the code appears in
    /// the specification table.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        STATUS_CODE_NAMES
            .binary_search_by_key(&self.0, |&(code, _)| code)
            .ok()
            .map(|index| STATUS_CODE_NAMES[index].1)
    }
}

impl From<u32> for StatusCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<StatusCode> for u32 {
    fn from(value: StatusCode) -> Self {
        value.0
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#010X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity() {
        assert!(StatusCode::GOOD.is_good());
        assert!(!StatusCode::GOOD.is_bad());
        assert!(StatusCode::UNCERTAIN_INITIAL_VALUE.is_uncertain());
        assert!(!StatusCode::UNCERTAIN_INITIAL_VALUE.is_good());
        assert!(StatusCode::BAD_DECODING_ERROR.is_bad());
        assert!(StatusCode::new(0x0030_0000).is_good());
    }

    #[test]
    fn symbol_lookup() {
        assert_eq!(StatusCode::GOOD.name(), Some("Good"));
        assert_eq!(
            StatusCode::new(1_083_310_080).name(),
            Some("Uncertain_InitialValue")
        );
        assert_eq!(
            StatusCode::BAD_ENCODING_LIMITS_EXCEEDED.name(),
            Some("Bad_EncodingLimitsExceeded")
        );
        assert_eq!(StatusCode::new(0x8FFF_0000).name(), None);
    }

    #[test]
    fn display() {
        assert_eq!(StatusCode::GOOD.to_string(), "Good");
        assert_eq!(StatusCode::new(0x8FFF_0000).to_string(), "0x8FFF0000");
    }
}
