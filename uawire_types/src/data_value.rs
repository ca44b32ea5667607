use uawire_common::date_time::UaDateTime;

use crate::status_code::StatusCode;
use crate::variant::Variant;

/// A value with its quality and the timestamps at which it was sourced and
/// observed. Every field is optional; absent fields take their defaults on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataValue {
    pub value: Option<Variant>,
    pub status: Option<StatusCode>,
    pub source_timestamp: Option<UaDateTime>,
    pub source_picoseconds: Option<u16>,
    pub server_timestamp: Option<UaDateTime>,
    pub server_picoseconds: Option<u16>,
}

impl DataValue {
    #[must_use]
    pub fn new(value: impl Into<Variant>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

impl From<Variant> for DataValue {
    fn from(value: Variant) -> Self {
        Self::new(value)
    }
}
