use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Ticks per second. One tick is 100 nanoseconds.
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Ticks between 1601-01-01T00:00:00Z and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("date time out of range")]
    OutOfRange,
    #[error("invalid date time string format `{0}`")]
    InvalidFormat(String),
}

/// An OPC UA date time: ticks of 100 nanoseconds counted from
/// 1601-01-01T00:00:00Z.
///
/// The printable range is bounded by [`UaDateTime::MIN`] (0001-01-01) and
/// [`UaDateTime::MAX`] (9999-12-31T23:59:59Z); values outside it clamp to
/// the nearest bound when formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UaDateTime(i64);

impl UaDateTime {
    /// 0001-01-01T00:00:00Z.
    pub const MIN: Self = Self(-504_911_232_000_000_000);
    /// 9999-12-31T23:59:59Z.
    pub const MAX: Self = Self(2_650_467_743_990_000_000);

    /// The null date time, equal to the 1601 epoch.
    #[must_use]
    pub const fn null() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    #[must_use]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn now() -> Self {
        Self::from(OffsetDateTime::now_utc())
    }

    #[must_use]
    pub const fn from_unix_timestamp(seconds: i64) -> Self {
        Self(seconds * TICKS_PER_SECOND + UNIX_EPOCH_TICKS)
    }

    /// Whole seconds since the Unix epoch, truncated towards the past.
    #[must_use]
    pub const fn unix_timestamp(self) -> i64 {
        (self.0 - UNIX_EPOCH_TICKS).div_euclid(TICKS_PER_SECOND)
    }

    /// Clamps the value into the printable range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn parse_rfc3339<S: AsRef<str>>(input: S) -> Result<Self, DateTimeError> {
        let dt = OffsetDateTime::parse(input.as_ref(), &Rfc3339)
            .map_err(|_| DateTimeError::InvalidFormat(input.as_ref().into()))?;
        Ok(Self::from(dt))
    }

    /// Formats with seconds precision and a trailing `Z`, clamping values
    /// outside the printable range.
    pub fn format_rfc3339(self) -> Result<String, DateTimeError> {
        let seconds = self.clamped().unix_timestamp();
        let dt = OffsetDateTime::from_unix_timestamp(seconds)
            .map_err(|_| DateTimeError::OutOfRange)?;
        dt.format(&Rfc3339).map_err(|_| DateTimeError::OutOfRange)
    }
}

impl From<OffsetDateTime> for UaDateTime {
    fn from(value: OffsetDateTime) -> Self {
        let ticks = value.unix_timestamp_nanos() / 100 + i128::from(UNIX_EPOCH_TICKS);
        Self(ticks.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

impl TryFrom<UaDateTime> for OffsetDateTime {
    type Error = DateTimeError;

    fn try_from(value: UaDateTime) -> Result<Self, Self::Error> {
        let nanos = i128::from(value.0 - UNIX_EPOCH_TICKS) * 100;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| DateTimeError::OutOfRange)
    }
}

impl Display for UaDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format_rfc3339() {
            Ok(s) => s.fmt(f),
            Err(_) => "INVALID_DATE_TIME".fmt(f),
        }
    }
}

impl FromStr for UaDateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rfc3339(s)
    }
}

#[cfg(feature = "serde")]
const _: () = {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    impl Serialize for UaDateTime {
        fn serialize<S>(
            &self,
            serializer: S,
        ) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
        where
            S: Serializer,
        {
            let s = self.to_string();
            serializer.serialize_str(&s)
        }
    }

    impl<'de> Deserialize<'de> for UaDateTime {
        fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Self::from_str(&s).map_err(de::Error::custom)
        }
    }
};
