use std::fmt::{self, Display, Formatter};

/// Human-readable text with an optional locale id, both independently
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocalizedText {
    pub locale: Option<String>,
    pub text: Option<String>,
}

impl LocalizedText {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self {
            locale: None,
            text: None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.locale.is_none() && self.text.is_none()
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        Self {
            locale: None,
            text: Some(value.into()),
        }
    }
}

impl Display for LocalizedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.text.as_deref().unwrap_or_default())
    }
}
