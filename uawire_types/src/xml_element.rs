use std::fmt::{self, Display, Formatter};

/// An XML fragment carried verbatim as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct XmlElement(pub String);

impl XmlElement {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for XmlElement {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for XmlElement {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl Display for XmlElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
