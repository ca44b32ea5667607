use std::fmt::{self, Display, Formatter};

/// A name qualified by an index into the namespace table, e.g. `2:Pump`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: Option<String>,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self {
            namespace_index: 0,
            name: None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.name.is_none()
    }
}

impl From<&str> for QualifiedName {
    fn from(value: &str) -> Self {
        Self::new(0, value)
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or_default();
        if self.namespace_index != 0 {
            write!(f, "{}:{}", self.namespace_index, name)
        } else {
            f.write_str(name)
        }
    }
}
