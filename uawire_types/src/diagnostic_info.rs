use crate::status_code::StatusCode;

/// Vendor-specific diagnostics for an operation result.
///
/// The four index fields point into the string table of the enclosing
/// response header; −1 marks an index as absent. Inner nodes may nest.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticInfo {
    pub symbolic_id: i32,
    pub namespace_uri: i32,
    pub locale: i32,
    pub localized_text: i32,
    pub additional_info: Option<String>,
    pub inner_status_code: Option<StatusCode>,
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
}

impl DiagnosticInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbolic_id < 0
            && self.namespace_uri < 0
            && self.locale < 0
            && self.localized_text < 0
            && self.additional_info.is_none()
            && self.inner_status_code.is_none()
            && self.inner_diagnostic_info.is_none()
    }
}

impl Default for DiagnosticInfo {
    fn default() -> Self {
        Self {
            symbolic_id: -1,
            namespace_uri: -1,
            locale: -1,
            localized_text: -1,
            additional_info: None,
            inner_status_code: None,
            inner_diagnostic_info: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(DiagnosticInfo::default().is_empty());
        assert!(
            !DiagnosticInfo {
                symbolic_id: 0,
                ..DiagnosticInfo::default()
            }
            .is_empty()
        );
    }
}
