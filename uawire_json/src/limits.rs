/// Caps consulted during an encoding pass. A size-like field set to zero
/// disables that cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingLimits {
    /// Longest accepted string, in bytes.
    pub max_string_length: usize,
    /// Most elements accepted in one array or matrix.
    pub max_array_length: usize,
    /// Most bytes written into one document.
    pub max_message_size: usize,
    /// Deepest accepted nesting of composite values.
    pub max_recursion_depth: u32,
}

impl EncodingLimits {
    /// Limits with every cap disabled.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_string_length: 0,
            max_array_length: 0,
            max_message_size: 0,
            max_recursion_depth: 0,
        }
    }
}

impl Default for EncodingLimits {
    fn default() -> Self {
        Self {
            max_string_length: 65_535,
            max_array_length: 65_535,
            max_message_size: 2_097_152,
            max_recursion_depth: 128,
        }
    }
}
