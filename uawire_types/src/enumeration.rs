/// An OPC UA enumerated type: a named set of 32-bit ordinals.
///
/// The JSON encoder writes implementors as their bare ordinal in reversible
/// mode and as the `"Name_Value"` string otherwise.
pub trait UaEnum {
    /// The ordinal of this member.
    fn value(&self) -> i32;

    /// The declared name of this member.
    fn name(&self) -> &'static str;
}
