#![doc = include_str!("../README.md")]

/// Foundation value types shared by all crates.
pub mod common {
    pub use uawire_common::*;
}

#[cfg(feature = "types")]
/// OPC UA built-in types and lookup tables.
pub mod types {
    pub use uawire_types::*;
}

#[cfg(feature = "json")]
/// Reversible and non-reversible JSON encoding.
pub mod json {
    pub use uawire_json::*;
}
