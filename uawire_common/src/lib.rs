//! Foundation value types for the uawire library.

pub mod date_time;
pub mod guid;
