//! The OPC UA JSON data encoding (Part 6 §5.3.1).
//!
//! [`JsonEncoder`] turns values of the built-in type system into
//! byte-deterministic JSON, in either the reversible form, which preserves
//! all type information, or the non-reversible form, which sheds type tags
//! and resolves namespace and server indices into URIs.

pub mod codec;
pub mod context;
pub mod encoder;
pub mod error;
pub mod limits;
pub mod writer;

pub use codec::{DataTypeManager, JsonStructureCodec};
pub use context::EncodingContext;
pub use encoder::JsonEncoder;
pub use error::{EncodingError, EncodingResult};
pub use limits::EncodingLimits;
pub use writer::JsonWriter;
