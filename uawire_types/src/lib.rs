//! The OPC UA built-in type system.
//!
//! Value types carried by [`Variant`](variant::Variant), the status-code
//! symbol table, and the namespace/server URI tables consulted during
//! encoding.

pub mod byte_string;
pub mod data_value;
pub mod diagnostic_info;
pub mod enumeration;
pub mod extension_object;
pub mod localized_text;
pub mod node_id;
pub mod qualified_name;
pub mod status_code;
pub mod tables;
pub mod variant;
pub mod xml_element;

mod status_codes;

pub use byte_string::{ByteString, ByteStringError};
pub use data_value::DataValue;
pub use diagnostic_info::DiagnosticInfo;
pub use enumeration::UaEnum;
pub use extension_object::{ExtensionObject, ExtensionObjectBody};
pub use localized_text::LocalizedText;
pub use node_id::{ExpandedNodeId, Identifier, NodeId, NodeIdError};
pub use qualified_name::QualifiedName;
pub use status_code::StatusCode;
pub use tables::{NamespaceTable, ServerTable};
pub use variant::{ArrayError, Variant, VariantArray, VariantTypeId};
pub use xml_element::XmlElement;
