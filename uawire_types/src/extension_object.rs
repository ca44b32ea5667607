use crate::byte_string::ByteString;
use crate::node_id::NodeId;
use crate::xml_element::XmlElement;

/// The encoded body carried by an [`ExtensionObject`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ExtensionObjectBody {
    #[default]
    Null,
    /// Opaque bytes produced by the binary encoder.
    Binary(ByteString),
    /// An XML document produced by the XML encoder.
    Xml(XmlElement),
    /// A complete JSON text produced by the JSON encoder.
    Json(String),
}

/// An envelope around an encoded structure, tagged with the NodeId of the
/// encoding it was produced by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionObject {
    pub type_id: NodeId,
    pub body: ExtensionObjectBody,
}

impl ExtensionObject {
    #[must_use]
    pub const fn null() -> Self {
        Self {
            type_id: NodeId::null(),
            body: ExtensionObjectBody::Null,
        }
    }

    pub fn binary(type_id: NodeId, body: impl Into<ByteString>) -> Self {
        Self {
            type_id,
            body: ExtensionObjectBody::Binary(body.into()),
        }
    }

    pub fn xml(type_id: NodeId, body: impl Into<XmlElement>) -> Self {
        Self {
            type_id,
            body: ExtensionObjectBody::Xml(body.into()),
        }
    }

    pub fn json(type_id: NodeId, body: impl Into<String>) -> Self {
        Self {
            type_id,
            body: ExtensionObjectBody::Json(body.into()),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.type_id.is_null() && matches!(self.body, ExtensionObjectBody::Null)
    }
}
