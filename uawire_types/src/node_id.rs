use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

use uawire_common::guid::Guid;

use crate::byte_string::ByteString;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid node id string `{0}`")]
pub struct NodeIdError(pub String);

/// The identifier part of a [`NodeId`]: numeric, string, GUID or opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Numeric identifier, `i=123`.
    Numeric(u32),
    /// String identifier, `s=...`.
    String(String),
    /// GUID identifier, `g=...`.
    Guid(Guid),
    /// Opaque identifier, `b=...`.
    ByteString(ByteString),
}

impl Identifier {
    /// The identifier-type code used on the wire: 0 numeric, 1 string,
    /// 2 GUID, 3 byte string.
    #[must_use]
    pub const fn id_type(&self) -> u8 {
        match self {
            Identifier::Numeric(_) => 0,
            Identifier::String(_) => 1,
            Identifier::Guid(_) => 2,
            Identifier::ByteString(_) => 3,
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={v}"),
            Identifier::String(v) => write!(f, "s={v}"),
            Identifier::Guid(v) => write!(f, "g={v}"),
            Identifier::ByteString(v) => write!(f, "b={v}"),
        }
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Numeric(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::String(value.into())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::String(value)
    }
}

impl From<Guid> for Identifier {
    fn from(value: Guid) -> Self {
        Identifier::Guid(value)
    }
}

impl From<ByteString> for Identifier {
    fn from(value: ByteString) -> Self {
        Identifier::ByteString(value)
    }
}

/// An identifier for a node in the address space of an OPC UA server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// Index into the namespace table.
    pub namespace: u16,
    /// The identifier for the node.
    pub identifier: Identifier,
}

impl NodeId {
    pub fn new(namespace: u16, identifier: impl Into<Identifier>) -> Self {
        Self {
            namespace,
            identifier: identifier.into(),
        }
    }

    /// The null node id, numeric 0 in namespace 0.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            namespace: 0,
            identifier: Identifier::Numeric(0),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.namespace == 0 && matches!(self.identifier, Identifier::Numeric(0))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::null()
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        } else {
            write!(f, "{}", self.identifier)
        }
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || NodeIdError(s.into());
        let (namespace, rest) = match s.strip_prefix("ns=") {
            Some(rest) => {
                let (ns, rest) = rest.split_once(';').ok_or_else(err)?;
                (ns.parse::<u16>().map_err(|_| err())?, rest)
            }
            None => (0, s),
        };
        if rest.len() < 2 {
            return Err(err());
        }
        let identifier = match (&rest[..2], &rest[2..]) {
            ("i=", v) => Identifier::Numeric(v.parse().map_err(|_| err())?),
            ("s=", v) => Identifier::String(v.into()),
            ("g=", v) => Identifier::Guid(v.parse().map_err(|_| err())?),
            ("b=", v) => Identifier::ByteString(ByteString::from_base64(v).map_err(|_| err())?),
            _ => return Err(err()),
        };
        Ok(Self {
            namespace,
            identifier,
        })
    }
}

/// A [`NodeId`] extended with an optional namespace URI and a server index,
/// able to reference nodes beyond the local server.
///
/// A non-empty `namespace_uri` takes precedence over the inner numeric
/// namespace index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExpandedNodeId {
    pub node_id: NodeId,
    pub namespace_uri: Option<String>,
    pub server_index: u32,
}

impl ExpandedNodeId {
    #[must_use]
    pub const fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            namespace_uri: None,
            server_index: 0,
        }
    }

    #[must_use]
    pub fn with_namespace_uri(mut self, uri: impl Into<String>) -> Self {
        self.namespace_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_server_index(mut self, index: u32) -> Self {
        self.server_index = index;
        self
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.server_index == 0
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(value: NodeId) -> Self {
        Self::new(value)
    }
}

impl Display for ExpandedNodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.server_index != 0 {
            write!(f, "svr={};", self.server_index)?;
        }
        match &self.namespace_uri {
            Some(uri) => write!(f, "nsu={};{}", uri, self.node_id.identifier),
            None => write!(f, "{}", self.node_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(NodeId::new(0, 1).to_string(), "i=1");
        assert_eq!(NodeId::new(2, "flow").to_string(), "ns=2;s=flow");
        assert_eq!(
            NodeId::new(1, ByteString::from(vec![1, 2, 3, 4])).to_string(),
            "ns=1;b=AQIDBA=="
        );
    }

    #[test]
    fn str_convert() {
        for s in ["i=42", "ns=3;s=flow", "ns=1;b=AQIDBA=="] {
            assert_eq!(NodeId::from_str(s).unwrap().to_string(), s);
        }
        let guid: Guid = "72962b91-fa75-4ae6-8d28-b404dc7daf63".parse().unwrap();
        assert_eq!(
            NodeId::from_str("ns=2;g=72962B91-FA75-4AE6-8D28-B404DC7DAF63").unwrap(),
            NodeId::new(2, guid)
        );

        assert!(NodeId::from_str("x=1").is_err());
        assert!(NodeId::from_str("ns=one;i=1").is_err());
        assert!(NodeId::from_str("i=").is_err());
    }

    #[test]
    fn null() {
        assert!(NodeId::null().is_null());
        assert!(!NodeId::new(1, 0u32).is_null());
        assert!(!NodeId::new(0, 1u32).is_null());
    }

    #[test]
    fn expanded_display() {
        let e = ExpandedNodeId::new(NodeId::new(2, "flow"))
            .with_namespace_uri("urn:factory:devices")
            .with_server_index(3);
        assert_eq!(e.to_string(), "svr=3;nsu=urn:factory:devices;s=flow");
        assert_eq!(
            ExpandedNodeId::new(NodeId::new(2, "flow")).to_string(),
            "ns=2;s=flow"
        );
    }
}
