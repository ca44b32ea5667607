use std::sync::Arc;

use uawire_types::node_id::{ExpandedNodeId, NodeId};
use uawire_types::tables::{NamespaceTable, ServerTable};

use crate::codec::{DataTypeManager, JsonStructureCodec};
use crate::limits::EncodingLimits;

/// The lookup tables and limits consulted during an encoding pass.
///
/// Consulted read-only; one context may back any number of encoders.
#[derive(Debug, Default)]
pub struct EncodingContext {
    pub namespaces: NamespaceTable,
    pub servers: ServerTable,
    pub type_manager: DataTypeManager,
    pub limits: EncodingLimits,
}

impl EncodingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the codec registered for an encoding id. An attached
    /// namespace URI takes precedence over the numeric namespace index and
    /// must resolve in the namespace table.
    #[must_use]
    pub fn codec_for(&self, encoding_id: &ExpandedNodeId) -> Option<Arc<dyn JsonStructureCodec>> {
        match &encoding_id.namespace_uri {
            Some(uri) => {
                let namespace = self.namespaces.index_of(uri)?;
                self.type_manager.codec(&NodeId {
                    namespace,
                    identifier: encoding_id.node_id.identifier.clone(),
                })
            }
            None => self.type_manager.codec(&encoding_id.node_id),
        }
    }
}
