use std::any::Any;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use uawire_types::node_id::NodeId;

use crate::encoder::JsonEncoder;
use crate::error::EncodingResult;

/// Field encoding for one structured type, keyed by its encoding NodeId.
///
/// The encoder opens and closes the enclosing JSON object; the codec emits
/// the fields in declaration order through the encoder's keyed emitters,
/// or through the raw token writer where it needs full control. The
/// complementary decode half lives with the JSON decoder.
pub trait JsonStructureCodec: Send + Sync {
    /// The structure's type name, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Encodes `value`, which the codec downcasts to its concrete type.
    fn encode(&self, encoder: &mut JsonEncoder<'_>, value: &dyn Any) -> EncodingResult<()>;
}

/// Registry of structure codecs, the single dynamic-dispatch point of the
/// encoder.
#[derive(Default, Clone)]
pub struct DataTypeManager {
    codecs: HashMap<NodeId, Arc<dyn JsonStructureCodec>>,
}

impl DataTypeManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a codec under its encoding id, replacing any previous one.
    pub fn register(&mut self, encoding_id: NodeId, codec: Arc<dyn JsonStructureCodec>) {
        self.codecs.insert(encoding_id, codec);
    }

    #[must_use]
    pub fn codec(&self, encoding_id: &NodeId) -> Option<Arc<dyn JsonStructureCodec>> {
        self.codecs.get(encoding_id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Debug for DataTypeManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.codecs.iter().map(|(id, codec)| (id, codec.type_name())))
            .finish()
    }
}
