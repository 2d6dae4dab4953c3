use crate::errors::ResourceError;
use crate::record::{Record, RecordKind};
use crate::wire;

/// Records inherit one TTL, pinned by the tree commitment interval
/// rather than carried on the wire.
pub const DEFAULT_TTL: u32 = 21600;

pub const MAX_RECORDS: usize = 255;

/// A decoded name resource: the full record set committed to the chain
/// for one name. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub version: u8,
    pub ttl: u32,
    pub records: Vec<Record>,
}

impl Resource {
    /// Decodes a version 0 resource blob. Fail-fast: the first
    /// malformed byte rejects the whole blob and nothing partial is
    /// returned.
    pub fn decode(blob: &[u8]) -> Result<Self, ResourceError> {
        wire::decode_resource(blob)
    }

    /// First record of the given kind, in wire order.
    pub fn get(&self, kind: RecordKind) -> Option<&Record> {
        self.records.iter().find(|record| record.kind() == kind)
    }

    pub fn has(&self, kind: RecordKind) -> bool {
        self.get(kind).is_some()
    }

    /// True when the resource delegates: any name-server record,
    /// whether plain, glued or synthetic.
    pub fn has_ns(&self) -> bool {
        self.records.iter().any(|record| matches!(record, Record::Ns(_)))
    }
}
