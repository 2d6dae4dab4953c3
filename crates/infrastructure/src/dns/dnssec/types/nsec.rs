use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{Name, RData, Record, RecordType};

use crate::dns::rdata::name_to_wire;

const NSEC_CODE: u16 = 47;

/// NSEC rdata in emit direction: next domain plus a pre-built type
/// bitmap. The engine only ever emits denial proofs with a fixed map
/// (or none), so the bitmap is opaque bytes rather than a type list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsecRdata {
    pub next_domain: Name,
    pub type_map: Vec<u8>,
}

impl NsecRdata {
    pub fn empty_proof() -> Self {
        Self {
            next_domain: Name::root(),
            type_map: Vec::new(),
        }
    }

    pub fn with_type_map(type_map: Vec<u8>) -> Self {
        Self {
            next_domain: Name::root(),
            type_map,
        }
    }

    pub fn to_wire(&self) -> Vec<u8> {
        let mut wire = name_to_wire(&self.next_domain);
        wire.extend_from_slice(&self.type_map);
        wire
    }

    pub fn to_record(&self, owner: Name, ttl: u32) -> Record {
        Record::from_rdata(
            owner,
            ttl,
            RData::Unknown {
                code: RecordType::Unknown(NSEC_CODE),
                rdata: NULL::with(self.to_wire()),
            },
        )
    }
}
