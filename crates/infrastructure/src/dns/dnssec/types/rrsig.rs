use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{Name, RData, Record, RecordType};

use crate::dns::rdata::name_to_wire;

const RRSIG_CODE: u16 = 46;

/// RRSIG rdata in emit direction. Signer implementations fill in the
/// validity window, key tag and signature; the engine attaches the
/// result to the section it just composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrsigRdata {
    pub type_covered: RecordType,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub expiration: u32,
    pub inception: u32,
    pub key_tag: u16,
    pub signer_name: Name,
    pub signature: Vec<u8>,
}

impl RrsigRdata {
    pub fn to_wire(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(18 + self.signature.len());
        wire.extend_from_slice(&u16::from(self.type_covered).to_be_bytes());
        wire.push(self.algorithm);
        wire.push(self.labels);
        wire.extend_from_slice(&self.original_ttl.to_be_bytes());
        wire.extend_from_slice(&self.expiration.to_be_bytes());
        wire.extend_from_slice(&self.inception.to_be_bytes());
        wire.extend_from_slice(&self.key_tag.to_be_bytes());
        wire.extend_from_slice(&name_to_wire(&self.signer_name));
        wire.extend_from_slice(&self.signature);
        wire
    }

    pub fn to_record(&self, owner: Name, ttl: u32) -> Record {
        Record::from_rdata(
            owner,
            ttl,
            RData::Unknown {
                code: RecordType::Unknown(RRSIG_CODE),
                rdata: NULL::with(self.to_wire()),
            },
        )
    }
}
