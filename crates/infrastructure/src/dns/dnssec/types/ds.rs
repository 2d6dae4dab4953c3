use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{Name, RData, Record, RecordType};

const DS_CODE: u16 = 43;

/// DS rdata in emit direction. Algorithm and digest type are carried
/// as raw code points so chain-committed values pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsRdata {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: Vec<u8>,
}

impl DsRdata {
    pub fn to_wire(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(4 + self.digest.len());
        wire.extend_from_slice(&self.key_tag.to_be_bytes());
        wire.push(self.algorithm);
        wire.push(self.digest_type);
        wire.extend_from_slice(&self.digest);
        wire
    }

    pub fn to_record(&self, owner: Name, ttl: u32) -> Record {
        Record::from_rdata(
            owner,
            ttl,
            RData::Unknown {
                code: RecordType::Unknown(DS_CODE),
                rdata: NULL::with(self.to_wire()),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::RecordType;

    #[test]
    fn test_wire_layout() {
        let ds = DsRdata {
            key_tag: 0xbeef,
            algorithm: 13,
            digest_type: 2,
            digest: vec![0x11, 0x22],
        };
        assert_eq!(ds.to_wire(), [0xbe, 0xef, 13, 2, 0x11, 0x22]);

        let record = ds.to_record(Name::root(), 21600);
        assert_eq!(u16::from(record.record_type()), u16::from(RecordType::DS));
    }
}
