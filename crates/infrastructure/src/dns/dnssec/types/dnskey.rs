use std::fmt;

use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{Name, RData, Record, RecordType};

const ZONE_KEY_FLAG: u16 = 0x0100;
const SEP_FLAG: u16 = 0x0001;
const DNSKEY_CODE: u16 = 48;

/// DNSKEY rdata in emit direction: signer implementations build these
/// from their key material and the engine publishes them at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnskeyRdata {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub public_key: Vec<u8>,
}

impl DnskeyRdata {
    pub fn zone_signing(algorithm: u8, public_key: Vec<u8>) -> Self {
        Self {
            flags: ZONE_KEY_FLAG,
            protocol: 3,
            algorithm,
            public_key,
        }
    }

    pub fn key_signing(algorithm: u8, public_key: Vec<u8>) -> Self {
        Self {
            flags: ZONE_KEY_FLAG | SEP_FLAG,
            protocol: 3,
            algorithm,
            public_key,
        }
    }

    pub fn is_ksk(&self) -> bool {
        self.flags & SEP_FLAG != 0
    }

    pub fn to_wire(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(4 + self.public_key.len());
        wire.extend_from_slice(&self.flags.to_be_bytes());
        wire.push(self.protocol);
        wire.push(self.algorithm);
        wire.extend_from_slice(&self.public_key);
        wire
    }

    /// RFC 4034 appendix B key tag: ones-complement-ish checksum over
    /// the rdata wire form.
    pub fn key_tag(&self) -> u16 {
        let wire = self.to_wire();
        let mut accumulator: u32 = 0;

        for chunk in wire.chunks(2) {
            if chunk.len() == 2 {
                accumulator += u32::from(u16::from_be_bytes([chunk[0], chunk[1]]));
            } else {
                accumulator += u32::from(chunk[0]) << 8;
            }
        }

        accumulator += accumulator >> 16;
        (accumulator & 0xffff) as u16
    }

    pub fn to_record(&self, ttl: u32) -> Record {
        Record::from_rdata(
            Name::root(),
            ttl,
            RData::Unknown {
                code: RecordType::Unknown(DNSKEY_CODE),
                rdata: NULL::with(self.to_wire()),
            },
        )
    }
}

impl fmt::Display for DnskeyRdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DNSKEY(flags={}, algo={}, tag={}, {})",
            self.flags,
            self.algorithm,
            self.key_tag(),
            if self.is_ksk() { "KSK" } else { "ZSK" }
        )
    }
}
