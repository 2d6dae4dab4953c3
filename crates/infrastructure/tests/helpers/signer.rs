#![allow(dead_code)]
use ferrous_hns_infrastructure::dns::dnssec::{
    DnskeyRdata, DsRdata, KeyRole, RrsigRdata, ZoneSigner,
};
use ferrous_hns_infrastructure::DnsComposer;
use hickory_proto::rr::{Name, Record, RecordType};
use std::sync::Arc;

pub const DNSKEY_TTL: u32 = 10800;
pub const SIG_INCEPTION: u32 = 1_700_000_000;
pub const SIG_EXPIRATION: u32 = 1_700_604_800;

/// Deterministic signer: fixed key material, fabricated signatures.
/// Shapes every RR exactly like a real signer would without pulling
/// crypto into the engine tests.
pub struct StaticZoneSigner {
    ksk: DnskeyRdata,
    zsk: DnskeyRdata,
}

impl StaticZoneSigner {
    pub fn new() -> Self {
        Self {
            ksk: DnskeyRdata::key_signing(13, vec![0x11; 32]),
            zsk: DnskeyRdata::zone_signing(13, vec![0x22; 32]),
        }
    }

    pub fn ksk_tag() -> u16 {
        Self::new().ksk.key_tag()
    }

    pub fn zsk_tag() -> u16 {
        Self::new().zsk.key_tag()
    }
}

impl Default for StaticZoneSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneSigner for StaticZoneSigner {
    fn key_signing_key(&self) -> Record {
        self.ksk.to_record(DNSKEY_TTL)
    }

    fn zone_signing_key(&self) -> Record {
        self.zsk.to_record(DNSKEY_TTL)
    }

    fn delegation_signer(&self) -> Record {
        DsRdata {
            key_tag: self.ksk.key_tag(),
            algorithm: 13,
            digest_type: 2,
            digest: vec![0x5a; 32],
        }
        .to_record(Name::root(), DNSKEY_TTL)
    }

    fn rrsig(&self, rrset: &[Record], covered: RecordType, role: KeyRole) -> Option<Record> {
        let first = rrset.first()?;
        let key = match role {
            KeyRole::KeySigning => &self.ksk,
            KeyRole::ZoneSigning => &self.zsk,
        };
        let rdata = RrsigRdata {
            type_covered: covered,
            algorithm: key.algorithm,
            labels: first.name().num_labels(),
            original_ttl: first.ttl(),
            expiration: SIG_EXPIRATION,
            inception: SIG_INCEPTION,
            key_tag: key.key_tag(),
            signer_name: Name::root(),
            signature: vec![0x5c; 64],
        };
        Some(rdata.to_record(first.name().clone(), first.ttl()))
    }
}

pub fn composer() -> DnsComposer {
    DnsComposer::new(Arc::new(StaticZoneSigner::new()))
}
