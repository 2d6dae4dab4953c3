#![allow(dead_code)]
use ferrous_hns_domain::{
    AddrRecord, DsRecord, LocationRecord, MagnetRecord, Record, Resource, ServiceRecord,
    SshRecord, Target, DEFAULT_TTL,
};
use hickory_proto::rr::{RData, Record as Rr, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Builds in-memory resources for projection tests, record by record.
pub struct ResourceBuilder {
    records: Vec<Record>,
}

impl ResourceBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn inet4(self, addr: Ipv4Addr) -> Self {
        self.push(Record::Inet4(Target::Inet4(addr)))
    }

    pub fn inet6(self, addr: Ipv6Addr) -> Self {
        self.push(Record::Inet6(Target::Inet6(addr)))
    }

    pub fn ns_name(self, name: &str) -> Self {
        self.push(Record::Ns(Target::Name(name.to_string())))
    }

    pub fn ns_glue(self, name: &str, inet4: Option<Ipv4Addr>, inet6: Option<Ipv6Addr>) -> Self {
        self.push(Record::Ns(Target::Glue {
            name: name.to_string(),
            inet4: inet4.unwrap_or(Ipv4Addr::UNSPECIFIED),
            inet6: inet6.unwrap_or(Ipv6Addr::UNSPECIFIED),
        }))
    }

    pub fn ns_synth4(self, addr: Ipv4Addr) -> Self {
        self.push(Record::Ns(Target::Inet4(addr)))
    }

    pub fn ns_synth6(self, addr: Ipv6Addr) -> Self {
        self.push(Record::Ns(Target::Inet6(addr)))
    }

    pub fn canonical(self, name: &str) -> Self {
        self.push(Record::Canonical(Target::Name(name.to_string())))
    }

    pub fn canonical_glue(
        self,
        name: &str,
        inet4: Option<Ipv4Addr>,
        inet6: Option<Ipv6Addr>,
    ) -> Self {
        self.push(Record::Canonical(Target::Glue {
            name: name.to_string(),
            inet4: inet4.unwrap_or(Ipv4Addr::UNSPECIFIED),
            inet6: inet6.unwrap_or(Ipv6Addr::UNSPECIFIED),
        }))
    }

    pub fn delegate(self, name: &str) -> Self {
        self.push(Record::Delegate(Target::Name(name.to_string())))
    }

    pub fn service(
        self,
        service: &str,
        protocol: &str,
        priority: u8,
        weight: u8,
        port: u16,
        target: Target,
    ) -> Self {
        self.push(Record::Service(ServiceRecord {
            service: service.to_string(),
            protocol: protocol.to_string(),
            priority,
            weight,
            port,
            target,
        }))
    }

    pub fn text(self, text: &str) -> Self {
        self.push(Record::Text(text.to_string()))
    }

    pub fn url(self, text: &str) -> Self {
        self.push(Record::Url(text.to_string()))
    }

    pub fn email(self, text: &str) -> Self {
        self.push(Record::Email(text.to_string()))
    }

    pub fn ds(self, key_tag: u16, algorithm: u8, digest_type: u8, digest: &[u8]) -> Self {
        self.push(Record::Ds(DsRecord {
            key_tag,
            algorithm,
            digest_type,
            digest: digest.to_vec(),
        }))
    }

    pub fn ssh(self, algorithm: u8, key_type: u8, fingerprint: &[u8]) -> Self {
        self.push(Record::Ssh(SshRecord {
            algorithm,
            key_type,
            fingerprint: fingerprint.to_vec(),
        }))
    }

    pub fn location(self) -> Self {
        self.push(Record::Location(LocationRecord {
            version: 0,
            size: 0x12,
            horiz_pre: 0x16,
            vert_pre: 0x13,
            latitude: 0x8935_2e3a,
            longitude: 0x7d1e_d30c,
            altitude: 0x0098_9680,
        }))
    }

    pub fn magnet(self, nid: &str, nin: &[u8]) -> Self {
        self.push(Record::Magnet(MagnetRecord {
            nid: nid.to_string(),
            nin: nin.to_vec(),
        }))
    }

    pub fn addr_string(self, currency: &str, address: &str) -> Self {
        self.push(Record::Addr(AddrRecord {
            currency: currency.to_string(),
            address: address.to_string(),
            ctype: 0,
            testnet: false,
            version: 0,
            hash: Vec::new(),
        }))
    }

    pub fn addr_hash(self, currency: &str, hash: &[u8]) -> Self {
        self.push(Record::Addr(AddrRecord {
            currency: currency.to_string(),
            address: String::new(),
            ctype: 3,
            testnet: false,
            version: 0,
            hash: hash.to_vec(),
        }))
    }

    pub fn build(self) -> Resource {
        Resource {
            version: 0,
            ttl: DEFAULT_TTL,
            records: self.records,
        }
    }
}

impl Default for ResourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Records of one type within a section, compared by code point so
/// hand-encoded rdata matches its well-known type.
pub fn of_type<'a>(records: &'a [Rr], rtype: RecordType) -> Vec<&'a Rr> {
    let code = u16::from(rtype);
    records
        .iter()
        .filter(|record| u16::from(record.record_type()) == code)
        .collect()
}

pub fn count_type(records: &[Rr], rtype: RecordType) -> usize {
    of_type(records, rtype).len()
}

/// The type code an RRSIG record covers, from its rdata wire form.
pub fn rrsig_covers(record: &Rr) -> u16 {
    match record.data() {
        Some(RData::Unknown { code: RecordType::Unknown(46), rdata }) => {
            let wire = rdata.anything();
            u16::from_be_bytes([wire[0], wire[1]])
        }
        other => panic!("not an RRSIG: {:?}", other),
    }
}

/// The key tag an RRSIG record was made with.
pub fn rrsig_key_tag(record: &Rr) -> u16 {
    match record.data() {
        Some(RData::Unknown { code: RecordType::Unknown(46), rdata }) => {
            let wire = rdata.anything();
            u16::from_be_bytes([wire[16], wire[17]])
        }
        other => panic!("not an RRSIG: {:?}", other),
    }
}
