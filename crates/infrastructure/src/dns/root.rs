//! Synthesised root-zone responses: the chain itself serves as the
//! root, so SOA, NS, DNSKEY, DS and denial proofs are fabricated
//! rather than looked up.

use std::net::IpAddr;

use chrono::{Datelike, Timelike, Utc};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, NS, SOA};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use tracing::debug;

use super::composer::DnsComposer;
use super::dnssec::{sign_with_ksk, sign_with_zsk, NsecRdata};

pub(crate) const NSEC_TTL: u32 = 86400;
const SOA_TTL: u32 = 86400;
const ROOT_NS_TTL: u32 = 518400;

// NS, SOA, RRSIG, NSEC, DNSKEY: everything the root zone answers
// with. Window 0, bitmap length 7.
const ROOT_TYPE_MAP: [u8; 9] = [0x00, 0x07, 0x22, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80];

/// `YYYYMMDDHH` of the current UTC time as a packed decimal.
fn serial_now() -> u32 {
    let now = Utc::now();
    now.year() as u32 * 1_000_000 + now.month() * 10_000 + now.day() * 100 + now.hour()
}

pub(crate) fn soa_record() -> Record {
    Record::from_rdata(
        Name::root(),
        SOA_TTL,
        RData::SOA(SOA::new(
            Name::root(),
            Name::root(),
            serial_now(),
            1800,
            900,
            604_800,
            86400,
        )),
    )
}

fn ns_record() -> Record {
    Record::from_rdata(Name::root(), ROOT_NS_TTL, RData::NS(NS(Name::root())))
}

fn addr_record(addr: IpAddr) -> Record {
    match addr {
        IpAddr::V4(v4) => Record::from_rdata(Name::root(), ROOT_NS_TTL, RData::A(A(v4))),
        IpAddr::V6(v6) => Record::from_rdata(Name::root(), ROOT_NS_TTL, RData::AAAA(AAAA(v6))),
    }
}

fn nsec_record() -> Record {
    NsecRdata::with_type_map(ROOT_TYPE_MAP.to_vec()).to_record(Name::root(), NSEC_TTL)
}

impl DnsComposer {
    /// Answers a query against the empty root zone. `public_addr` is
    /// the daemon's own reachable address, advertised as the root
    /// server.
    pub fn root(&self, qtype: RecordType, public_addr: Option<IpAddr>) -> Message {
        debug!(qtype = ?qtype, "Composing root response");

        let signer = self.signer.as_ref();
        let mut msg = Self::response();
        msg.set_authoritative(true);

        let mut answer: Vec<Record> = Vec::new();
        let mut authority: Vec<Record> = Vec::new();
        let mut additional: Vec<Record> = Vec::new();

        match qtype {
            RecordType::ANY | RecordType::NS => {
                answer.push(ns_record());
                sign_with_zsk(signer, &mut answer, RecordType::NS);
                push_signed_addr(signer, public_addr, &mut additional);
            }
            RecordType::SOA => {
                answer.push(soa_record());
                sign_with_zsk(signer, &mut answer, RecordType::SOA);
                authority.push(ns_record());
                sign_with_zsk(signer, &mut authority, RecordType::NS);
                push_signed_addr(signer, public_addr, &mut additional);
            }
            RecordType::DNSKEY => {
                answer.push(signer.key_signing_key());
                answer.push(signer.zone_signing_key());
                sign_with_ksk(signer, &mut answer, RecordType::DNSKEY);
            }
            RecordType::DS => {
                answer.push(signer.delegation_signer());
                sign_with_zsk(signer, &mut answer, RecordType::DS);
            }
            _ => {
                // Denial listing every type the root does sign.
                authority.push(nsec_record());
                sign_with_zsk(signer, &mut authority, RecordType::NSEC);
                authority.push(soa_record());
                sign_with_zsk(signer, &mut authority, RecordType::SOA);
            }
        }

        msg.insert_answers(answer);
        msg.insert_name_servers(authority);
        msg.insert_additionals(additional);
        msg
    }

    /// Nonexistent name. The proof presents the root as an empty
    /// zone: the root NSEC twice over, one signature, then the SOA.
    /// Strict validators accept this shape.
    pub fn nx(&self) -> Message {
        debug!("Composing NXDOMAIN proof");

        let signer = self.signer.as_ref();
        let mut msg = Self::response();
        msg.set_response_code(ResponseCode::NXDomain);
        msg.set_authoritative(true);

        let mut authority: Vec<Record> = Vec::new();
        authority.push(nsec_record());
        authority.push(nsec_record());
        sign_with_zsk(signer, &mut authority, RecordType::NSEC);
        authority.push(soa_record());
        sign_with_zsk(signer, &mut authority, RecordType::SOA);

        msg.insert_name_servers(authority);
        msg
    }

    pub fn servfail(&self) -> Message {
        let mut msg = Self::response();
        msg.set_response_code(ResponseCode::ServFail);
        msg
    }

    pub fn notimp(&self) -> Message {
        let mut msg = Self::response();
        msg.set_response_code(ResponseCode::NotImp);
        msg
    }
}

fn push_signed_addr(
    signer: &dyn super::dnssec::ZoneSigner,
    public_addr: Option<IpAddr>,
    additional: &mut Vec<Record>,
) {
    let Some(addr) = public_addr else {
        return;
    };
    additional.push(addr_record(addr));
    match addr {
        IpAddr::V4(_) => sign_with_zsk(signer, additional, RecordType::A),
        IpAddr::V6(_) => sign_with_zsk(signer, additional, RecordType::AAAA),
    }
}
