//! Wire builders for record types hickory-proto has no rdata for.
//! The payloads are small fixed layouts, assembled by hand and carried
//! as `RData::Unknown`, which the encoder emits verbatim (RFC 3597).

use ferrous_hns_domain::LocationRecord;
use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{Name, RData, RecordType};

pub const RP_CODE: u16 = 17;
pub const LOC_CODE: u16 = 29;
pub const DNAME_CODE: u16 = 39;
pub const URI_CODE: u16 = 256;

/// Uncompressed wire form of a name. DNAME and RP rdata must not use
/// compression pointers.
pub fn name_to_wire(name: &Name) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 1);
    for label in name.iter() {
        out.push(label.len() as u8);
        out.extend_from_slice(label);
    }
    out.push(0);
    out
}

fn unknown(code: u16, wire: Vec<u8>) -> RData {
    RData::Unknown {
        code: RecordType::Unknown(code),
        rdata: NULL::with(wire),
    }
}

pub fn dname(target: &Name) -> RData {
    unknown(DNAME_CODE, name_to_wire(target))
}

pub fn loc(rec: &LocationRecord) -> RData {
    let mut wire = Vec::with_capacity(16);
    wire.push(rec.version);
    wire.push(rec.size);
    wire.push(rec.horiz_pre);
    wire.push(rec.vert_pre);
    wire.extend_from_slice(&rec.latitude.to_be_bytes());
    wire.extend_from_slice(&rec.longitude.to_be_bytes());
    wire.extend_from_slice(&rec.altitude.to_be_bytes());
    unknown(LOC_CODE, wire)
}

/// URI rdata per RFC 7553: priority, weight, then the bare target
/// string with no length prefix.
pub fn uri(data: &str) -> RData {
    let mut wire = Vec::with_capacity(4 + data.len());
    wire.extend_from_slice(&0u16.to_be_bytes());
    wire.extend_from_slice(&0u16.to_be_bytes());
    wire.extend_from_slice(data.as_bytes());
    unknown(URI_CODE, wire)
}

/// RP rdata: mbox name followed by a txt name of `.`. The mbox is a
/// mailbox-shaped FQDN string (it may contain `@`), encoded label by
/// label rather than through the name parser.
pub fn rp(mbox: &str) -> RData {
    let mut wire = fqdn_str_to_wire(mbox);
    wire.push(0);
    unknown(RP_CODE, wire)
}

fn fqdn_str_to_wire(fqdn: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(fqdn.len() + 1);
    let rest = fqdn.strip_suffix('.').unwrap_or(fqdn);
    if !rest.is_empty() {
        for label in rest.split('.') {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);
    out
}
