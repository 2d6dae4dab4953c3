//! Per-kind readers for the version 0 resource serialisation.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::errors::ResourceError;
use crate::record::{
    AddrRecord, DsRecord, ExtraRecord, LocationRecord, MagnetRecord, Record, RecordKind,
    ServiceRecord, SshRecord, TlsRecord,
};
use crate::resource::{Resource, DEFAULT_TTL, MAX_RECORDS};
use crate::target::Target;
use crate::wire::{ip, name::read_name, reader::Reader};

const MAX_STRING: usize = 255;
const MAX_LABEL_STRING: usize = 32;
const MAX_DIGEST: usize = 64;

pub fn decode_resource(blob: &[u8]) -> Result<Resource, ResourceError> {
    let mut r = Reader::new(blob);

    let version = r
        .read_u8()
        .map_err(|_| ResourceError::malformed("empty resource blob"))?;
    if version != 0 {
        return Err(ResourceError::malformed(format!(
            "unsupported resource version {}",
            version
        )));
    }

    let mut records = Vec::new();
    while !r.is_empty() {
        let code = r.read_u8()?;
        let kind = RecordKind::from_u8(code)
            .ok_or_else(|| ResourceError::malformed(format!("unknown record type {}", code)))?;
        if records.len() >= MAX_RECORDS {
            return Err(ResourceError::malformed("too many records"));
        }
        records.push(read_record(&mut r, kind)?);
    }

    Ok(Resource {
        version,
        ttl: DEFAULT_TTL,
        records,
    })
}

fn read_record(r: &mut Reader<'_>, kind: RecordKind) -> Result<Record, ResourceError> {
    let record = match kind {
        RecordKind::Inet4 => Record::Inet4(read_target(r)?),
        RecordKind::Inet6 => Record::Inet6(read_target(r)?),
        RecordKind::Onion => Record::Onion(read_target(r)?),
        RecordKind::OnionNg => Record::OnionNg(read_target(r)?),
        RecordKind::Name => Record::Name(read_target(r)?),
        RecordKind::Glue => Record::Glue(read_target(r)?),
        RecordKind::Canonical => Record::Canonical(read_target(r)?),
        RecordKind::Delegate => Record::Delegate(read_target(r)?),
        RecordKind::Ns => Record::Ns(read_target(r)?),
        RecordKind::Service => Record::Service(ServiceRecord {
            service: read_string(r, MAX_LABEL_STRING)?,
            protocol: read_string(r, MAX_LABEL_STRING)?,
            priority: r.read_u8()?,
            weight: r.read_u8()?,
            port: r.read_u16be()?,
            target: read_target(r)?,
        }),
        RecordKind::Url => Record::Url(read_string(r, MAX_STRING)?),
        RecordKind::Email => Record::Email(read_string(r, MAX_STRING)?),
        RecordKind::Text => Record::Text(read_string(r, MAX_STRING)?),
        RecordKind::Location => Record::Location(LocationRecord {
            version: r.read_u8()?,
            size: r.read_u8()?,
            horiz_pre: r.read_u8()?,
            vert_pre: r.read_u8()?,
            latitude: r.read_u32be()?,
            longitude: r.read_u32be()?,
            altitude: r.read_u32be()?,
        }),
        RecordKind::Magnet => Record::Magnet(MagnetRecord {
            nid: read_string(r, MAX_LABEL_STRING)?,
            nin: read_sized_bytes(r, MAX_DIGEST)?,
        }),
        RecordKind::Ds => Record::Ds(DsRecord {
            key_tag: r.read_u16be()?,
            algorithm: r.read_u8()?,
            digest_type: r.read_u8()?,
            digest: read_sized_bytes(r, MAX_DIGEST)?,
        }),
        RecordKind::Tls => Record::Tls(TlsRecord {
            protocol: read_string(r, MAX_LABEL_STRING)?,
            port: r.read_u16be()?,
            usage: r.read_u8()?,
            selector: r.read_u8()?,
            matching_type: r.read_u8()?,
            certificate: read_sized_bytes(r, MAX_DIGEST)?,
        }),
        RecordKind::Ssh => Record::Ssh(read_ssh(r)?),
        RecordKind::Pgp => Record::Pgp(read_ssh(r)?),
        RecordKind::Addr => Record::Addr(AddrRecord {
            currency: read_string(r, MAX_LABEL_STRING)?,
            address: read_string(r, MAX_STRING)?,
            ctype: r.read_u8()?,
            testnet: r.read_u8()? != 0,
            version: r.read_u8()?,
            hash: read_sized_bytes(r, MAX_DIGEST)?,
        }),
        RecordKind::Extra => Record::Extra(ExtraRecord {
            rtype: r.read_u8()?,
            data: read_sized_bytes(r, MAX_STRING)?,
        }),
    };

    Ok(record)
}

fn read_ssh(r: &mut Reader<'_>) -> Result<SshRecord, ResourceError> {
    Ok(SshRecord {
        algorithm: r.read_u8()?,
        key_type: r.read_u8()?,
        fingerprint: read_sized_bytes(r, MAX_DIGEST)?,
    })
}

/// Targets share the record tag namespace; only tags 1-6 are valid
/// here.
fn read_target(r: &mut Reader<'_>) -> Result<Target, ResourceError> {
    let tag = r.read_u8()?;
    match RecordKind::from_u8(tag) {
        Some(RecordKind::Inet4) => Ok(Target::Inet4(read_inet4(r)?)),
        Some(RecordKind::Inet6) => Ok(Target::Inet6(Ipv6Addr::from(ip::read_compressed(r)?))),
        Some(RecordKind::Onion) => Ok(Target::Onion(read_onion(r)?)),
        Some(RecordKind::OnionNg) => Ok(Target::OnionNg(read_onion(r)?)),
        Some(RecordKind::Name) => Ok(Target::Name(read_name(r)?)),
        Some(RecordKind::Glue) => Ok(Target::Glue {
            name: read_name(r)?,
            inet4: read_inet4(r)?,
            inet6: read_inet6(r)?,
        }),
        _ => Err(ResourceError::malformed(format!(
            "unknown target type {}",
            tag
        ))),
    }
}

fn read_inet4(r: &mut Reader<'_>) -> Result<Ipv4Addr, ResourceError> {
    let bytes = r.read_bytes(4)?;
    Ok(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]))
}

fn read_inet6(r: &mut Reader<'_>) -> Result<Ipv6Addr, ResourceError> {
    let mut octets = [0u8; 16];
    octets.copy_from_slice(r.read_bytes(16)?);
    Ok(Ipv6Addr::from(octets))
}

fn read_onion(r: &mut Reader<'_>) -> Result<[u8; 33], ResourceError> {
    let mut key = [0u8; 33];
    key.copy_from_slice(r.read_bytes(33)?);
    Ok(key)
}

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte) || byte == 0x09 || byte == 0x0a || byte == 0x0d
}

/// Length-prefixed string limited to printable ASCII plus tab, LF and
/// CR. DEL and everything else below 0x20 fail the decode.
fn read_string(r: &mut Reader<'_>, limit: usize) -> Result<String, ResourceError> {
    let size = r.read_u8()? as usize;
    if size > limit {
        return Err(ResourceError::malformed("string exceeds field limit"));
    }
    let chunk = r.read_bytes(size)?;
    let mut out = String::with_capacity(size);
    for &byte in chunk {
        if !is_printable(byte) {
            return Err(ResourceError::malformed("non-printable byte in string"));
        }
        out.push(byte as char);
    }
    Ok(out)
}

fn read_sized_bytes(r: &mut Reader<'_>, limit: usize) -> Result<Vec<u8>, ResourceError> {
    let size = r.read_u8()? as usize;
    if size > limit {
        return Err(ResourceError::malformed("payload exceeds field limit"));
    }
    Ok(r.read_bytes(size)?.to_vec())
}
