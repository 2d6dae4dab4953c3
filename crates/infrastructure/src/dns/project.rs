//! Record projectors: each walks the resource once and pushes the RRs
//! a single DNS type derives from it. Records whose target cannot be
//! represented by the requested type are skipped, never an error.

use ferrous_hns_domain::{Record, Resource, Target};
use hickory_proto::rr::rdata::sshfp::{Algorithm as SshfpAlgorithm, FingerprintType};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, SRV, SSHFP, TXT};
use hickory_proto::rr::{Name, RData, Record as Rr, RecordType};
use std::net::IpAddr;

use super::dnssec::DsRdata;
use super::rdata;
use super::target::{parse_fqdn, synth_name, target_to_name};

pub fn a(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        if let Record::Inet4(Target::Inet4(addr)) = record {
            out.push(Rr::from_rdata(owner.clone(), resource.ttl, RData::A(A(*addr))));
        }
    }
}

pub fn aaaa(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        if let Record::Inet6(Target::Inet6(addr)) = record {
            out.push(Rr::from_rdata(
                owner.clone(),
                resource.ttl,
                RData::AAAA(AAAA(*addr)),
            ));
        }
    }
}

pub fn cname(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        let Record::Canonical(target) = record else {
            continue;
        };
        if !target.is_named() {
            continue;
        }
        let Some(alias) = target.fqdn().and_then(parse_fqdn) else {
            continue;
        };
        out.push(Rr::from_rdata(
            owner.clone(),
            resource.ttl,
            RData::CNAME(CNAME(alias)),
        ));
    }
}

pub fn dname(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        let Record::Delegate(target) = record else {
            continue;
        };
        if !target.is_named() {
            continue;
        }
        let Some(delegate) = target.fqdn().and_then(parse_fqdn) else {
            continue;
        };
        out.push(Rr::from_rdata(
            owner.clone(),
            resource.ttl,
            rdata::dname(&delegate),
        ));
    }
}

/// NS RRs for every name-server record. Plain and glued servers carry
/// their stored name; address-only servers are published under the
/// `_synth` pseudo-TLD.
pub fn ns(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        let Record::Ns(target) = record else {
            continue;
        };

        let nsname = match target {
            Target::Name(_) | Target::Glue { .. } => target.fqdn().and_then(parse_fqdn),
            Target::Inet4(_) | Target::Inet6(_) => synth_name(target),
            _ => None,
        };

        let Some(nsname) = nsname else {
            continue;
        };
        out.push(Rr::from_rdata(
            owner.clone(),
            resource.ttl,
            RData::NS(NS(nsname)),
        ));
    }
}

/// Address glue for synthetic name servers, owned by the pointer name
/// under the queried TLD.
pub fn ns_addrs(resource: &Resource, query_name: &str, out: &mut Vec<Rr>) {
    for record in &resource.records {
        let Record::Ns(target) = record else {
            continue;
        };
        if !target.is_inet() {
            continue;
        }
        push_addr(target, query_name, resource.ttl, out);
    }
}

pub fn mx(resource: &Resource, owner: &Name, query_name: &str, out: &mut Vec<Rr>) {
    for record in &resource.records {
        let Record::Service(service) = record else {
            continue;
        };
        if !service.is_smtp() {
            continue;
        }
        let Some(exchange) = target_to_name(&service.target, query_name) else {
            continue;
        };
        out.push(Rr::from_rdata(
            owner.clone(),
            resource.ttl,
            RData::MX(MX::new(service.priority as u16, exchange)),
        ));
    }
}

pub fn mx_addrs(resource: &Resource, query_name: &str, out: &mut Vec<Rr>) {
    srv_addrs(resource, query_name, "smtp.", "tcp.", out);
}

pub fn srv(
    resource: &Resource,
    owner: &Name,
    query_name: &str,
    service_name: &str,
    protocol: &str,
    out: &mut Vec<Rr>,
) {
    for record in &resource.records {
        let Record::Service(service) = record else {
            continue;
        };
        if !service.matches(service_name, protocol) {
            continue;
        }
        let Some(host) = target_to_name(&service.target, query_name) else {
            continue;
        };
        out.push(Rr::from_rdata(
            owner.clone(),
            resource.ttl,
            RData::SRV(SRV::new(
                service.priority as u16,
                service.weight as u16,
                service.port,
                host,
            )),
        ));
    }
}

/// Address glue for services that point straight at an address.
pub fn srv_addrs(
    resource: &Resource,
    query_name: &str,
    service_name: &str,
    protocol: &str,
    out: &mut Vec<Rr>,
) {
    for record in &resource.records {
        let Record::Service(service) = record else {
            continue;
        };
        if !service.matches(service_name, protocol) {
            continue;
        }
        if !service.target.is_inet() {
            continue;
        }
        push_addr(&service.target, query_name, resource.ttl, out);
    }
}

pub fn txt(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        if let Record::Text(text) = record {
            out.push(Rr::from_rdata(
                owner.clone(),
                resource.ttl,
                RData::TXT(TXT::new(vec![text.clone()])),
            ));
        }
    }
}

pub fn loc(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        if let Record::Location(location) = record {
            out.push(Rr::from_rdata(
                owner.clone(),
                resource.ttl,
                rdata::loc(location),
            ));
        }
    }
}

pub fn ds(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        if let Record::Ds(ds) = record {
            let payload = DsRdata {
                key_tag: ds.key_tag,
                algorithm: ds.algorithm,
                digest_type: ds.digest_type,
                digest: ds.digest.clone(),
            };
            out.push(payload.to_record(owner.clone(), resource.ttl));
        }
    }
}

pub fn sshfp(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        if let Record::Ssh(ssh) = record {
            out.push(Rr::from_rdata(
                owner.clone(),
                resource.ttl,
                RData::SSHFP(SSHFP::new(
                    SshfpAlgorithm::from(ssh.algorithm),
                    FingerprintType::from(ssh.key_type),
                    ssh.fingerprint.clone(),
                )),
            ));
        }
    }
}

/// URI RRs from three sources: URL records verbatim, magnet links
/// rebuilt from MAGNET records, and ADDR records rendered as
/// `<currency>:<address>`. Anything that would overflow the 255-byte
/// character string is dropped.
pub fn uri(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        if let Record::Url(text) = record {
            push_uri(owner, resource.ttl, text, out);
        }
    }

    for record in &resource.records {
        let Record::Magnet(magnet) = record else {
            continue;
        };
        let nid = first_label_lower(&magnet.nid);
        let data = format!("magnet:?xt=urn:{}:{}", nid, hex(&magnet.nin));
        if data.len() > 254 {
            continue;
        }
        push_uri(owner, resource.ttl, &data, out);
    }

    for record in &resource.records {
        let Record::Addr(addr) = record else {
            continue;
        };
        if addr.ctype != 0 && addr.ctype != 3 {
            continue;
        }
        let currency = first_label_lower(&addr.currency);
        let address = if addr.ctype == 0 {
            addr.address.clone()
        } else {
            format!("0x{}", hex(&addr.hash))
        };
        let data = format!("{}:{}", currency, address);
        if data.len() > 254 {
            continue;
        }
        push_uri(owner, resource.ttl, &data, out);
    }
}

pub fn rp(resource: &Resource, owner: &Name, out: &mut Vec<Rr>) {
    for record in &resource.records {
        let Record::Email(email) = record else {
            continue;
        };
        if email.len() > 63 {
            continue;
        }
        let mbox = format!("{}.", email);
        if !ferrous_hns_domain::name::verify_name(&mbox) {
            continue;
        }
        out.push(Rr::from_rdata(owner.clone(), resource.ttl, rdata::rp(&mbox)));
    }
}

/// Additional-section glue: A/AAAA at the stored server name, for
/// every glue-target record relevant to the covered type.
pub fn glue(resource: &Resource, covered: RecordType, out: &mut Vec<Rr>) {
    for record in &resource.records {
        let target = match record {
            Record::Canonical(target) if covered == RecordType::CNAME => target,
            Record::Delegate(target) if covered == RecordType::Unknown(rdata::DNAME_CODE) => target,
            Record::Ns(target) if covered == RecordType::NS => target,
            Record::Service(service)
                if covered == RecordType::SRV
                    || (covered == RecordType::MX && service.is_smtp()) =>
            {
                &service.target
            }
            _ => continue,
        };

        let Target::Glue { name, .. } = target else {
            continue;
        };
        let Some(owner) = parse_fqdn(name) else {
            continue;
        };

        if let Some(inet4) = target.glue_inet4() {
            out.push(Rr::from_rdata(
                owner.clone(),
                resource.ttl,
                RData::A(A(inet4)),
            ));
        }
        if let Some(inet6) = target.glue_inet6() {
            out.push(Rr::from_rdata(
                owner.clone(),
                resource.ttl,
                RData::AAAA(AAAA(inet6)),
            ));
        }
    }
}

fn push_addr(target: &Target, query_name: &str, ttl: u32, out: &mut Vec<Rr>) {
    let Some(owner) = target_to_name(target, query_name) else {
        return;
    };
    match target.inet_addr() {
        Some(IpAddr::V4(addr)) => out.push(Rr::from_rdata(owner, ttl, RData::A(A(addr)))),
        Some(IpAddr::V6(addr)) => out.push(Rr::from_rdata(owner, ttl, RData::AAAA(AAAA(addr)))),
        None => {}
    }
}

fn push_uri(owner: &Name, ttl: u32, data: &str, out: &mut Vec<Rr>) {
    out.push(Rr::from_rdata(owner.clone(), ttl, rdata::uri(data)));
}

fn first_label_lower(s: &str) -> String {
    s.split('.').next().unwrap_or_default().to_ascii_lowercase()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}
