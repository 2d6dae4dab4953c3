//! Target-to-name resolution: where a record points, as an on-wire
//! DNS name. Address-bearing targets have no name of their own and are
//! published under a synthetic base32 label instead.

use ferrous_hns_domain::{name, pointer, Target};
use hickory_proto::rr::Name;

/// Parses a presentation-format FQDN without IDNA processing.
pub fn parse_fqdn(s: &str) -> Option<Name> {
    if !name::is_fqdn(s) {
        return None;
    }
    Name::from_ascii(s).ok()
}

/// Resolves a target against the queried name.
///
/// Named targets yield their stored FQDN. Inet targets yield
/// `_<b32>.<tld>.` under the query's top-level label, so the resolver
/// can chase the address without a separate lookup. Onion targets have
/// no DNS representation.
pub fn target_to_name(target: &Target, query_name: &str) -> Option<Name> {
    if let Some(fqdn) = target.fqdn() {
        return parse_fqdn(fqdn);
    }

    if let Some(addr) = target.inet_addr() {
        let tld = name::last_label(query_name)?;
        return parse_fqdn(&format!("_{}.{}.", pointer::ip_to_b32(addr), tld));
    }

    None
}

/// The owner name a synthetic name server is published under; the
/// `_synth` pseudo-TLD is resolved directly by the daemon.
pub fn synth_name(target: &Target) -> Option<Name> {
    let addr = target.inet_addr()?;
    parse_fqdn(&format!("_{}._synth.", pointer::ip_to_b32(addr)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_named_target_passes_through() {
        let target = Target::Name("ns1.example.".to_string());
        let name = target_to_name(&target, "example.").unwrap();
        assert_eq!(name.to_ascii(), "ns1.example.");
    }

    #[test]
    fn test_inet_target_synthesizes_under_tld() {
        let target = Target::Inet4(Ipv4Addr::new(192, 0, 2, 53));
        let name = target_to_name(&target, "sub.example.").unwrap();
        let ascii = name.to_ascii();
        assert!(ascii.starts_with('_'));
        assert!(ascii.ends_with(".example."));
    }

    #[test]
    fn test_inet_target_needs_labels() {
        let target = Target::Inet6(Ipv6Addr::LOCALHOST);
        assert!(target_to_name(&target, ".").is_none());
    }

    #[test]
    fn test_onion_target_has_no_name() {
        assert!(target_to_name(&Target::Onion([0u8; 33]), "example.").is_none());
        assert!(synth_name(&Target::Onion([0u8; 33])).is_none());
    }
}
