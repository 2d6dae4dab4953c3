//! Synthetic name-server labels: an IP address folded into a single
//! `_<base32hex>` DNS label. IPv4 addresses travel as IPv4-mapped
//! IPv6 so one encoding covers both families; the mapped prefix is
//! collapsed back to V4 on the way out.

use std::net::IpAddr;

use crate::base32;
use crate::name::first_label;
use crate::wire::ip;

/// `_` plus at most 28 characters of base32hex.
pub const MAX_POINTER_LABEL: usize = 29;

pub fn ip_to_b32(addr: IpAddr) -> String {
    let octets = match addr {
        IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
        IpAddr::V6(v6) => v6.octets(),
    };
    base32::encode(&ip::compress(&octets))
}

/// The label an address-bearing name server is published under.
pub fn pointer_label(addr: IpAddr) -> String {
    format!("_{}", ip_to_b32(addr))
}

fn label_to_ip(label: &str) -> Option<IpAddr> {
    if label.len() < 2 || label.len() > MAX_POINTER_LABEL || !label.starts_with('_') {
        return None;
    }

    let data = base32::decode(&label[1..])?;
    if data.is_empty() || data.len() > 17 {
        return None;
    }

    let expanded = ip::decompress(&data).ok()?;
    let v6 = std::net::Ipv6Addr::from(expanded);
    match v6.to_ipv4_mapped() {
        Some(v4) => Some(IpAddr::V4(v4)),
        None => Some(IpAddr::V6(v6)),
    }
}

/// Parses the first label of `name` as a synthetic pointer.
pub fn pointer_to_ip(name: &str) -> Option<IpAddr> {
    label_to_ip(first_label(name)?)
}

pub fn is_pointer(name: &str) -> bool {
    pointer_to_ip(name).is_some()
}
