#![allow(dead_code)]
use ferrous_hns_domain::wire::ip;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Uncompressed wire form of a presentation-format FQDN.
pub fn name_wire(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let rest = name.strip_suffix('.').expect("fqdn");
    if !rest.is_empty() {
        for label in rest.split('.') {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);
    out
}

/// Builds version 0 resource blobs record by record.
pub struct BlobBuilder {
    bytes: Vec<u8>,
}

impl BlobBuilder {
    pub fn new() -> Self {
        Self { bytes: vec![0x00] }
    }

    pub fn with_version(version: u8) -> Self {
        Self {
            bytes: vec![version],
        }
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    fn record(mut self, kind: u8) -> Self {
        self.bytes.push(kind);
        self
    }

    fn name_target(mut self, name: &str) -> Self {
        self.bytes.push(5);
        self.bytes.extend_from_slice(&name_wire(name));
        self
    }

    fn glue_target(mut self, name: &str, inet4: Ipv4Addr, inet6: Ipv6Addr) -> Self {
        self.bytes.push(6);
        self.bytes.extend_from_slice(&name_wire(name));
        self.bytes.extend_from_slice(&inet4.octets());
        self.bytes.extend_from_slice(&inet6.octets());
        self
    }

    fn inet4_target(mut self, addr: Ipv4Addr) -> Self {
        self.bytes.push(1);
        self.bytes.extend_from_slice(&addr.octets());
        self
    }

    fn inet6_target(mut self, addr: Ipv6Addr) -> Self {
        self.bytes.push(2);
        self.bytes.extend_from_slice(&ip::compress(&addr.octets()));
        self
    }

    pub fn inet4_record(self, addr: Ipv4Addr) -> Self {
        self.record(1).inet4_target(addr)
    }

    pub fn inet6_record(self, addr: Ipv6Addr) -> Self {
        self.record(2).inet6_target(addr)
    }

    pub fn canonical_record(self, name: &str) -> Self {
        self.record(7).name_target(name)
    }

    pub fn delegate_record(self, name: &str) -> Self {
        self.record(8).name_target(name)
    }

    pub fn ns_record(self, name: &str) -> Self {
        self.record(9).name_target(name)
    }

    pub fn ns_glue_record(self, name: &str, inet4: Ipv4Addr, inet6: Ipv6Addr) -> Self {
        self.record(9).glue_target(name, inet4, inet6)
    }

    pub fn ns_synth4_record(self, addr: Ipv4Addr) -> Self {
        self.record(9).inet4_target(addr)
    }

    pub fn ns_synth6_record(self, addr: Ipv6Addr) -> Self {
        self.record(9).inet6_target(addr)
    }

    pub fn service_record(
        self,
        service: &str,
        protocol: &str,
        priority: u8,
        weight: u8,
        port: u16,
        target_name: &str,
    ) -> Self {
        let mut b = self.record(10);
        b.bytes.push(service.len() as u8);
        b.bytes.extend_from_slice(service.as_bytes());
        b.bytes.push(protocol.len() as u8);
        b.bytes.extend_from_slice(protocol.as_bytes());
        b.bytes.push(priority);
        b.bytes.push(weight);
        b.bytes.extend_from_slice(&port.to_be_bytes());
        b.name_target(target_name)
    }

    pub fn url_record(self, text: &str) -> Self {
        self.string_record(11, text)
    }

    pub fn email_record(self, text: &str) -> Self {
        self.string_record(12, text)
    }

    pub fn text_record(self, text: &str) -> Self {
        self.string_record(13, text)
    }

    fn string_record(mut self, kind: u8, text: &str) -> Self {
        self.bytes.push(kind);
        self.bytes.push(text.len() as u8);
        self.bytes.extend_from_slice(text.as_bytes());
        self
    }

    pub fn ds_record(self, key_tag: u16, algorithm: u8, digest_type: u8, digest: &[u8]) -> Self {
        let mut b = self.record(16);
        b.bytes.extend_from_slice(&key_tag.to_be_bytes());
        b.bytes.push(algorithm);
        b.bytes.push(digest_type);
        b.bytes.push(digest.len() as u8);
        b.bytes.extend_from_slice(digest);
        b
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for BlobBuilder {
    fn default() -> Self {
        Self::new()
    }
}
