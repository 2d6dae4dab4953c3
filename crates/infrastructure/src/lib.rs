//! DNS projection engine for Handshake name resources: turns a decoded
//! [`ferrous_hns_domain::Resource`] into authoritative hickory-proto
//! messages, invoking DNSSEC signing through the [`dns::dnssec::ZoneSigner`]
//! port.

pub mod dns;

pub use dns::composer::DnsComposer;
pub use dns::dnssec::{sign_with_ksk, sign_with_zsk, KeyRole, ZoneSigner};
