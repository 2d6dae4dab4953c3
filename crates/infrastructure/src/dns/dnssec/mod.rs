//! DNSSEC signing port. Key material and signature generation live
//! outside this crate; the engine only decides *what* gets signed and
//! appends the RRSIGs the signer hands back.

pub mod types;

use hickory_proto::rr::{Record, RecordType};

pub use types::{DnskeyRdata, DsRdata, NsecRdata, RrsigRdata};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    KeySigning,
    ZoneSigning,
}

/// Access to the zone's key material. The root zone has exactly one
/// KSK/ZSK pair; its DS record is what the chain's trust anchor
/// commits to.
pub trait ZoneSigner: Send + Sync {
    /// DNSKEY RR for the key-signing key, owner `.`.
    fn key_signing_key(&self) -> Record;

    /// DNSKEY RR for the zone-signing key, owner `.`.
    fn zone_signing_key(&self) -> Record;

    /// DS RR for the key-signing key, owner `.`.
    fn delegation_signer(&self) -> Record;

    /// Signs one rrset (same owner, same type). Returns `None` when
    /// the signer cannot produce a signature; the rrset then goes out
    /// unsigned rather than failing the response.
    fn rrsig(&self, rrset: &[Record], covered: RecordType, role: KeyRole) -> Option<Record>;
}

/// Collects the rrset of `covered` type from `section` and appends one
/// RRSIG over it. Empty rrsets are left alone. Types are compared by
/// code point: records built from opaque rdata report `Unknown(code)`
/// and must still match their well-known type.
fn sign_section(
    signer: &dyn ZoneSigner,
    section: &mut Vec<Record>,
    covered: RecordType,
    role: KeyRole,
) {
    let covered_code = u16::from(covered);
    let rrset: Vec<Record> = section
        .iter()
        .filter(|record| u16::from(record.record_type()) == covered_code)
        .cloned()
        .collect();

    if rrset.is_empty() {
        return;
    }

    if let Some(rrsig) = signer.rrsig(&rrset, covered, role) {
        section.push(rrsig);
    }
}

pub fn sign_with_zsk(signer: &dyn ZoneSigner, section: &mut Vec<Record>, covered: RecordType) {
    sign_section(signer, section, covered, KeyRole::ZoneSigning);
}

pub fn sign_with_ksk(signer: &dyn ZoneSigner, section: &mut Vec<Record>, covered: RecordType) {
    sign_section(signer, section, covered, KeyRole::KeySigning);
}
