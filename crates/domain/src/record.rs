mod data;
mod kind;

pub use data::{
    AddrRecord, DsRecord, ExtraRecord, LocationRecord, MagnetRecord, ServiceRecord, SshRecord,
    TlsRecord,
};
pub use kind::RecordKind;

use crate::target::Target;

/// One decoded resource record. Tags 1-9 are host records carrying a
/// [`Target`]; the rest have dedicated payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Inet4(Target),
    Inet6(Target),
    Onion(Target),
    OnionNg(Target),
    Name(Target),
    Glue(Target),
    Canonical(Target),
    Delegate(Target),
    Ns(Target),
    Service(ServiceRecord),
    Url(String),
    Email(String),
    Text(String),
    Location(LocationRecord),
    Magnet(MagnetRecord),
    Ds(DsRecord),
    Tls(TlsRecord),
    Ssh(SshRecord),
    Pgp(SshRecord),
    Addr(AddrRecord),
    Extra(ExtraRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Inet4(_) => RecordKind::Inet4,
            Record::Inet6(_) => RecordKind::Inet6,
            Record::Onion(_) => RecordKind::Onion,
            Record::OnionNg(_) => RecordKind::OnionNg,
            Record::Name(_) => RecordKind::Name,
            Record::Glue(_) => RecordKind::Glue,
            Record::Canonical(_) => RecordKind::Canonical,
            Record::Delegate(_) => RecordKind::Delegate,
            Record::Ns(_) => RecordKind::Ns,
            Record::Service(_) => RecordKind::Service,
            Record::Url(_) => RecordKind::Url,
            Record::Email(_) => RecordKind::Email,
            Record::Text(_) => RecordKind::Text,
            Record::Location(_) => RecordKind::Location,
            Record::Magnet(_) => RecordKind::Magnet,
            Record::Ds(_) => RecordKind::Ds,
            Record::Tls(_) => RecordKind::Tls,
            Record::Ssh(_) => RecordKind::Ssh,
            Record::Pgp(_) => RecordKind::Pgp,
            Record::Addr(_) => RecordKind::Addr,
            Record::Extra(_) => RecordKind::Extra,
        }
    }

    /// The target of host and service records.
    pub fn target(&self) -> Option<&Target> {
        match self {
            Record::Inet4(target)
            | Record::Inet6(target)
            | Record::Onion(target)
            | Record::OnionNg(target)
            | Record::Name(target)
            | Record::Glue(target)
            | Record::Canonical(target)
            | Record::Delegate(target)
            | Record::Ns(target) => Some(target),
            Record::Service(service) => Some(&service.target),
            _ => None,
        }
    }
}
