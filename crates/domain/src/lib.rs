//! Typed model and codec for Handshake name resources: the versioned
//! record blob committed to the chain, decoded into a sum-type record
//! set ready for DNS projection. Pure data, no I/O.

pub mod base32;
pub mod errors;
pub mod name;
pub mod pointer;
pub mod record;
pub mod resource;
pub mod target;
pub mod wire;

pub use errors::ResourceError;
pub use pointer::{ip_to_b32, is_pointer, pointer_label, pointer_to_ip};
pub use record::{
    AddrRecord, DsRecord, ExtraRecord, LocationRecord, MagnetRecord, Record, RecordKind,
    ServiceRecord, SshRecord, TlsRecord,
};
pub use resource::{Resource, DEFAULT_TTL, MAX_RECORDS};
pub use target::Target;
