use std::fmt;

/// Record discriminant as committed to the chain. The same constant
/// namespace doubles as the target discriminant for tags 1-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Inet4,
    Inet6,
    Onion,
    OnionNg,
    Name,
    Glue,
    Canonical,
    Delegate,
    Ns,
    Service,
    Url,
    Email,
    Text,
    Location,
    Magnet,
    Ds,
    Tls,
    Ssh,
    Pgp,
    Addr,
    Extra,
}

impl RecordKind {
    pub fn to_u8(self) -> u8 {
        match self {
            RecordKind::Inet4 => 1,
            RecordKind::Inet6 => 2,
            RecordKind::Onion => 3,
            RecordKind::OnionNg => 4,
            RecordKind::Name => 5,
            RecordKind::Glue => 6,
            RecordKind::Canonical => 7,
            RecordKind::Delegate => 8,
            RecordKind::Ns => 9,
            RecordKind::Service => 10,
            RecordKind::Url => 11,
            RecordKind::Email => 12,
            RecordKind::Text => 13,
            RecordKind::Location => 14,
            RecordKind::Magnet => 15,
            RecordKind::Ds => 16,
            RecordKind::Tls => 17,
            RecordKind::Ssh => 18,
            RecordKind::Pgp => 19,
            RecordKind::Addr => 20,
            RecordKind::Extra => 255,
        }
    }

    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            1 => Some(RecordKind::Inet4),
            2 => Some(RecordKind::Inet6),
            3 => Some(RecordKind::Onion),
            4 => Some(RecordKind::OnionNg),
            5 => Some(RecordKind::Name),
            6 => Some(RecordKind::Glue),
            7 => Some(RecordKind::Canonical),
            8 => Some(RecordKind::Delegate),
            9 => Some(RecordKind::Ns),
            10 => Some(RecordKind::Service),
            11 => Some(RecordKind::Url),
            12 => Some(RecordKind::Email),
            13 => Some(RecordKind::Text),
            14 => Some(RecordKind::Location),
            15 => Some(RecordKind::Magnet),
            16 => Some(RecordKind::Ds),
            17 => Some(RecordKind::Tls),
            18 => Some(RecordKind::Ssh),
            19 => Some(RecordKind::Pgp),
            20 => Some(RecordKind::Addr),
            255 => Some(RecordKind::Extra),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Inet4 => "INET4",
            RecordKind::Inet6 => "INET6",
            RecordKind::Onion => "ONION",
            RecordKind::OnionNg => "ONIONNG",
            RecordKind::Name => "NAME",
            RecordKind::Glue => "GLUE",
            RecordKind::Canonical => "CANONICAL",
            RecordKind::Delegate => "DELEGATE",
            RecordKind::Ns => "NS",
            RecordKind::Service => "SERVICE",
            RecordKind::Url => "URL",
            RecordKind::Email => "EMAIL",
            RecordKind::Text => "TEXT",
            RecordKind::Location => "LOCATION",
            RecordKind::Magnet => "MAGNET",
            RecordKind::Ds => "DS",
            RecordKind::Tls => "TLS",
            RecordKind::Ssh => "SSH",
            RecordKind::Pgp => "PGP",
            RecordKind::Addr => "ADDR",
            RecordKind::Extra => "EXTRA",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
