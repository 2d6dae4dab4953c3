mod dnskey;
mod ds;
mod nsec;
mod rrsig;

pub use dnskey::DnskeyRdata;
pub use ds::DsRdata;
pub use nsec::NsecRdata;
pub use rrsig::RrsigRdata;
