pub mod composer;
pub mod dnssec;
pub mod project;
pub mod rdata;
pub mod root;
pub mod target;

pub use composer::DnsComposer;
