//! Response composition: referral vs apex vs fallback, section
//! population, the AA flag, and the signing order for each path.

use std::sync::Arc;

use ferrous_hns_domain::{name, RecordKind, Resource, ResourceError};
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::{Name, Record, RecordType};
use tracing::debug;

use super::dnssec::{sign_with_zsk, NsecRdata, ZoneSigner};
use super::project;
use super::rdata;
use super::root;
use super::target::parse_fqdn;

pub struct DnsComposer {
    pub(crate) signer: Arc<dyn ZoneSigner>,
}

impl DnsComposer {
    pub fn new(signer: Arc<dyn ZoneSigner>) -> Self {
        Self { signer }
    }

    pub(crate) fn response() -> Message {
        let mut msg = Message::new();
        msg.set_message_type(MessageType::Response);
        msg.set_op_code(OpCode::Query);
        msg
    }

    /// Projects a resource onto the response for `query_name`/`qtype`.
    ///
    /// Multi-label names yield referrals (or DNAME rewrites, or an
    /// empty proof); single-label names are answered at the apex. The
    /// query name must be an FQDN with at least one label.
    pub fn to_dns(
        &self,
        resource: &Resource,
        query_name: &str,
        qtype: RecordType,
    ) -> Result<Message, ResourceError> {
        if !name::is_fqdn(query_name) {
            return Err(ResourceError::InvalidQueryName(format!(
                "not fully qualified: {}",
                query_name
            )));
        }
        let Some(tld_label) = name::last_label(query_name) else {
            return Err(ResourceError::InvalidQueryName(
                "the root has no resource".to_string(),
            ));
        };
        let tld = format!("{}.", tld_label);

        let (Some(owner), Some(tld_owner)) = (parse_fqdn(query_name), parse_fqdn(&tld)) else {
            return Err(ResourceError::InvalidQueryName(format!(
                "unparseable name: {}",
                query_name
            )));
        };

        let signer = self.signer.as_ref();
        let mut msg = Self::response();
        let mut answer: Vec<Record> = Vec::new();
        let mut authority: Vec<Record> = Vec::new();
        let mut additional: Vec<Record> = Vec::new();

        // Anything below the name's own label is a delegation question.
        if name::label_count(query_name) > 1 {
            if resource.has_ns() {
                debug!(name = %query_name, "Composing referral");
                project::ns(resource, &tld_owner, &mut authority);
                project::ds(resource, &tld_owner, &mut authority);
                project::ns_addrs(resource, query_name, &mut additional);
                project::glue(resource, RecordType::NS, &mut additional);
                if !resource.has(RecordKind::Ds) {
                    sign_with_zsk(signer, &mut authority, RecordType::NS);
                } else {
                    sign_with_zsk(signer, &mut authority, RecordType::DS);
                }
            } else if resource.has(RecordKind::Delegate) {
                debug!(name = %query_name, "Composing DNAME rewrite");
                project::dname(resource, &owner, &mut answer);
                project::glue(
                    resource,
                    RecordType::Unknown(rdata::DNAME_CODE),
                    &mut additional,
                );
                sign_with_zsk(signer, &mut answer, RecordType::Unknown(rdata::DNAME_CODE));
                sign_with_zsk(signer, &mut additional, RecordType::A);
                sign_with_zsk(signer, &mut additional, RecordType::AAAA);
            } else {
                debug!(name = %query_name, "Composing empty proof below apex");
                self.empty_proof(&tld_owner, &mut authority);
            }

            msg.insert_answers(answer);
            msg.insert_name_servers(authority);
            msg.insert_additionals(additional);
            return Ok(msg);
        }

        match qtype {
            RecordType::A => {
                project::a(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::A);
            }
            RecordType::AAAA => {
                project::aaaa(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::AAAA);
            }
            RecordType::CNAME => {
                project::cname(resource, &owner, &mut answer);
                project::glue(resource, RecordType::CNAME, &mut additional);
                sign_with_zsk(signer, &mut answer, RecordType::CNAME);
                sign_with_zsk(signer, &mut additional, RecordType::A);
                sign_with_zsk(signer, &mut additional, RecordType::AAAA);
            }
            RecordType::Unknown(rdata::DNAME_CODE) => {
                project::dname(resource, &owner, &mut answer);
                project::glue(
                    resource,
                    RecordType::Unknown(rdata::DNAME_CODE),
                    &mut additional,
                );
                sign_with_zsk(signer, &mut answer, RecordType::Unknown(rdata::DNAME_CODE));
                sign_with_zsk(signer, &mut additional, RecordType::A);
                sign_with_zsk(signer, &mut additional, RecordType::AAAA);
            }
            RecordType::NS => {
                project::ns(resource, &owner, &mut authority);
                project::glue(resource, RecordType::NS, &mut additional);
                project::ns_addrs(resource, query_name, &mut additional);
                sign_with_zsk(signer, &mut authority, RecordType::NS);
            }
            RecordType::MX => {
                project::mx(resource, &owner, query_name, &mut answer);
                project::mx_addrs(resource, query_name, &mut additional);
                project::glue(resource, RecordType::MX, &mut additional);
                sign_with_zsk(signer, &mut answer, RecordType::MX);
            }
            RecordType::TXT => {
                project::txt(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::TXT);
            }
            RecordType::Unknown(rdata::LOC_CODE) => {
                project::loc(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::Unknown(rdata::LOC_CODE));
            }
            RecordType::DS => {
                project::ds(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::DS);
            }
            RecordType::SSHFP => {
                project::sshfp(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::SSHFP);
            }
            RecordType::Unknown(rdata::URI_CODE) => {
                project::uri(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::Unknown(rdata::URI_CODE));
            }
            RecordType::Unknown(rdata::RP_CODE) => {
                project::rp(resource, &owner, &mut answer);
                sign_with_zsk(signer, &mut answer, RecordType::Unknown(rdata::RP_CODE));
            }
            _ => {}
        }

        if !answer.is_empty() {
            msg.set_authoritative(true);
        }

        if answer.is_empty() && authority.is_empty() {
            if resource.has(RecordKind::Canonical) {
                debug!(name = %query_name, qtype = ?qtype, "Falling back to CNAME");
                msg.set_authoritative(true);
                project::cname(resource, &owner, &mut answer);
                project::glue(resource, RecordType::CNAME, &mut additional);
                sign_with_zsk(signer, &mut answer, RecordType::CNAME);
                sign_with_zsk(signer, &mut additional, RecordType::A);
                sign_with_zsk(signer, &mut additional, RecordType::AAAA);
            } else if resource.has(RecordKind::Ns) {
                debug!(name = %query_name, qtype = ?qtype, "Falling back to referral");
                project::ns(resource, &owner, &mut authority);
                project::ds(resource, &owner, &mut authority);
                project::ns_addrs(resource, query_name, &mut additional);
                project::glue(resource, RecordType::NS, &mut additional);
                if !resource.has(RecordKind::Ds) {
                    sign_with_zsk(signer, &mut authority, RecordType::NS);
                } else {
                    sign_with_zsk(signer, &mut authority, RecordType::DS);
                }
            } else {
                debug!(name = %query_name, qtype = ?qtype, "Composing empty proof");
                self.empty_proof(&owner, &mut authority);
            }
        }

        msg.insert_answers(answer);
        msg.insert_name_servers(authority);
        msg.insert_additionals(additional);
        Ok(msg)
    }

    /// Denial for a name that exists but has nothing to say: NSEC with
    /// an empty type map at `owner`, then the root SOA, each signed.
    fn empty_proof(&self, owner: &Name, authority: &mut Vec<Record>) {
        let signer = self.signer.as_ref();
        authority.push(NsecRdata::empty_proof().to_record(owner.clone(), root::NSEC_TTL));
        sign_with_zsk(signer, authority, RecordType::NSEC);
        authority.push(root::soa_record());
        sign_with_zsk(signer, authority, RecordType::SOA);
    }
}
