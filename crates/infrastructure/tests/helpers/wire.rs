#![allow(dead_code)]
use ferrous_wire_application::ports::AnswerGenerator;
use ferrous_wire_application::use_cases::BuildReplyUseCase;
use ferrous_wire_domain::DomainName;
use ferrous_wire_infrastructure::dns::{DnsServerHandler, FixedAddressAnswer};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const CLIENT: &str = "127.0.0.1:53000";

pub fn client() -> SocketAddr {
    CLIENT.parse().unwrap()
}

pub fn name(s: &str) -> DomainName {
    DomainName::from_str(s).unwrap()
}

/// 12-byte header with the given flag bytes and counters.
pub fn header_bytes(id: u16, flags: [u8; 2], counts: [u16; 4]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&flags);
    for count in counts {
        buf.extend_from_slice(&count.to_be_bytes());
    }
    buf
}

pub fn push_name(buf: &mut Vec<u8>, domain: &str) {
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00); // root label
}

pub fn push_question(buf: &mut Vec<u8>, domain: &str, qtype: u16, qclass: u16) {
    push_name(buf, domain);
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&qclass.to_be_bytes());
}

/// Standard query (RD set) with one `IN A` question per domain.
pub fn build_query(id: u16, domains: &[&str]) -> Vec<u8> {
    let mut buf = header_bytes(id, [0x01, 0x00], [domains.len() as u16, 0, 0, 0]);
    for domain in domains {
        push_question(&mut buf, domain, 1, 1);
    }
    buf
}

pub fn handler_with(answers: Arc<dyn AnswerGenerator>, max_payload: usize) -> DnsServerHandler {
    DnsServerHandler::new(Arc::new(BuildReplyUseCase::new(answers)), max_payload)
}

pub fn placeholder_handler() -> DnsServerHandler {
    handler_with(
        Arc::new(FixedAddressAnswer::new(Ipv4Addr::new(8, 8, 8, 8), 60)),
        512,
    )
}
