use super::{RecordClass, RecordType};
use crate::DomainName;
use std::net::Ipv4Addr;

/// Generic resource-record envelope. RDATA is kept as opaque bytes.
///
/// There is no stored RDLENGTH: it is always derived from `rdata` when the
/// record is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub record_type: RecordType,

    pub class: RecordClass,

    pub ttl: u32,

    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(
        name: DomainName,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        rdata: Vec<u8>,
    ) -> Self {
        Self {
            name,
            record_type,
            class,
            ttl,
            rdata,
        }
    }

    /// An `IN A` record pointing `name` at `address`.
    pub fn a(name: DomainName, ttl: u32, address: Ipv4Addr) -> Self {
        Self::new(
            name,
            RecordType::A,
            RecordClass::IN,
            ttl,
            address.octets().to_vec(),
        )
    }

    pub fn rdlength(&self) -> usize {
        self.rdata.len()
    }

    /// Interprets the RDATA as an IPv4 address when this is a 4-byte A record.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.record_type != RecordType::A {
            return None;
        }
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }
}
