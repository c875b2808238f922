#![allow(dead_code)]
use ferrous_wire_domain::{
    DomainName, Header, Message, Opcode, Question, RecordClass, RecordType, ResourceRecord,
};
use std::str::FromStr;

pub fn name(s: &str) -> DomainName {
    DomainName::from_str(s).unwrap()
}

pub struct ResourceRecordBuilder {
    name: DomainName,
    record_type: RecordType,
    class: RecordClass,
    ttl: u32,
    rdata: Vec<u8>,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: name("example.com"),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl: 300,
            rdata: vec![192, 0, 2, 1],
        }
    }

    pub fn name(mut self, s: &str) -> Self {
        self.name = name(s);
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn rdata(mut self, rdata: &[u8]) -> Self {
        self.rdata = rdata.to_vec();
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.name, self.record_type, self.class, self.ttl, self.rdata)
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn query(id: u16, qname: &str) -> Message {
    let header = Header {
        rd: true,
        opcode: Opcode::Query,
        ..Header::new(id)
    };
    Message::new(header).with_question(Question::new(name(qname), RecordType::A, RecordClass::IN))
}
