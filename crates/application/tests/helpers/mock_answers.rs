#![allow(dead_code)]

use ferrous_wire_application::ports::AnswerGenerator;
use ferrous_wire_domain::{Question, ResourceRecord};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every question with a fixed A record and counts how often it was
/// asked.
pub struct MockAnswerGenerator {
    address: Ipv4Addr,
    ttl: u32,
    calls: AtomicUsize,
}

impl MockAnswerGenerator {
    pub fn new() -> Self {
        Self {
            address: Ipv4Addr::new(127, 0, 0, 1),
            ttl: 60,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_address(mut self, address: Ipv4Addr) -> Self {
        self.address = address;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnswerGenerator for MockAnswerGenerator {
    fn answer(&self, question: &Question) -> ResourceRecord {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ResourceRecord::a(question.name.clone(), self.ttl, self.address)
    }
}
