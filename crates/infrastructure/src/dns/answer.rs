use ferrous_wire_application::ports::AnswerGenerator;
use ferrous_wire_domain::{Config, ConfigError, Question, ResourceRecord};
use std::net::Ipv4Addr;

/// Answers every question with the same `IN A` record, named after the
/// question. The question's type and class are ignored.
#[derive(Debug, Clone, Copy)]
pub struct FixedAddressAnswer {
    address: Ipv4Addr,
    ttl: u32,
}

impl FixedAddressAnswer {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.answer_address()?, config.answer.ttl))
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}

impl Default for FixedAddressAnswer {
    fn default() -> Self {
        Self::new(Ipv4Addr::new(8, 8, 8, 8), 60)
    }
}

impl AnswerGenerator for FixedAddressAnswer {
    fn answer(&self, question: &Question) -> ResourceRecord {
        ResourceRecord::a(question.name.clone(), self.ttl, self.address)
    }
}
