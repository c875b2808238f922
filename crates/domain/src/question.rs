use super::{DomainName, RecordClass, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: DomainName, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name,
            record_type,
            class,
        }
    }
}
