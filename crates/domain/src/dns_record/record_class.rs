use std::fmt;
use std::hash::{Hash, Hasher};

/// The 16-bit CLASS field of questions and resource records.
///
/// Compared and hashed by numeric code.
#[derive(Debug, Clone, Copy)]
pub enum RecordClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
    Unknown(u16),
}

impl RecordClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::NONE => 254,
            RecordClass::ANY => 255,
            RecordClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            254 => RecordClass::NONE,
            255 => RecordClass::ANY,
            other => RecordClass::Unknown(other),
        }
    }
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        Self::from_u16(code)
    }
}

impl From<RecordClass> for u16 {
    fn from(class: RecordClass) -> Self {
        class.to_u16()
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::from_u16(self.to_u16()) {
            RecordClass::IN => f.write_str("IN"),
            RecordClass::CH => f.write_str("CH"),
            RecordClass::HS => f.write_str("HS"),
            RecordClass::NONE => f.write_str("NONE"),
            RecordClass::ANY => f.write_str("ANY"),
            RecordClass::Unknown(code) => write!(f, "CLASS{}", code),
        }
    }
}

impl PartialEq for RecordClass {
    fn eq(&self, other: &Self) -> bool {
        self.to_u16() == other.to_u16()
    }
}

impl Eq for RecordClass {}

impl Hash for RecordClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_u16().hash(state);
    }
}
