use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind of query carried in the 4-bit OPCODE field.
///
/// Compared by wire value: `Unassigned(0)` is a `Query`.
#[derive(Debug, Clone, Copy)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Notify,
    Update,
    Unassigned(u8),
}

impl Opcode {
    pub fn to_u8(self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Unassigned(code) => code & 0x0F,
        }
    }

    /// Only the low 4 bits are significant.
    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Unassigned(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match Self::from_u8(self.to_u8()) {
            Opcode::Query => "QUERY",
            Opcode::IQuery => "IQUERY",
            Opcode::Status => "STATUS",
            Opcode::Notify => "NOTIFY",
            Opcode::Update => "UPDATE",
            Opcode::Unassigned(_) => "UNASSIGNED",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::from_u8(self.to_u8()) {
            Opcode::Unassigned(code) => write!(f, "OPCODE{}", code),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Response status carried in the 4-bit RCODE field, compared by wire value.
#[derive(Debug, Clone, Copy)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Unassigned(u8),
}

impl ResponseCode {
    pub fn to_u8(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unassigned(code) => code & 0x0F,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unassigned(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match Self::from_u8(self.to_u8()) {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unassigned(_) => "UNASSIGNED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::from_u8(self.to_u8()) {
            ResponseCode::Unassigned(code) => write!(f, "RCODE{}", code),
            other => f.write_str(other.as_str()),
        }
    }
}

macro_rules! eq_by_code {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.to_u8() == other.to_u8()
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.to_u8().hash(state);
            }
        }
    };
}

eq_by_code!(Opcode);
eq_by_code!(ResponseCode);

/// The fixed 12-byte message header.
///
/// The reserved Z bits have no field: they are dropped when a header is read
/// and written as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    /// `true` for a response, `false` for a query.
    pub qr: bool,
    pub opcode: Opcode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub rcode: ResponseCode,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.qr
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            id: 0,
            qr: false,
            opcode: Opcode::Query,
            aa: false,
            tc: false,
            rd: false,
            ra: false,
            rcode: ResponseCode::NoError,
            qdcount: 0,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }
}
