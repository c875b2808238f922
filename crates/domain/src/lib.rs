//! Ferrous Wire Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod header;
pub mod message;
pub mod question;

pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use dns_record::{RecordClass, RecordType, ResourceRecord};
pub use domain_name::{DomainName, Label, MAX_LABEL_LEN};
pub use errors::WireError;
pub use header::{Header, Opcode, ResponseCode};
pub use message::Message;
pub use question::Question;
