//! Hand-written DNS wire format: RFC 1035 section 4 without EDNS.
//!
//! Decoding follows compression pointers; encoding never emits them.

pub mod bitfield;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod reader;
pub mod record;

pub use bitfield::{BitField, BitLayout};
pub use header::{decode_header, encode_header, FLAGS_LAYOUT, HEADER_LEN};
pub use message::{decode, encode};
pub use name::{decode_name, encode_name};
pub use question::{decode_question, encode_question};
pub use reader::WireReader;
pub use record::{decode_record, encode_record};
