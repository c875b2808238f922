use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Buffer too short: need {needed} byte(s) at offset {offset}")]
    BufferTooShort { offset: usize, needed: usize },

    #[error("Invalid label length byte {byte:#04x} at offset {offset}")]
    InvalidLabelLength { offset: usize, byte: u8 },

    #[error("Compression pointer at offset {offset} targets {target}, which is not an earlier position")]
    PointerCycle { offset: usize, target: usize },

    #[error("Name component is {0} bytes long (max 63)")]
    NameComponentTooLong(usize),

    #[error("Name contains an empty label")]
    EmptyLabel,

    #[error("RDATA is {0} bytes long (max 65535)")]
    RdataTooLong(usize),

    #[error("Section {section} holds {len} entries, more than a 16-bit counter can express")]
    CountMismatch { section: &'static str, len: usize },
}
