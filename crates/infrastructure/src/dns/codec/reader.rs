use ferrous_wire_domain::{DomainName, WireError};

use super::name::decode_name;

/// Forward-only cursor over a received datagram.
///
/// Keeps the whole buffer so compression pointers can jump backwards.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos.checked_add(len).filter(|end| *end <= self.buf.len());
        let Some(end) = end else {
            return Err(WireError::BufferTooShort {
                offset: self.pos,
                needed: len,
            });
        };
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a possibly-compressed name. The cursor advances past the
    /// in-place bytes only, never past a pointer's target.
    pub fn read_name(&mut self) -> Result<DomainName, WireError> {
        let (name, consumed) = decode_name(self.buf, self.pos)?;
        self.pos += consumed;
        Ok(name)
    }
}
