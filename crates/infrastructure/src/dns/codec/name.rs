use bytes::BufMut;
use ferrous_wire_domain::{DomainName, Label, WireError};

const POINTER_TAG: u8 = 0xC0;
const LENGTH_MASK: u8 = 0x3F;

/// Decodes the name starting at `start`, following compression pointers.
///
/// Returns the name and the number of bytes it occupies at `start`: up to and
/// including the first pointer, or the terminating zero byte if there is none.
///
/// A pointer must target an offset before its own. That alone still admits
/// loops through a label that spans the pointer, so the number of labels and
/// jumps taken is capped at the buffer length: a name that decodes visits
/// each offset at most once. Both failures are [`WireError::PointerCycle`].
pub fn decode_name(buf: &[u8], start: usize) -> Result<(DomainName, usize), WireError> {
    let mut name = DomainName::root();
    let mut pos = start;
    let mut consumed = None;
    let mut last_jump = None;
    let mut steps = 0usize;

    loop {
        let len_byte = *buf
            .get(pos)
            .ok_or(WireError::BufferTooShort { offset: pos, needed: 1 })?;

        steps += 1;
        if steps > buf.len() {
            let (offset, target) = last_jump.unwrap_or((pos, pos));
            return Err(WireError::PointerCycle { offset, target });
        }

        match len_byte & POINTER_TAG {
            0x00 => {
                let len = usize::from(len_byte & LENGTH_MASK);
                if len == 0 {
                    let consumed = consumed.unwrap_or(pos + 1 - start);
                    return Ok((name, consumed));
                }

                let content = buf
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(WireError::BufferTooShort {
                        offset: pos + 1,
                        needed: len,
                    })?;
                name.push(Label::new(content)?);
                pos += 1 + len;
            }
            POINTER_TAG => {
                let low = *buf.get(pos + 1).ok_or(WireError::BufferTooShort {
                    offset: pos + 1,
                    needed: 1,
                })?;
                let target = usize::from(u16::from_be_bytes([len_byte & LENGTH_MASK, low]));
                if target >= pos {
                    return Err(WireError::PointerCycle {
                        offset: pos,
                        target,
                    });
                }

                consumed.get_or_insert(pos + 2 - start);
                last_jump = Some((pos, target));
                pos = target;
            }
            _ => {
                return Err(WireError::InvalidLabelLength {
                    offset: pos,
                    byte: len_byte,
                })
            }
        }
    }
}

/// Writes `name` uncompressed: each label length-prefixed, then a zero byte.
pub fn encode_name(name: &DomainName, buf: &mut impl BufMut) {
    for label in name.labels() {
        buf.put_u8(label.len() as u8);
        buf.put_slice(label.as_bytes());
    }
    buf.put_u8(0);
}
