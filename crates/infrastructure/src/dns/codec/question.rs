use bytes::BufMut;
use ferrous_wire_domain::{Question, RecordClass, RecordType, WireError};

use super::name::encode_name;
use super::reader::WireReader;

/// Decodes one question entry at `offset`, returning it with its in-place size.
pub fn decode_question(buf: &[u8], offset: usize) -> Result<(Question, usize), WireError> {
    let mut reader = WireReader::at(buf, offset);
    let question = read_question(&mut reader)?;
    Ok((question, reader.position() - offset))
}

pub(crate) fn read_question(reader: &mut WireReader<'_>) -> Result<Question, WireError> {
    let name = reader.read_name()?;
    let record_type = RecordType::from_u16(reader.read_u16()?);
    let class = RecordClass::from_u16(reader.read_u16()?);
    Ok(Question::new(name, record_type, class))
}

pub fn encode_question(question: &Question, buf: &mut impl BufMut) {
    encode_name(&question.name, buf);
    buf.put_u16(question.record_type.to_u16());
    buf.put_u16(question.class.to_u16());
}
