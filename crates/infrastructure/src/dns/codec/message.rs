use ferrous_wire_domain::{Header, Message, ResourceRecord, WireError};

use super::header::{decode_header, encode_header, HEADER_LEN};
use super::question::{encode_question, read_question};
use super::reader::WireReader;
use super::record::{encode_record, read_record};

const TYPICAL_DATAGRAM: usize = 512;

/// Decodes a whole datagram.
///
/// Section sizes come from the header counters. Bytes left over after the
/// last additional record are ignored.
pub fn decode(buf: &[u8]) -> Result<Message, WireError> {
    let header = decode_header(buf)?;
    let mut reader = WireReader::at(buf, HEADER_LEN);

    let questions = read_section(&mut reader, header.qdcount, read_question)?;
    let answers = read_section(&mut reader, header.ancount, read_record)?;
    let authorities = read_section(&mut reader, header.nscount, read_record)?;
    let additionals = read_section(&mut reader, header.arcount, read_record)?;

    Ok(Message {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

/// Encodes `message`, deriving every header counter from the section it
/// counts. Names are written uncompressed.
pub fn encode(message: &Message) -> Result<Vec<u8>, WireError> {
    let header = Header {
        qdcount: section_count("question", message.questions.len())?,
        ancount: section_count("answer", message.answers.len())?,
        nscount: section_count("authority", message.authorities.len())?,
        arcount: section_count("additional", message.additionals.len())?,
        ..message.header
    };

    let mut buf = Vec::with_capacity(TYPICAL_DATAGRAM);
    encode_header(&header, &mut buf);
    for question in &message.questions {
        encode_question(question, &mut buf);
    }
    for record in records(message) {
        encode_record(record, &mut buf)?;
    }
    Ok(buf)
}

fn read_section<'a, T>(
    reader: &mut WireReader<'a>,
    count: u16,
    read: fn(&mut WireReader<'a>) -> Result<T, WireError>,
) -> Result<Vec<T>, WireError> {
    let mut entries = Vec::new();
    for _ in 0..count {
        entries.push(read(reader)?);
    }
    Ok(entries)
}

fn section_count(section: &'static str, len: usize) -> Result<u16, WireError> {
    u16::try_from(len).map_err(|_| WireError::CountMismatch { section, len })
}

fn records(message: &Message) -> impl Iterator<Item = &ResourceRecord> {
    message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
}
