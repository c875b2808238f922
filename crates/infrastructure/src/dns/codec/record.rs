use bytes::BufMut;
use ferrous_wire_domain::{RecordClass, RecordType, ResourceRecord, WireError};

use super::name::encode_name;
use super::reader::WireReader;

/// Decodes one resource record at `offset`, returning it with its in-place size.
pub fn decode_record(buf: &[u8], offset: usize) -> Result<(ResourceRecord, usize), WireError> {
    let mut reader = WireReader::at(buf, offset);
    let record = read_record(&mut reader)?;
    Ok((record, reader.position() - offset))
}

pub(crate) fn read_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, WireError> {
    let name = reader.read_name()?;
    let record_type = RecordType::from_u16(reader.read_u16()?);
    let class = RecordClass::from_u16(reader.read_u16()?);
    let ttl = reader.read_u32()?;
    let rdlength = usize::from(reader.read_u16()?);
    let rdata = reader.read_bytes(rdlength)?.to_vec();

    Ok(ResourceRecord::new(name, record_type, class, ttl, rdata))
}

/// Writes `record` with RDLENGTH taken from the RDATA length. Nothing is
/// written when the RDATA does not fit a 16-bit length.
pub fn encode_record(record: &ResourceRecord, buf: &mut impl BufMut) -> Result<(), WireError> {
    let rdlength = u16::try_from(record.rdata.len())
        .map_err(|_| WireError::RdataTooLong(record.rdata.len()))?;

    encode_name(&record.name, buf);
    buf.put_u16(record.record_type.to_u16());
    buf.put_u16(record.class.to_u16());
    buf.put_u32(record.ttl);
    buf.put_u16(rdlength);
    buf.put_slice(&record.rdata);
    Ok(())
}
