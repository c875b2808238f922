use bytes::BufMut;
use ferrous_wire_domain::{Header, Opcode, ResponseCode, WireError};

use super::bitfield::{BitField, BitLayout};
use super::reader::WireReader;

pub const HEADER_LEN: usize = 12;

const QR: usize = 0;
const OPCODE: usize = 1;
const AA: usize = 2;
const TC: usize = 3;
const RD: usize = 4;
const RA: usize = 5;
const Z: usize = 6;
const RCODE: usize = 7;

const FLAG_FIELDS: [BitField; 8] = [
    BitField::new("QR", 1),
    BitField::new("OPCODE", 4),
    BitField::new("AA", 1),
    BitField::new("TC", 1),
    BitField::new("RD", 1),
    BitField::new("RA", 1),
    BitField::new("Z", 3),
    BitField::new("RCODE", 4),
];

/// Layout of header bytes 2-3.
pub const FLAGS_LAYOUT: BitLayout = BitLayout::new(&FLAG_FIELDS);

pub fn decode_header(buf: &[u8]) -> Result<Header, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::BufferTooShort {
            offset: 0,
            needed: HEADER_LEN,
        });
    }

    let mut reader = WireReader::new(buf);
    let id = reader.read_u16()?;
    let flags = FLAGS_LAYOUT.unpack(reader.read_bytes(FLAGS_LAYOUT.byte_len())?)?;

    Ok(Header {
        id,
        qr: flags[QR] != 0,
        opcode: Opcode::from_u8(flags[OPCODE] as u8),
        aa: flags[AA] != 0,
        tc: flags[TC] != 0,
        rd: flags[RD] != 0,
        ra: flags[RA] != 0,
        rcode: ResponseCode::from_u8(flags[RCODE] as u8),
        qdcount: reader.read_u16()?,
        ancount: reader.read_u16()?,
        nscount: reader.read_u16()?,
        arcount: reader.read_u16()?,
    })
}

pub fn encode_header(header: &Header, buf: &mut impl BufMut) {
    let mut flags = [0u64; FLAG_FIELDS.len()];
    flags[QR] = u64::from(header.qr);
    flags[OPCODE] = u64::from(header.opcode.to_u8());
    flags[AA] = u64::from(header.aa);
    flags[TC] = u64::from(header.tc);
    flags[RD] = u64::from(header.rd);
    flags[RA] = u64::from(header.ra);
    flags[Z] = 0;
    flags[RCODE] = u64::from(header.rcode.to_u8());

    buf.put_u16(header.id);
    buf.put_slice(&FLAGS_LAYOUT.pack(&flags));
    buf.put_u16(header.qdcount);
    buf.put_u16(header.ancount);
    buf.put_u16(header.nscount);
    buf.put_u16(header.arcount);
}
