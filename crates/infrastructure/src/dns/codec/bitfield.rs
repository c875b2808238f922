use ferrous_wire_domain::WireError;
use smallvec::SmallVec;

/// One named field of a packed bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub width: u32,
}

impl BitField {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }

    fn mask(&self) -> u64 {
        u64::MAX >> (u64::BITS - self.width)
    }
}

/// Ordered table of fields packed most-significant-bit first into big-endian
/// bytes. The last byte is zero-padded on the right when the total width is
/// not a multiple of 8.
#[derive(Debug, Clone, Copy)]
pub struct BitLayout {
    fields: &'static [BitField],
    total_bits: u32,
}

impl BitLayout {
    pub const fn new(fields: &'static [BitField]) -> Self {
        let mut total_bits = 0;
        let mut i = 0;
        while i < fields.len() {
            assert!(fields[i].width > 0, "bit field width must be non-zero");
            total_bits += fields[i].width;
            i += 1;
        }
        assert!(
            total_bits > 0 && total_bits <= u64::BITS,
            "bit layout must span 1..=64 bits"
        );
        Self { fields, total_bits }
    }

    pub fn byte_len(&self) -> usize {
        self.total_bits.div_ceil(8) as usize
    }

    /// Packs one value per field, in table order. Bits above a field's width
    /// are masked off.
    pub fn pack(&self, values: &[u64]) -> SmallVec<[u8; 8]> {
        debug_assert_eq!(values.len(), self.fields.len());

        let mut acc: u64 = 0;
        for (field, value) in self.fields.iter().zip(values) {
            acc = acc.checked_shl(field.width).unwrap_or(0) | (value & field.mask());
        }

        let byte_len = self.byte_len();
        acc <<= byte_len as u32 * 8 - self.total_bits;

        SmallVec::from_slice(&acc.to_be_bytes()[8 - byte_len..])
    }

    /// Splits the first `byte_len()` bytes of `bytes` back into field values.
    pub fn unpack(&self, bytes: &[u8]) -> Result<SmallVec<[u64; 8]>, WireError> {
        let byte_len = self.byte_len();
        let src = bytes.get(..byte_len).ok_or(WireError::BufferTooShort {
            offset: 0,
            needed: byte_len,
        })?;

        let mut word = [0u8; 8];
        word[8 - byte_len..].copy_from_slice(src);
        let mut acc = u64::from_be_bytes(word) >> (byte_len as u32 * 8 - self.total_bits);

        let mut values: SmallVec<[u64; 8]> = SmallVec::from_elem(0, self.fields.len());
        for (slot, field) in values.iter_mut().zip(self.fields).rev() {
            *slot = acc & field.mask();
            acc = acc.checked_shr(field.width).unwrap_or(0);
        }
        Ok(values)
    }
}
