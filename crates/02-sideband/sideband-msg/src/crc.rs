use crate::bits::BitReader;

const POLY: u8 = 0x13;

/// Sideband header CRC (x^4 + x + 1) over the first `nibbles` nibbles of `data`.
///
/// A header's CRC covers every nibble except the last, which holds the CRC.
pub fn header_crc4(data: &[u8], nibbles: usize) -> u8 {
    let mut reader = BitReader::new(data, 0);
    crc4_bits(&mut reader, nibbles * 4).unwrap_or(0)
}

/// Runs the CRC over the next `bits` bits of `reader`.
pub(crate) fn crc4_bits(reader: &mut BitReader<'_>, bits: usize) -> Option<u8> {
    let mut remainder = 0u8;
    for _ in 0..bits {
        let bit = reader.read(1).ok()? as u8;
        remainder = step(remainder, bit);
    }
    for _ in 0..4 {
        remainder = step(remainder, 0);
    }
    Some(remainder & 0x0F)
}

#[inline]
fn step(remainder: u8, bit: u8) -> u8 {
    let next = (remainder << 1) | bit;
    if next & 0x10 != 0 {
        next ^ POLY
    } else {
        next
    }
}
