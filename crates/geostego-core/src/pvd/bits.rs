//! Bit string helpers, all bit orders are big-endian (most significant bit first).

use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

/// ordered bits, most significant first
pub type BitString = Vec<bool>;

/// spreads bytes into bits, each byte most significant bit first
pub fn bytes_to_bits(bytes: &[u8]) -> io::Result<BitString> {
    let mut reader = BitReader::endian(bytes, BigEndian);
    (0..bytes.len() * 8).map(|_| reader.read_bit()).collect()
}

/// groups bits into bytes of 8, trailing bits that do not form a full byte are dropped
pub fn bits_to_bytes(bits: &[bool]) -> io::Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len() / 8), BigEndian);
    for bit in bits.iter().take(bits.len() / 8 * 8) {
        writer.write_bit(*bit)?;
    }

    Ok(writer.into_writer())
}

/// interprets up to 16 bits as an unsigned big-endian number
pub fn bits_to_value(bits: &[bool]) -> u16 {
    bits.iter()
        .take(16)
        .fold(0, |acc, bit| (acc << 1) | u16::from(*bit))
}

/// renders the lowest `width` bits of `value`, most significant first
pub fn value_to_bits(value: u16, width: usize) -> BitString {
    (0..width.min(16))
        .rev()
        .map(|shift| (value >> shift) & 1 == 1)
        .collect()
}

/// renders a bit string as `0`/`1` characters, for logging
pub fn to_bit_text(bits: &[bool]) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}
