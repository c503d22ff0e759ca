// pn5180-rs/pn5180/src/protocol/crc.rs

/// Compute the CRC16 used by SFD messages (poly 0x1021, init 0xFFFF, no
/// reflection), byte-wise without a lookup table.
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(0xFFFF, |crc, &b| step(crc, b))
}

/// CRC16 over several slices as if they were concatenated.
pub fn crc16_parts(parts: &[&[u8]]) -> u16 {
    parts
        .iter()
        .flat_map(|p| p.iter())
        .fold(0xFFFF, |crc, &b| step(crc, b))
}

fn step(crc: u16, b: u8) -> u16 {
    let mut t = crc.rotate_left(8);
    t ^= u16::from(b);
    t ^= (t & 0xFF) >> 4;
    t ^= t << 12;
    t ^= (t & 0xFF) << 5;
    t
}
