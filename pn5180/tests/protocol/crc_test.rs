use pn5180::protocol::crc::{crc16, crc16_parts};

#[test]
fn crc16_reference_vectors() {
    assert_eq!(crc16(b"123456789"), 0x29B1);
    assert_eq!(crc16(&[]), 0xFFFF);
}

#[test]
fn crc16_covers_header_and_frame() {
    // Header [0,1] with a bare GET_DIE_ID opcode
    assert_eq!(crc16(&[0x00, 0x01, 0xF4]), 0x5036);
    assert_eq!(crc16_parts(&[&[0x00, 0x03], &[0x00, 0xAA, 0xBB]]), 0x6ED5);
}

#[test]
fn crc16_detects_single_bit_flip() {
    let data = [0x00, 0x04, 0xF1, 0x00, 0x00, 0x00];
    let base = crc16(&data);
    for i in 0..data.len() {
        for bit in 0..8 {
            let mut flipped = data;
            flipped[i] ^= 1 << bit;
            assert_ne!(crc16(&flipped), base, "byte {} bit {}", i, bit);
        }
    }
}
