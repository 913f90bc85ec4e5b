// thaiid/src/charset/windows874.rs
//! Windows-874 (TIS-620 plus the Microsoft punctuation block) code table.
//!
//! 0x00-0x7F is ASCII. The Thai block is contiguous on both sides: card
//! bytes 0xA1-0xFB map to U+0E01-U+0E5B with a fixed distance, except for
//! the holes at 0xDB-0xDE and 0xFC-0xFF which are unassigned.

/// Distance between a Thai byte and its Unicode scalar value.
const THAI_OFFSET: u32 = 0x0E01 - 0xA1;

/// Decode a single codepage byte. Returns `None` for unassigned positions.
pub fn decode_byte(b: u8) -> Option<char> {
    let c = match b {
        0x00..=0x7F => b as u32,
        0x80 => 0x20AC,
        0x85 => 0x2026,
        0x91 => 0x2018,
        0x92 => 0x2019,
        0x93 => 0x201C,
        0x94 => 0x201D,
        0x95 => 0x2022,
        0x96 => 0x2013,
        0x97 => 0x2014,
        // Remaining C1 positions pass through as the control of the same value
        0x81..=0x9F => b as u32,
        0xA0 => 0x00A0,
        0xA1..=0xDA | 0xDF..=0xFB => b as u32 + THAI_OFFSET,
        0xDB..=0xDE | 0xFC..=0xFF => return None,
    };
    char::from_u32(c)
}

/// Encode a single character. Returns `None` for characters the codepage
/// cannot represent.
pub fn encode_char(c: char) -> Option<u8> {
    let u = c as u32;
    let b = match u {
        0x0000..=0x007F => u,
        0x20AC => 0x80,
        0x2026 => 0x85,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x0081..=0x0084 | 0x0086..=0x0090 | 0x0098..=0x009F => u,
        0x00A0 => 0xA0,
        0x0E01..=0x0E3A | 0x0E3F..=0x0E5B => u - THAI_OFFSET,
        _ => return None,
    };
    Some(b as u8)
}
