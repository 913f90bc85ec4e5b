// thaiid/src/charset/mod.rs
//! Conversion between the card's single-byte Thai codepage and Unicode.

pub mod windows874;

use crate::error::DecodeError;

/// Padding byte the card uses to fill fixed-width text fields.
pub const PAD: char = ' ';

/// Decode a payload without trimming.
pub fn decode_raw(payload: &[u8]) -> Result<String, DecodeError> {
    payload
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            windows874::decode_byte(byte).ok_or(DecodeError::InvalidByte { byte, position })
        })
        .collect()
}

/// Decode a text field payload and strip the space padding on both ends.
pub fn decode_text(payload: &[u8]) -> Result<String, DecodeError> {
    let text = decode_raw(payload)?;
    Ok(trim_padding(&text).to_owned())
}

/// Strip ASCII spaces (only) from both ends; interior whitespace is kept.
pub fn trim_padding(text: &str) -> &str {
    text.trim_matches(PAD)
}

/// Encode Unicode text into the card codepage.
pub fn encode_text(text: &str) -> Result<Vec<u8>, DecodeError> {
    text.chars()
        .map(|c| windows874::encode_char(c).ok_or(DecodeError::Unmappable(c)))
        .collect()
}
