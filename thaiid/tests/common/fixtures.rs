// fixtures.rs: commonly used ATRs, commands and card contents

use thaiid::catalog::FieldId;

/// ATR of a card answering only to the extended GET RESPONSE prefix
pub fn extended_atr() -> Vec<u8> {
    hex::decode("3B6700000073C84000009000").unwrap()
}

/// ATR of a card using the default prefix
pub fn default_atr() -> Vec<u8> {
    hex::decode("3B7896000029AA6A8290000000").unwrap()
}

pub fn select_command() -> Vec<u8> {
    hex::decode("00A4040008A000000054480001").unwrap()
}

pub fn sample_fields() -> Vec<(FieldId, String)> {
    thaiid::test_support::sample_fields()
}

pub fn sample_text(id: FieldId) -> String {
    sample_fields()
        .into_iter()
        .find(|(f, _)| *f == id)
        .map(|(_, text)| text)
        .unwrap_or_default()
}

/// A JPEG-looking stream that fills all twenty segments exactly.
pub fn sample_photo() -> Vec<u8> {
    let total = 20 * 0xFF;
    let mut photo = vec![0xFF, 0xD8, 0xFF, 0xE0];
    photo.extend((0..total - 6).map(|i| (i % 251) as u8));
    photo.extend_from_slice(&[0xFF, 0xD9]);
    photo
}
