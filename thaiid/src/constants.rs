// thaiid/src/constants.rs
//! Common protocol constants used across the crate

/// SELECT by AID for the Thai national ID applet (AID A0 00 00 00 54 48 00 01)
pub const SELECT_THAI_ID_APPLET: [u8; 13] = [
    0x00, 0xA4, 0x04, 0x00, 0x08, 0xA0, 0x00, 0x00, 0x00, 0x54, 0x48, 0x00, 0x01,
];

/// Proprietary read-binary class/instruction used by the locate command
pub const READ_BINARY_CLA: u8 = 0x80;
/// Instruction byte of the locate command
pub const READ_BINARY_INS: u8 = 0xB0;

/// Lc and the single data byte that precede Le in every locate command
pub const READ_BINARY_LC: u8 = 0x02;
/// Single data byte of the locate command
pub const READ_BINARY_DATA: u8 = 0x00;

/// Locate command length: CLA INS P1 P2 Lc Data Le
pub const LOCATE_COMMAND_LEN: usize = 7;

/// GET RESPONSE prefixes (CLA INS P1 P2); Le is appended per request
pub const GET_RESPONSE_DEFAULT_PREFIX: [u8; 4] = [0x00, 0xC0, 0x00, 0x00];
/// Prefix for cards whose ATR starts with `3B 67`
pub const GET_RESPONSE_EXTENDED_PREFIX: [u8; 4] = [0x00, 0xC0, 0x00, 0x01];

/// ATR prefix of cards that expect the extended GET RESPONSE prefix
pub const EXTENDED_ATR_PREFIX: [u8; 2] = [0x3B, 0x67];

/// Every response ends with SW1 SW2
pub const STATUS_TRAILER_LEN: usize = 2;

/// Successful completion status word
pub const SW_SUCCESS: u16 = 0x9000;

/// Photo layout: 20 segments of 0xFF bytes starting at 0x017B
pub const PHOTO_SEGMENT_COUNT: usize = 20;
/// Offset of the first segment
pub const PHOTO_FIRST_OFFSET: u16 = 0x017B;
/// Le of every segment
pub const PHOTO_SEGMENT_LEN: u8 = 0xFF;
