// thaiid/src/types.rs
//! Small protocol value types shared across modules.

use derive_more::Display;

use crate::constants::{
    EXTENDED_ATR_PREFIX, GET_RESPONSE_DEFAULT_PREFIX, GET_RESPONSE_EXTENDED_PREFIX,
    LOCATE_COMMAND_LEN, READ_BINARY_CLA, READ_BINARY_DATA, READ_BINARY_INS, READ_BINARY_LC,
};

/// Fixed location of a data object on the card: a 2-byte offset and the
/// number of bytes to read from it (Le, 0xFF = maximum chunk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandTemplate {
    offset: u16,
    length: u8,
}

impl CommandTemplate {
    /// Template for `length` bytes at `offset`.
    pub const fn new(offset: u16, length: u8) -> Self {
        Self { offset, length }
    }

    /// Data object offset (P1 P2 of the locate command).
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Expected response length; also the Le of the paired GET RESPONSE.
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Render the locate (read-binary) instruction.
    pub const fn locate_command(&self) -> [u8; LOCATE_COMMAND_LEN] {
        let [hi, lo] = self.offset.to_be_bytes();
        [
            READ_BINARY_CLA,
            READ_BINARY_INS,
            hi,
            lo,
            READ_BINARY_LC,
            READ_BINARY_DATA,
            self.length,
        ]
    }
}

/// GET RESPONSE flavour, chosen once per session from the ATR.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ProtocolVariant {
    /// GET RESPONSE `00 C0 00 00`
    #[default]
    #[display(fmt = "default")]
    Default,
    /// GET RESPONSE `00 C0 00 01`
    #[display(fmt = "extended")]
    Extended,
}

impl ProtocolVariant {
    /// Pick the variant for a card from its answer-to-reset. Only the first
    /// two bytes matter; anything shorter falls back to the default.
    pub fn from_atr(atr: &[u8]) -> Self {
        if atr.starts_with(&EXTENDED_ATR_PREFIX) {
            Self::Extended
        } else {
            Self::Default
        }
    }

    /// CLA INS P1 P2 of the GET RESPONSE for this variant.
    pub const fn prefix(&self) -> [u8; 4] {
        match self {
            Self::Default => GET_RESPONSE_DEFAULT_PREFIX,
            Self::Extended => GET_RESPONSE_EXTENDED_PREFIX,
        }
    }
}

/// SW1 SW2 trailer of a card response
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{:02X}{:02X}", sw1, sw2)]
pub struct StatusWord {
    /// First status byte
    pub sw1: u8,
    /// Second status byte
    pub sw2: u8,
}

impl StatusWord {
    /// Status word from its two bytes.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// Both bytes as one big-endian value.
    pub const fn as_u16(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }

    /// `90 00`
    pub const fn is_success(&self) -> bool {
        self.as_u16() == crate::constants::SW_SUCCESS
    }
}
