// thaiid/src/error.rs
//! Error types for every layer, from the raw channel up to the session.

use thiserror::Error;

/// Failures of the raw card channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No reader, or the PC/SC service is down
    #[error("card channel unavailable")]
    ChannelUnavailable,

    /// The reader reports no card
    #[error("no card present in reader")]
    CardAbsent,

    /// The channel was closed before this exchange
    #[error("card channel closed")]
    Closed,

    /// Any other send/receive fault, with the driver message
    #[error("channel i/o fault: {0}")]
    Io(String),
}

/// Failures of a single locate/get-response exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Reply shorter than the 2-byte status trailer
    #[error("response too short: expected at least 2 bytes, got {actual}")]
    ShortResponse {
        /// Bytes actually received
        actual: usize,
    },

    /// The channel failed during the exchange
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Failures converting between the Thai codepage and Unicode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Byte at `position` has no character in the codepage
    #[error("unassigned codepage byte {byte:#04x} at position {position}")]
    InvalidByte {
        /// Offending byte
        byte: u8,
        /// Index of the byte in the payload
        position: usize,
    },

    /// Character cannot be encoded into the codepage
    #[error("character {0:?} has no codepage mapping")]
    Unmappable(char),
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Channel failure outside a field read (ATR, applet selection)
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Exchange-level failure
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Codepage conversion failure
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// `SessionBuilder::open` called without a channel
    #[error("no card channel provided")]
    ChannelNotProvided,

    /// The record sink failed to persist a record
    #[error("record sink error: {0}")]
    Sink(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
