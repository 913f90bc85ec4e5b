// thaiid/src/prelude.rs
//! Commonly used types and functions, for `use thaiid::prelude::*`.

pub use crate::card::{CardRecord, DecodedField, FieldOutcome, PhotoBuffer, RecordSink};
pub use crate::catalog::FieldId;
pub use crate::session::{AppletSelected, Connected, Session, SessionBuilder, SessionConfig};
pub use crate::session::read_card;
pub use crate::transport::CardChannel;
pub use crate::{
    CommandTemplate, DecodeError, Error, ProtocolError, ProtocolVariant, Result, StatusWord,
    TransportError,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
