// thaiid/src/protocol/frame.rs
//! Status trailer (SW1 SW2) handling.

use crate::constants::STATUS_TRAILER_LEN;
use crate::error::ProtocolError;
use crate::types::StatusWord;

/// Split a raw response into payload and status word.
/// Format: [Payload(n)] [SW1(1)] [SW2(1)]
pub fn split_trailer(raw: &[u8]) -> Result<(&[u8], StatusWord), ProtocolError> {
    if raw.len() < STATUS_TRAILER_LEN {
        return Err(ProtocolError::ShortResponse { actual: raw.len() });
    }
    let (payload, trailer) = raw.split_at(raw.len() - STATUS_TRAILER_LEN);
    Ok((payload, StatusWord::new(trailer[0], trailer[1])))
}

/// Remove exactly the last two bytes, whatever their value.
pub fn strip_trailer(raw: &[u8]) -> Result<&[u8], ProtocolError> {
    split_trailer(raw).map(|(payload, _)| payload)
}
