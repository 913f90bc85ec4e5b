// thaiid/src/protocol/apdu.rs
//! Command composition for the two-phase read.
//!
//! A field read is a locate (proprietary READ BINARY, CLA 0x80) followed by
//! a GET RESPONSE whose Le repeats the locate Le. The GET RESPONSE prefix
//! depends on the session's protocol variant, so it is built per call from
//! the immutable template instead of being stored with it.

use crate::constants::LOCATE_COMMAND_LEN;
use crate::types::{CommandTemplate, ProtocolVariant};

/// Encode the locate instruction for a template.
pub fn locate_command(template: &CommandTemplate) -> [u8; LOCATE_COMMAND_LEN] {
    template.locate_command()
}

/// Encode the GET RESPONSE paired with `template` for the given variant.
pub fn get_response_command(template: &CommandTemplate, variant: ProtocolVariant) -> [u8; 5] {
    let [cla, ins, p1, p2] = variant.prefix();
    let locate = template.locate_command();
    // Le of the locate instruction is its last byte
    [cla, ins, p1, p2, locate[LOCATE_COMMAND_LEN - 1]]
}
