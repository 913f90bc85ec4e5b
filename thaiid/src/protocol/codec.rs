// thaiid/src/protocol/codec.rs
//! Request/response exchange and the locate + GET RESPONSE read.

use log::{debug, trace};

use crate::error::{ProtocolError, TransportError};
use crate::transport::CardChannel;
use crate::types::{CommandTemplate, ProtocolVariant, StatusWord};
use crate::utils::bytes_to_hex_spaced;

use super::apdu::{get_response_command, locate_command};
use super::frame::split_trailer;

/// Send one command and return the raw reply, tracing both directions.
pub fn exchange_command(
    channel: &mut dyn CardChannel,
    command: &[u8],
) -> Result<Vec<u8>, TransportError> {
    trace!(">> {}", bytes_to_hex_spaced(command));
    let resp = channel.exchange(command)?;
    trace!("<< {}", bytes_to_hex_spaced(&resp));
    Ok(resp)
}

/// Read one data object: locate it, then fetch it with GET RESPONSE and
/// return the payload without its status trailer.
pub fn read_field(
    channel: &mut dyn CardChannel,
    template: &CommandTemplate,
    variant: ProtocolVariant,
) -> Result<Vec<u8>, ProtocolError> {
    read_response(channel, template, variant).map(|(payload, _)| payload)
}

/// Same exchange as `read_field`, also returning the GET RESPONSE status
/// word. The trailer is stripped whatever its value; callers that need to
/// tell a refused read from an empty field look at the status.
pub fn read_response(
    channel: &mut dyn CardChannel,
    template: &CommandTemplate,
    variant: ProtocolVariant,
) -> Result<(Vec<u8>, StatusWord), ProtocolError> {
    // The locate reply only acknowledges the request; the data comes with
    // GET RESPONSE.
    let ack = exchange_command(channel, &locate_command(template))?;
    if let Ok((_, sw)) = split_trailer(&ack) {
        trace!("locate {:#06x}: sw={}", template.offset(), sw);
    }

    let resp = exchange_command(channel, &get_response_command(template, variant))?;
    let (payload, sw) = split_trailer(&resp)?;
    if !sw.is_success() {
        debug!(
            "get response for {:#06x} returned sw={} ({} payload bytes)",
            template.offset(),
            sw,
            payload.len()
        );
    }
    Ok((payload.to_vec(), sw))
}
