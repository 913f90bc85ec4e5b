//! Text field reads: fetch, decode, classify.
use log::{debug, warn};

use crate::catalog::{FieldDescriptor, FieldId, descriptor};
use crate::card::{DecodedField, FieldOutcome};
use crate::charset::decode_text;
use crate::protocol::read_response;
use crate::transport::CardChannel;
use crate::types::{ProtocolVariant, StatusWord};
use crate::{Error, Result};

/// Read and decode one text field.
pub fn read_text_field(
    channel: &mut dyn CardChannel,
    field: &FieldDescriptor,
    variant: ProtocolVariant,
) -> Result<String> {
    read_decoded(channel, field, variant).0
}

/// Decode result plus the card's status word, if a GET RESPONSE came back.
fn read_decoded(
    channel: &mut dyn CardChannel,
    field: &FieldDescriptor,
    variant: ProtocolVariant,
) -> (Result<String>, Option<StatusWord>) {
    match read_response(channel, &field.template, variant) {
        Ok((payload, sw)) => (decode_text(&payload).map_err(Error::from), Some(sw)),
        Err(e) => (Err(e.into()), None),
    }
}

/// Read every text field in catalog order. A failing field is logged and
/// recorded as `Failed`; the loop always moves on to the next field.
pub fn read_text_fields(
    channel: &mut dyn CardChannel,
    variant: ProtocolVariant,
) -> Vec<DecodedField> {
    FieldId::ALL
        .iter()
        .map(|&id| {
            let (result, status) = read_decoded(channel, descriptor(id), variant);
            match &result {
                Ok(text) => debug!("{}: {} chars", id, text.chars().count()),
                Err(e) => warn!("reading {} failed: {}", id, e),
            }
            DecodedField {
                id,
                outcome: FieldOutcome::from_result(result),
                status,
            }
        })
        .collect()
}
