#[path = "../common/mod.rs"]
mod common;

use thaiid::catalog::{FieldId, descriptor};
use thaiid::card::read_text_field;
use thaiid::protocol::read_field;
use thaiid::transport::CardChannel;
use thaiid::transport::mock::MockTransport;
use thaiid::{DecodeError, Error, ProtocolError, ProtocolVariant, TransportError};

#[test]
fn read_field_returns_payload_without_trailer() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x61, 0x01]);
    m.push_response(vec![b'2', 0x90, 0x00]);

    let t = descriptor(FieldId::Gender).template;
    let payload = read_field(&mut m, &t, ProtocolVariant::Default).unwrap();
    assert_eq!(payload, b"2");
    assert_eq!(m.sent[0], t.locate_command().to_vec());
    assert_eq!(m.sent[1], vec![0x00, 0xC0, 0x00, 0x00, 0x01]);
}

#[test]
fn locate_reply_content_is_ignored() {
    let mut m = MockTransport::new();
    // Nonsense (even too short) acknowledgement
    m.push_response(vec![0x6A]);
    m.push_response(vec![b'1', 0x90, 0x00]);

    let t = descriptor(FieldId::Gender).template;
    assert_eq!(
        read_field(&mut m, &t, ProtocolVariant::Extended).unwrap(),
        b"1"
    );
}

#[test]
fn locate_transport_failure_skips_get_response() {
    let mut m = MockTransport::new();
    m.push_error(TransportError::CardAbsent);

    let t = descriptor(FieldId::CitizenId).template;
    let err = read_field(&mut m, &t, ProtocolVariant::Default).unwrap_err();
    assert_eq!(err, ProtocolError::Transport(TransportError::CardAbsent));
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn text_field_with_invalid_byte_fails_decoding() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x61, 0x0D]);
    let mut payload = b"110170".to_vec();
    payload.push(0xFC);
    payload.extend_from_slice(b"      \x90\x00");
    m.push_response(payload);

    let channel: &mut dyn CardChannel = &mut m;
    let err = read_text_field(
        channel,
        descriptor(FieldId::CitizenId),
        ProtocolVariant::Default,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::InvalidByte {
            byte: 0xFC,
            position: 6
        })
    );
}

#[test]
fn all_space_field_decodes_to_empty() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x61, 0x08]);
    m.push_response(b"        \x90\x00".to_vec());

    let text = read_text_field(
        &mut m,
        descriptor(FieldId::ExpireDate),
        ProtocolVariant::Default,
    )
    .unwrap();
    assert!(text.is_empty());
}
