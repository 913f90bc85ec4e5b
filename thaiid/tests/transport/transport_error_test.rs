#[path = "../common/mod.rs"]
mod common;

use thaiid::{Error, ProtocolError, TransportError};

#[test]
fn transport_error_display() {
    assert_eq!(
        TransportError::CardAbsent.to_string(),
        "no card present in reader"
    );
    assert!(
        TransportError::Io("timeout".into())
            .to_string()
            .contains("timeout")
    );
}

#[test]
fn transport_error_lifts_into_error() {
    let e: Error = TransportError::Closed.into();
    assert_eq!(e, Error::Transport(TransportError::Closed));

    let p: Error = ProtocolError::from(TransportError::Closed).into();
    assert_eq!(
        p,
        Error::Protocol(ProtocolError::Transport(TransportError::Closed))
    );
    // Transparent: the outer error shows the inner message
    assert_eq!(
        Error::from(TransportError::ChannelUnavailable).to_string(),
        "card channel unavailable"
    );
}
