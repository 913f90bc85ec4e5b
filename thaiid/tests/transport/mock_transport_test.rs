#[path = "../common/mod.rs"]
mod common;

use thaiid::TransportError;
use thaiid::transport::CardChannel;
use thaiid::transport::mock::MockTransport;

#[test]
fn mock_transport_exchange_records_commands() {
    let mut m = MockTransport::with_atr(common::fixtures::extended_atr());
    m.push_response(vec![0x61, 0x0A]);
    let r = m.exchange(&common::fixtures::select_command()).unwrap();
    assert_eq!(r, vec![0x61, 0x0A]);
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.pop_sent(), Some(common::fixtures::select_command()));
    assert_eq!(
        m.answer_to_reset().unwrap(),
        common::fixtures::extended_atr()
    );
}

#[test]
fn empty_queue_is_an_io_fault() {
    let mut m = MockTransport::new();
    assert!(matches!(m.exchange(&[0x00]), Err(TransportError::Io(_))));
}

#[test]
fn boxed_channel_delegates() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x90, 0x00]);
    let mut boxed: Box<dyn CardChannel> = Box::new(m);
    assert_eq!(boxed.exchange(&[0x01]).unwrap(), vec![0x90, 0x00]);
    boxed.close();
    assert_eq!(boxed.exchange(&[0x01]), Err(TransportError::Closed));
}
