// helpers.rs: session construction shortcuts

use std::cell::RefCell;
use std::rc::Rc;

use thaiid::session::{AppletSelected, Session, SessionConfig};
use thaiid::test_support::{SharedTransport, SimulatedCard, seed_card};
use thaiid::transport::CardChannel;
use thaiid::transport::mock::MockTransport;

use super::fixtures;

/// MockTransport seeded with a full scan of the sample card. The transport
/// is shared so the test can inspect it after the session dropped it.
pub fn shared_mock_card(
    atr: Vec<u8>,
    failed_segment: Option<usize>,
) -> (Rc<RefCell<MockTransport>>, Box<dyn CardChannel>) {
    let inner = Rc::new(RefCell::new(MockTransport::with_atr(atr)));
    seed_card(
        &mut inner.borrow_mut(),
        &fixtures::sample_fields(),
        failed_segment,
    );
    let channel: Box<dyn CardChannel> = Box::new(SharedTransport::new(Rc::clone(&inner)));
    (inner, channel)
}

/// Sample card holding the sample photo.
pub fn simulated_card(atr: Vec<u8>) -> SimulatedCard {
    SimulatedCard::with_record(atr, &fixtures::sample_fields(), &fixtures::sample_photo())
}

pub fn selected_session(channel: Box<dyn CardChannel>) -> Session<AppletSelected> {
    Session::open(channel, SessionConfig::default())
        .and_then(|s| s.select_applet())
        .unwrap()
}

/// Split a command log into the GET RESPONSE commands only.
pub fn get_responses(log: &[Vec<u8>]) -> Vec<Vec<u8>> {
    log.iter()
        .filter(|c| c.len() == 5 && c[..2] == [0x00, 0xC0])
        .cloned()
        .collect()
}

/// Offsets addressed by the locate commands in a command log.
pub fn locate_offsets(log: &[Vec<u8>]) -> Vec<u16> {
    log.iter()
        .filter(|c| c.len() == 7 && c[..2] == [0x80, 0xB0])
        .map(|c| u16::from_be_bytes([c[2], c[3]]))
        .collect()
}

/// Simulated sample card wrapped so its command log survives the session.
pub fn shared_simulated_card(
    atr: Vec<u8>,
) -> (Rc<RefCell<SimulatedCard>>, Box<dyn CardChannel>) {
    let inner = Rc::new(RefCell::new(simulated_card(atr)));
    let channel: Box<dyn CardChannel> = Box::new(SharedTransport::new(Rc::clone(&inner)));
    (inner, channel)
}
