// thaiid/src/transport/traits.rs
//! The `CardChannel` trait.

use crate::error::TransportError;

/// CardChannel abstracts the physical reader away from protocol/session
/// logic. Exchanges are strictly request/response, one in flight at a time.
pub trait CardChannel {
    /// Send a command APDU and return the card's reply unmodified,
    /// status trailer included.
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>, TransportError>;

    /// Answer-to-reset reported by the card on connection.
    fn answer_to_reset(&self) -> Result<Vec<u8>, TransportError>;

    /// Release the channel. Calling this more than once is a no-op.
    fn close(&mut self);
}

impl<C: CardChannel + ?Sized> CardChannel for Box<C> {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>, TransportError> {
        (**self).exchange(command)
    }

    fn answer_to_reset(&self) -> Result<Vec<u8>, TransportError> {
        (**self).answer_to_reset()
    }

    fn close(&mut self) {
        (**self).close()
    }
}
