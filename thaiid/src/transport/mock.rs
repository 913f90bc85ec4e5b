// thaiid/src/transport/mock.rs
//! Scripted in-memory channel for tests.

use std::collections::VecDeque;

use crate::error::TransportError;
use crate::transport::traits::CardChannel;

/// Mock channel for unit tests. It records sent commands and returns queued
/// replies in order; a queued `Err` makes that one exchange fail.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Commands received, oldest first
    pub sent: Vec<Vec<u8>>,
    /// Replies handed out in order, one per exchange
    pub responses: VecDeque<Result<Vec<u8>, TransportError>>,
    /// Answer-to-reset reported by the card
    pub atr: Vec<u8>,
    /// Testing hook: make `answer_to_reset` fail with this error
    pub atr_error: Option<TransportError>,
    /// Number of times `close` was called (including repeated calls)
    pub close_calls: usize,
    closed: bool,
}

impl MockTransport {
    /// Mock with an empty ATR and no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock card reporting `atr` as its answer-to-reset.
    pub fn with_atr(atr: Vec<u8>) -> Self {
        Self {
            atr,
            ..Self::default()
        }
    }

    /// Queue a successful reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue a failing exchange.
    pub fn push_error(&mut self, err: TransportError) {
        self.responses.push_back(Err(err));
    }

    /// Take the most recent command.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// True once `close` was called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl CardChannel for MockTransport {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>, TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.sent.push(command.to_vec());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Io("no response queued".into())))
    }

    fn answer_to_reset(&self) -> Result<Vec<u8>, TransportError> {
        match &self.atr_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.atr.clone()),
        }
    }

    fn close(&mut self) {
        self.close_calls += 1;
        self.closed = true;
    }
}
