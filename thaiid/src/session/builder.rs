// thaiid/src/session/builder.rs
//! Builder for `Session`.

use crate::session::config::SessionConfig;
use crate::session::handle::{Connected, Session};
use crate::transport::CardChannel;
use crate::types::ProtocolVariant;
use crate::card::SegmentFailurePolicy;
use crate::{Error, Result};

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    channel: Option<Box<dyn CardChannel>>,
    config: SessionConfig,
}

impl SessionBuilder {
    /// Empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-open channel (PcscTransport, MockTransport...)
    pub fn with_channel(mut self, channel: Box<dyn CardChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Force a protocol variant instead of deriving it from the ATR.
    pub fn with_variant(mut self, variant: ProtocolVariant) -> Self {
        self.config = self.config.with_variant(variant);
        self
    }

    /// Set the photo segment failure policy.
    pub fn with_segment_policy(mut self, policy: SegmentFailurePolicy) -> Self {
        self.config = self.config.with_segment_policy(policy);
        self
    }

    /// Consume the builder and open the session.
    /// Requires a channel to be provided; otherwise returns ChannelNotProvided.
    pub fn open(self) -> Result<Session<Connected>> {
        match self.channel {
            Some(channel) => Session::open(channel, self.config),
            None => Err(Error::ChannelNotProvided),
        }
    }
}
