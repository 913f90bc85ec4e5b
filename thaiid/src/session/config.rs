//! Session configuration

use crate::card::SegmentFailurePolicy;
use crate::types::ProtocolVariant;

/// Default photo segment failure handling
pub const DEFAULT_SEGMENT_POLICY: SegmentFailurePolicy = SegmentFailurePolicy::Salvage;

/// Options applied to one card session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Force a GET RESPONSE variant instead of deriving it from the ATR.
    /// Useful for readers that report a rewritten ATR.
    pub variant: Option<ProtocolVariant>,

    /// How the photo read reacts to a failed segment
    pub segment_policy: SegmentFailurePolicy,

    /// Skip the photo entirely (text fields only)
    pub read_photo: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: None,
            segment_policy: DEFAULT_SEGMENT_POLICY,
            read_photo: true,
        }
    }
}

impl SessionConfig {
    /// Same as `Default`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a protocol variant instead of deriving it from the ATR.
    pub const fn with_variant(mut self, variant: ProtocolVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the photo segment failure policy.
    pub const fn with_segment_policy(mut self, policy: SegmentFailurePolicy) -> Self {
        self.segment_policy = policy;
        self
    }

    /// Enable or skip the photo read.
    pub const fn with_photo(mut self, read_photo: bool) -> Self {
        self.read_photo = read_photo;
        self
    }

    /// Variant to use for a card with the given ATR.
    pub fn resolve_variant(&self, atr: &[u8]) -> ProtocolVariant {
        self.variant.unwrap_or_else(|| ProtocolVariant::from_atr(atr))
    }
}
