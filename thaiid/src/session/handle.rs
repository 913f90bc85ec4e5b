// thaiid/src/session/handle.rs
//! Type-state card session.
//!
//! A session owns the channel from `open` until it is dropped, so the
//! channel is closed exactly once on every path, including fatal errors.

use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::card::{
    CardRecord, FieldOutcome, PhotoBuffer, RecordSink, assemble_photo, read_photo,
    read_text_field, read_text_fields,
};
use crate::catalog::{FieldId, descriptor, select_applet_command};
use crate::error::ProtocolError;
use crate::protocol::exchange_command;
use crate::session::config::SessionConfig;
use crate::transport::CardChannel;
use crate::types::ProtocolVariant;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Type-state markers
pub struct Connected;
/// The national ID applet is selected; fields can be read
pub struct AppletSelected;

/// Owns the channel and closes it when dropped, whichever way the session
/// ends.
struct ChannelGuard {
    channel: Box<dyn CardChannel>,
}

impl ChannelGuard {
    fn channel(&mut self) -> &mut dyn CardChannel {
        &mut *self.channel
    }
}

impl Drop for ChannelGuard {
    fn drop(&mut self) {
        self.channel.close();
        debug!("card channel released");
    }
}

/// Card session that enforces applet selection at compile time.
///
/// `Session<Connected>` has read the ATR and fixed the protocol variant;
/// only `Session<AppletSelected>` can read fields.
pub struct Session<State = Connected> {
    guard: ChannelGuard,
    atr: Vec<u8>,
    variant: ProtocolVariant,
    config: SessionConfig,
    _state: PhantomData<State>,
}

impl Session<Connected> {
    /// Take ownership of an open channel, read the ATR and pick the
    /// protocol variant. The channel is closed if this fails.
    pub fn open(channel: Box<dyn CardChannel>, config: SessionConfig) -> Result<Self> {
        let guard = ChannelGuard { channel };
        let atr = guard.channel.answer_to_reset()?;
        let variant = config.resolve_variant(&atr);
        info!(
            "card connected, atr={} variant={}",
            bytes_to_hex_spaced(&atr),
            variant
        );

        Ok(Self {
            guard,
            atr,
            variant,
            config,
            _state: PhantomData,
        })
    }

    /// Select the national ID applet. The reply is not inspected; only a
    /// transport failure counts, and it ends the session.
    pub fn select_applet(self) -> Result<Session<AppletSelected>> {
        let mut this = self;
        exchange_command(this.guard.channel(), select_applet_command())?;
        debug!("applet selected");

        Ok(Session {
            guard: this.guard,
            atr: this.atr,
            variant: this.variant,
            config: this.config,
            _state: PhantomData,
        })
    }
}

impl Session<AppletSelected> {
    /// Read a single text field.
    pub fn read_field(&mut self, id: FieldId) -> FieldOutcome {
        let result = read_text_field(self.guard.channel(), descriptor(id), self.variant);
        if let Err(e) = &result {
            warn!("reading {} failed: {}", id, e);
        }
        FieldOutcome::from_result(result)
    }

    /// Read the photo with the configured segment policy.
    pub fn read_photo(&mut self) -> std::result::Result<PhotoBuffer, ProtocolError> {
        read_photo(self.guard.channel(), self.variant, self.config.segment_policy)
    }

    /// Read every text field and the photo, then release the channel.
    /// Individual field and segment failures are recorded in the record.
    pub fn scan(mut self) -> CardRecord {
        info!("scanning card ({} variant)", self.variant);
        let fields = read_text_fields(self.guard.channel(), self.variant);
        let photo = if self.config.read_photo {
            assemble_photo(
                self.guard.channel(),
                self.variant,
                self.config.segment_policy,
            )
        } else {
            PhotoBuffer::default()
        };

        let failed = fields.iter().filter(|f| f.outcome.is_failed()).count();
        info!(
            "scan done: {} fields ({} failed), photo {} bytes",
            fields.len(),
            failed,
            photo.len()
        );

        CardRecord {
            variant: self.variant,
            fields,
            photo,
        }
    }

    /// Scan and hand the record to `sink`.
    pub fn scan_into(self, sink: &mut dyn RecordSink) -> Result<CardRecord> {
        let record = self.scan();
        sink.accept(&record)?;
        Ok(record)
    }
}

impl<State> Session<State> {
    /// Answer-to-reset read when the session was opened.
    pub fn atr(&self) -> &[u8] {
        &self.atr
    }

    /// Protocol variant fixed for the lifetime of this session
    pub fn variant(&self) -> ProtocolVariant {
        self.variant
    }

    /// Configuration the session was opened with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

/// Open a session on `channel`, select the applet and scan the card.
pub fn read_card(channel: Box<dyn CardChannel>, config: SessionConfig) -> Result<CardRecord> {
    let session = Session::open(channel, config)?;
    Ok(session.select_applet()?.scan())
}
