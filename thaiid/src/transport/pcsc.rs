// thaiid/src/transport/pcsc.rs
//! PC/SC card channel (feature `pcsc`).

use std::ffi::{CStr, CString};

use log::{debug, info, warn};
use pcsc::{Attribute, Card, Context, Disposition, Protocols, Scope, ShareMode};

use crate::error::TransportError;
use crate::transport::traits::CardChannel;

impl From<pcsc::Error> for TransportError {
    fn from(err: pcsc::Error) -> Self {
        match err {
            pcsc::Error::NoSmartcard | pcsc::Error::RemovedCard => Self::CardAbsent,
            pcsc::Error::ReaderUnavailable
            | pcsc::Error::NoReadersAvailable
            | pcsc::Error::UnknownReader
            | pcsc::Error::InvalidHandle
            | pcsc::Error::NoService => Self::ChannelUnavailable,
            other => Self::Io(other.to_string()),
        }
    }
}

/// List the names of the PC/SC readers currently attached.
pub fn list_readers() -> Result<Vec<CString>, TransportError> {
    let ctx = Context::establish(Scope::User)?;
    Ok(ctx.list_readers_owned()?)
}

/// PC/SC backed card channel. Connects in shared mode with any protocol and
/// resets the card on close.
pub struct PcscTransport {
    card: Option<Card>,
    reader: String,
}

impl PcscTransport {
    /// Connect to the card inserted in `reader`.
    pub fn connect(reader: &CStr) -> Result<Self, TransportError> {
        let ctx = Context::establish(Scope::User)?;
        let card = ctx.connect(reader, ShareMode::Shared, Protocols::ANY)?;
        let reader = reader.to_string_lossy().into_owned();
        info!("connected to card in reader {}", reader);
        Ok(Self {
            card: Some(card),
            reader,
        })
    }

    /// Connect to the card in the first reader reported by PC/SC.
    pub fn open_first() -> Result<Self, TransportError> {
        let readers = list_readers()?;
        let reader = readers
            .first()
            .ok_or(TransportError::ChannelUnavailable)?;
        Self::connect(reader)
    }

    /// Name of the reader this channel is connected through.
    pub fn reader_name(&self) -> &str {
        &self.reader
    }

    fn card(&self) -> Result<&Card, TransportError> {
        self.card.as_ref().ok_or(TransportError::Closed)
    }
}

impl CardChannel for PcscTransport {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>, TransportError> {
        let card = self.card()?;
        let mut buf = [0u8; pcsc::MAX_BUFFER_SIZE];
        let resp = card.transmit(command, &mut buf)?;
        Ok(resp.to_vec())
    }

    fn answer_to_reset(&self) -> Result<Vec<u8>, TransportError> {
        let card = self.card()?;
        Ok(card.get_attribute_owned(Attribute::AtrString)?)
    }

    fn close(&mut self) {
        if let Some(card) = self.card.take() {
            match card.disconnect(Disposition::ResetCard) {
                Ok(()) => debug!("disconnected from reader {}", self.reader),
                // The card handle is dropped either way; pcsc releases it on drop.
                Err((_card, e)) => warn!("disconnect from {} failed: {}", self.reader, e),
            }
        }
    }
}

impl Drop for PcscTransport {
    fn drop(&mut self) {
        self.close();
    }
}
