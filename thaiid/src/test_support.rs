//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport seeding and provide a small
//! in-memory card so tests across the crate and tests/ directory can share
//! the same fixtures.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::catalog::{FieldId, PHOTO_SEGMENTS, descriptor};
use crate::charset::encode_text;
use crate::constants::{PHOTO_SEGMENT_LEN, SELECT_THAI_ID_APPLET};
use crate::error::TransportError;
use crate::transport::CardChannel;
use crate::transport::mock::MockTransport;
use crate::types::ProtocolVariant;

/// Field values of the sample card used throughout the tests.
#[doc(hidden)]
pub fn sample_fields() -> Vec<(FieldId, String)> {
    vec![
        (FieldId::CitizenId, "1101700203451".into()),
        (FieldId::ThaiFullName, "นาย#สมชาย##ใจดี".into()),
        (FieldId::EnglishFullName, "Mr.#Somchai##Jaidee".into()),
        (FieldId::DateOfBirth, "25250115".into()),
        (FieldId::Gender, "1".into()),
        (FieldId::Issuer, "สำนักงานเขตบางรัก/กรุงเทพมหานคร".into()),
        (FieldId::IssueDate, "25630301".into()),
        (FieldId::ExpireDate, "25720114".into()),
        (FieldId::Address, "99/9#หมู่ที่ 4####ตำบลบางรัก#อำเภอบางรัก#จังหวัดกรุงเทพมหานคร".into()),
    ]
}

/// Encode `text` the way the card stores it: codepage bytes, space padded
/// to the field's declared length.
#[doc(hidden)]
pub fn card_text(id: FieldId, text: &str) -> Vec<u8> {
    let len = descriptor(id).template.length() as usize;
    let mut bytes = encode_text(text).unwrap_or_default();
    bytes.resize(len, b' ');
    bytes
}

/// Distinct, recognisable content for 1-based photo segment `segment`.
#[doc(hidden)]
pub fn photo_segment_payload(segment: usize) -> Vec<u8> {
    (0..PHOTO_SEGMENT_LEN as usize)
        .map(|i| (segment * 7 + i) as u8)
        .collect()
}

fn with_success(mut payload: Vec<u8>) -> Vec<u8> {
    payload.extend_from_slice(&[0x90, 0x00]);
    payload
}

/// Queue the replies of a full scan on a MockTransport: applet selection,
/// then locate/get-response pairs for the nine text fields and the twenty
/// photo segments. Fields missing from `fields` read as all spaces. The
/// GET RESPONSE of `failed_segment` (1-based) fails at transport level.
#[doc(hidden)]
pub fn seed_card(
    mock: &mut MockTransport,
    fields: &[(FieldId, String)],
    failed_segment: Option<usize>,
) {
    mock.push_response(vec![0x61, 0x0A]);

    for id in FieldId::ALL {
        let text = fields
            .iter()
            .find(|(f, _)| *f == id)
            .map(|(_, t)| t.as_str())
            .unwrap_or("");
        let payload = card_text(id, text);
        mock.push_response(vec![0x61, payload.len() as u8]);
        mock.push_response(with_success(payload));
    }

    for segment in 1..=PHOTO_SEGMENTS.len() {
        mock.push_response(vec![0x61, PHOTO_SEGMENT_LEN]);
        if Some(segment) == failed_segment {
            mock.push_error(TransportError::Io("segment read timeout".into()));
        } else {
            mock.push_response(with_success(photo_segment_payload(segment)));
        }
    }
}

/// Channel wrapper that delegates into a shared channel (by default a
/// MockTransport) so a test can inspect it after a Session took ownership.
#[doc(hidden)]
pub struct SharedTransport<C = MockTransport> {
    inner: Rc<RefCell<C>>,
}

impl<C> SharedTransport<C> {
    /// Wrap a shared channel.
    pub fn new(inner: Rc<RefCell<C>>) -> Self {
        Self { inner }
    }
}

impl<C: CardChannel> CardChannel for SharedTransport<C> {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.inner.borrow_mut().exchange(command)
    }

    fn answer_to_reset(&self) -> Result<Vec<u8>, TransportError> {
        self.inner.borrow().answer_to_reset()
    }

    fn close(&mut self) {
        self.inner.borrow_mut().close()
    }
}

/// In-memory Thai ID card. Unlike MockTransport it answers by command
/// content: locate remembers the requested offset/length, GET RESPONSE
/// returns that slice of memory. It only accepts the GET RESPONSE prefix
/// matching its own ATR and refuses reads before applet selection.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct SimulatedCard {
    /// Answer-to-reset reported by the card
    pub atr: Vec<u8>,
    /// Card memory keyed by data object offset
    pub memory: BTreeMap<u16, Vec<u8>>,
    /// Offsets whose locate command fails at transport level
    pub failing_offsets: Vec<u16>,
    /// Every command received, in order
    pub log: Vec<Vec<u8>>,
    /// Number of `close` calls seen
    pub close_calls: usize,
    pending: Option<(u16, u8)>,
    selected: bool,
    closed: bool,
}

impl SimulatedCard {
    /// Empty card answering with `atr`.
    pub fn new(atr: Vec<u8>) -> Self {
        Self {
            atr,
            ..Self::default()
        }
    }

    /// A card holding `fields` and `photo` (split into 0xFF-byte segments,
    /// the last one zero padded).
    pub fn with_record(atr: Vec<u8>, fields: &[(FieldId, String)], photo: &[u8]) -> Self {
        let mut card = Self::new(atr);
        for (id, text) in fields {
            card.memory
                .insert(descriptor(*id).template.offset(), card_text(*id, text));
        }
        for (template, chunk) in PHOTO_SEGMENTS
            .iter()
            .zip(photo.chunks(PHOTO_SEGMENT_LEN as usize))
        {
            let mut chunk = chunk.to_vec();
            chunk.resize(PHOTO_SEGMENT_LEN as usize, 0);
            card.memory.insert(template.offset(), chunk);
        }
        card
    }

    fn variant(&self) -> ProtocolVariant {
        ProtocolVariant::from_atr(&self.atr)
    }
}

impl CardChannel for SimulatedCard {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>, TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.log.push(command.to_vec());

        if command == SELECT_THAI_ID_APPLET {
            self.selected = true;
            return Ok(vec![0x61, 0x0A]);
        }

        match command {
            [0x80, 0xB0, hi, lo, 0x02, 0x00, le] => {
                if !self.selected {
                    return Ok(vec![0x69, 0x85]);
                }
                let offset = u16::from_be_bytes([*hi, *lo]);
                if self.failing_offsets.contains(&offset) {
                    return Err(TransportError::Io(format!("read at {:#06x} failed", offset)));
                }
                self.pending = Some((offset, *le));
                Ok(vec![0x61, *le])
            }
            [cla, ins, p1, p2, le] if [*cla, *ins] == [0x00, 0xC0] => {
                if [*cla, *ins, *p1, *p2] != self.variant().prefix() {
                    return Ok(vec![0x6D, 0x00]);
                }
                let Some((offset, requested)) = self.pending.take() else {
                    return Ok(vec![0x6F, 0x00]);
                };
                let len = (*le).min(requested) as usize;
                let mut data = self
                    .memory
                    .get(&offset)
                    .cloned()
                    .unwrap_or_else(|| vec![b' '; len]);
                data.resize(len, b' ');
                Ok(with_success(data))
            }
            _ => Ok(vec![0x6D, 0x00]),
        }
    }

    fn answer_to_reset(&self) -> Result<Vec<u8>, TransportError> {
        Ok(self.atr.clone())
    }

    fn close(&mut self) {
        self.close_calls += 1;
        self.closed = true;
    }
}
