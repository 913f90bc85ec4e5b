// thaiid/src/card/record.rs

use std::fmt;

use crate::catalog::FieldId;
use crate::error::{Error, ProtocolError};
use crate::types::{ProtocolVariant, StatusWord};

/// Text artifact name used when the citizen id is missing
pub const FALLBACK_TEXT_FILE: &str = "data.txt";

/// Result of reading one text field.
///
/// An empty card field and a failed read are kept apart so the consumer
/// can decide how to treat each.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldOutcome {
    /// Decoded, non-empty text
    Present(String),
    /// The field held only padding
    Empty,
    /// The read or the decoding failed
    Failed(#[cfg_attr(feature = "serde", serde(serialize_with = "display_str"))] Error),
}

impl FieldOutcome {
    /// Classify a decoded (already trimmed) value or a read error.
    pub fn from_result(result: Result<String, Error>) -> Self {
        match result {
            Ok(text) if text.is_empty() => Self::Empty,
            Ok(text) => Self::Present(text),
            Err(e) => Self::Failed(e),
        }
    }

    /// Text value; empty for both `Empty` and `Failed`.
    pub fn text(&self) -> &str {
        match self {
            Self::Present(text) => text,
            Self::Empty | Self::Failed(_) => "",
        }
    }

    /// Failure cause, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// True for `Failed`.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One text field of a scanned card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedField {
    /// Which catalog field this is
    pub id: FieldId,
    /// Decoded value, emptiness or failure
    pub outcome: FieldOutcome,
    /// Status word of the GET RESPONSE, when the card answered one
    pub status: Option<StatusWord>,
}

impl DecodedField {
    /// Field without a recorded card status.
    pub fn new(id: FieldId, outcome: FieldOutcome) -> Self {
        Self {
            id,
            outcome,
            status: None,
        }
    }

    /// Attach the status word the card returned with the payload.
    pub fn with_status(mut self, status: StatusWord) -> Self {
        self.status = Some(status);
        self
    }

    /// Record label (`cid`, `thFullName`, ...).
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// True when the field came back empty because the card refused the
    /// read (non-9000 status) rather than because it holds no data.
    pub fn is_refused(&self) -> bool {
        self.outcome == FieldOutcome::Empty
            && self.status.is_some_and(|sw| !sw.is_success())
    }
}

/// A photo segment that could not be read (1-based segment number).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SegmentFailure {
    /// 1-based segment number
    pub segment: usize,
    /// Why the segment failed
    #[cfg_attr(feature = "serde", serde(serialize_with = "display_str"))]
    pub error: ProtocolError,
}

/// Photo bytes reassembled from the card segments, in segment order.
/// The bytes are passed through untouched (normally a JPEG stream).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhotoBuffer {
    /// Concatenated segment payloads
    pub bytes: Vec<u8>,
    /// Segments that could not be read, in read order
    pub failed_segments: Vec<SegmentFailure>,
}

impl PhotoBuffer {
    /// Raw photo bytes (normally JPEG).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of photo bytes collected.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when no segment contributed any byte.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when every segment contributed its payload.
    pub fn is_complete(&self) -> bool {
        self.failed_segments.is_empty()
    }
}

/// Everything read from one card: the nine text fields in catalog order
/// and the photo.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardRecord {
    /// GET RESPONSE variant the session used
    pub variant: ProtocolVariant,
    /// The nine text fields, in catalog order
    pub fields: Vec<DecodedField>,
    /// Reassembled photo
    pub photo: PhotoBuffer,
}

impl CardRecord {
    /// Outcome of field `id`.
    pub fn get(&self, id: FieldId) -> Option<&FieldOutcome> {
        self.fields.iter().find(|f| f.id == id).map(|f| &f.outcome)
    }

    /// Text of a field, empty when the field is empty, failed or missing.
    pub fn text(&self, id: FieldId) -> &str {
        self.get(id).map(FieldOutcome::text).unwrap_or("")
    }

    /// `(label, text)` pairs in catalog order, the string map handed to
    /// persistence.
    pub fn text_entries(&self) -> Vec<(&'static str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.label(), f.outcome.text()))
            .collect()
    }

    /// Fields whose read or decoding failed.
    pub fn failed_fields(&self) -> impl Iterator<Item = &DecodedField> {
        self.fields.iter().filter(|f| f.outcome.is_failed())
    }

    /// File name for the photo artifact: `<cid>.jpg`. `None` without a
    /// citizen id, since the image cannot be attributed then.
    pub fn photo_file_name(&self) -> Option<String> {
        self.citizen_id().map(|cid| format!("{}.jpg", cid))
    }

    /// File name for the text artifact: `<cid>.txt`, or `data.txt` when the
    /// citizen id could not be read. Always available so the text fields
    /// are persisted even for a partially read card.
    pub fn text_file_name(&self) -> String {
        match self.citizen_id() {
            Some(cid) => format!("{}.txt", cid),
            None => FALLBACK_TEXT_FILE.to_string(),
        }
    }

    fn citizen_id(&self) -> Option<&str> {
        match self.get(FieldId::CitizenId) {
            Some(FieldOutcome::Present(cid)) => Some(cid.as_str()),
            _ => None,
        }
    }
}

/// Renders `label: value` lines, one per text field.
impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, text) in self.text_entries() {
            writeln!(f, "{}: {}", label, text)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn display_str<T: fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
