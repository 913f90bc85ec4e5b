// thaiid/src/card/mod.rs
//! What a scan produces: decoded fields, the photo, and the operations that
//! read them from an open channel.

mod record;
mod sink;

pub mod operations;

pub use operations::{
    SegmentFailurePolicy, assemble_photo, read_photo, read_text_field, read_text_fields,
};
pub use record::{
    CardRecord, DecodedField, FALLBACK_TEXT_FILE, FieldOutcome, PhotoBuffer, SegmentFailure,
};
pub use sink::RecordSink;
