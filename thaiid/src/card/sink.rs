// thaiid/src/card/sink.rs

use crate::Result;
use crate::card::CardRecord;

/// Downstream collaborator that persists a finished record (text file,
/// image file, database...). Storage format is up to the implementation.
pub trait RecordSink {
    /// Persist `record`. Errors are reported as `Error::Sink`.
    fn accept(&mut self, record: &CardRecord) -> Result<()>;
}

/// Any closure taking a record can act as a sink.
impl<F> RecordSink for F
where
    F: FnMut(&CardRecord) -> Result<()>,
{
    fn accept(&mut self, record: &CardRecord) -> Result<()> {
        self(record)
    }
}
