#[path = "../common/mod.rs"]
mod common;

use std::collections::BTreeMap;

use thaiid::catalog::FieldId;
use thaiid::{CardRecord, Error, RecordSink};

use common::{fixtures, helpers};

#[test]
fn closure_sink_receives_text_map_and_photo() {
    let (_, channel) = helpers::shared_simulated_card(fixtures::default_atr());
    let session = helpers::selected_session(channel);

    let mut stored: BTreeMap<String, String> = BTreeMap::new();
    let mut photo: Option<(String, usize)> = None;
    let mut sink = |record: &CardRecord| -> thaiid::Result<()> {
        for (label, text) in record.text_entries() {
            stored.insert(label.to_string(), text.to_string());
        }
        photo = record
            .photo_file_name()
            .map(|name| (name, record.photo.len()));
        Ok(())
    };

    let record = session.scan_into(&mut sink).unwrap();
    assert_eq!(stored.len(), 9);
    assert_eq!(
        stored.get("thFullName").map(String::as_str),
        Some(fixtures::sample_text(FieldId::ThaiFullName).as_str())
    );
    assert_eq!(photo, Some(("1101700203451.jpg".to_string(), 20 * 0xFF)));
    assert_eq!(record.text(FieldId::CitizenId), "1101700203451");
}

struct FailingSink;

impl RecordSink for FailingSink {
    fn accept(&mut self, _record: &CardRecord) -> thaiid::Result<()> {
        Err(Error::Sink("read-only store".into()))
    }
}

#[test]
fn sink_error_is_returned() {
    let (shared, channel) = helpers::shared_simulated_card(fixtures::default_atr());
    let session = helpers::selected_session(channel);

    let err = session.scan_into(&mut FailingSink).unwrap_err();
    assert_eq!(err, Error::Sink("read-only store".into()));
    assert_eq!(shared.borrow().close_calls, 1);
}
