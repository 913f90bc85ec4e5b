#[path = "../common/mod.rs"]
mod common;

use thaiid::catalog::{FieldId, PHOTO_SEGMENTS, TEXT_FIELDS};
use thaiid::session::SessionConfig;
use thaiid::test_support::photo_segment_payload;
use thaiid::{FieldOutcome, read_card};

use common::{fixtures, helpers};

#[test]
fn full_scan_decodes_every_field() {
    let (_, channel) = helpers::shared_simulated_card(fixtures::default_atr());
    let record = read_card(channel, SessionConfig::default()).unwrap();

    assert_eq!(record.fields.len(), TEXT_FIELDS.len());
    for (id, text) in fixtures::sample_fields() {
        assert_eq!(record.text(id), text, "{}", id);
    }
    assert_eq!(record.failed_fields().count(), 0);
    assert_eq!(record.photo.as_bytes(), fixtures::sample_photo().as_slice());
    assert!(record.photo.is_complete());
}

#[test]
fn commands_follow_catalog_order() {
    let (shared, channel) = helpers::shared_simulated_card(fixtures::default_atr());
    read_card(channel, SessionConfig::default()).unwrap();

    let card = shared.borrow();
    assert_eq!(card.log[0], fixtures::select_command());

    let expected: Vec<u16> = TEXT_FIELDS
        .iter()
        .map(|d| d.template)
        .chain(PHOTO_SEGMENTS.iter().copied())
        .map(|t| t.offset())
        .collect();
    assert_eq!(helpers::locate_offsets(&card.log), expected);

    // Every locate is immediately followed by its GET RESPONSE
    for pair in card.log[1..].chunks(2) {
        assert_eq!(pair[0].len(), 7);
        assert_eq!(pair[1].len(), 5);
        assert_eq!(pair[0][6], pair[1][4]);
    }
    assert_eq!(card.log.len(), 1 + 2 * (9 + 20));
    assert_eq!(card.close_calls, 1);
}

#[test]
fn photo_segments_concatenate_in_order() {
    let (_, channel) = helpers::shared_mock_card(fixtures::default_atr(), None);
    let record = read_card(channel, SessionConfig::default()).unwrap();

    let expected: Vec<u8> = (1..=20).flat_map(photo_segment_payload).collect();
    assert_eq!(record.photo.len(), 20 * 0xFF);
    assert_eq!(record.photo.as_bytes(), expected.as_slice());
}

#[test]
fn failed_segment_is_salvaged() {
    let (shared, channel) = helpers::shared_mock_card(fixtures::default_atr(), Some(7));
    let record = read_card(channel, SessionConfig::default()).unwrap();

    // All nine text fields still decode
    assert!(
        record
            .fields
            .iter()
            .all(|f| matches!(f.outcome, FieldOutcome::Present(_)))
    );
    assert_eq!(record.text(FieldId::Gender), "1");

    let expected: Vec<u8> = (1..=20)
        .filter(|s| *s != 7)
        .flat_map(photo_segment_payload)
        .collect();
    assert_eq!(record.photo.len(), 19 * 0xFF);
    assert_eq!(record.photo.as_bytes(), expected.as_slice());
    assert_eq!(record.photo.failed_segments.len(), 1);
    assert_eq!(record.photo.failed_segments[0].segment, 7);

    // The scan went on after the failure
    assert_eq!(shared.borrow().sent.len(), 1 + 2 * (9 + 20));
}

#[test]
fn scan_without_photo() {
    let (shared, channel) = helpers::shared_simulated_card(fixtures::default_atr());
    let record = read_card(channel, SessionConfig::new().with_photo(false)).unwrap();

    assert!(record.photo.is_empty());
    assert_eq!(record.text(FieldId::CitizenId), "1101700203451");
    assert_eq!(shared.borrow().log.len(), 1 + 2 * 9);
}

#[test]
fn record_renders_label_lines() {
    let (_, channel) = helpers::shared_simulated_card(fixtures::default_atr());
    let record = read_card(channel, SessionConfig::default()).unwrap();

    let rendered = record.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "cid: 1101700203451");
    assert_eq!(lines[4], "gender: 1");
    assert_eq!(record.photo_file_name().as_deref(), Some("1101700203451.jpg"));
}
