#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use serial_test::serial;
use thaiid::catalog::FieldId;
use thaiid::transport::pcsc::list_readers;
use thaiid::{FieldOutcome, Result};

// These tests need a reader with a Thai ID card inserted. They are marked
// `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p thaiid --test hardware --features pcsc -- --ignored
//

#[test]
#[ignore]
#[serial]
fn list_attached_readers() -> Result<()> {
    common::init_logger();
    for reader in list_readers()? {
        log::info!("reader: {}", reader.to_string_lossy());
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn citizen_id_is_thirteen_digits() -> Result<()> {
    common::init_logger();
    let Some(mut session) = common::open_selected_session()? else {
        return Ok(());
    };
    match session.read_field(FieldId::CitizenId) {
        FieldOutcome::Present(cid) => {
            assert_eq!(cid.len(), 13);
            assert!(cid.chars().all(|c| c.is_ascii_digit()));
        }
        other => panic!("unexpected citizen id outcome: {:?}", other),
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn full_scan_reads_a_jpeg() -> Result<()> {
    common::init_logger();
    let Some(session) = common::open_selected_session()? else {
        return Ok(());
    };
    let record = session.scan();
    assert_eq!(record.failed_fields().count(), 0);
    assert!(record.photo.is_complete());
    assert_eq!(&record.photo.as_bytes()[..2], &[0xFF, 0xD8]);
    Ok(())
}
