#![cfg(feature = "pcsc")]

//! Read the Thai ID card in the first PC/SC reader, print its text fields
//! and store `<cid>.txt` (or `data.txt`) and `<cid>.jpg` in the output
//! directory.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p thaiid --example read_card --features pcsc -- [OUT_DIR]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use thaiid::transport::PcscTransport;
use thaiid::transport::pcsc::list_readers;
use thaiid::{CardRecord, SessionBuilder};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let readers = list_readers().context("listing PC/SC readers")?;
    if readers.is_empty() {
        println!("No smart card reader attached");
        return Ok(());
    }
    for reader in &readers {
        println!("Reader: {}", reader.to_string_lossy());
    }

    let transport = PcscTransport::open_first().context("connecting to card")?;
    println!("Using reader {}", transport.reader_name());

    let session = SessionBuilder::new()
        .with_channel(Box::new(transport))
        .open()?
        .select_applet()?;
    println!("ATR: {}", thaiid::bytes_to_hex_spaced(session.atr()));

    // Report before persisting so a storage failure never hides the fields
    let mut report_and_save = |record: &CardRecord| -> thaiid::Result<()> {
        report(record);
        save_record(&out_dir, record).map_err(|e| thaiid::Error::Sink(format!("{:#}", e)))
    };
    session.scan_into(&mut report_and_save)?;
    Ok(())
}

fn report(record: &CardRecord) {
    print!("{}", record);
    for failed in record.failed_fields() {
        println!("! {} could not be read", failed.label());
    }
    if !record.photo.is_complete() {
        println!(
            "! photo incomplete, missing segments {:?}",
            record
                .photo
                .failed_segments
                .iter()
                .map(|f| f.segment)
                .collect::<Vec<_>>()
        );
    }
}

fn save_record(out_dir: &Path, record: &CardRecord) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)?;

    let text_path = out_dir.join(record.text_file_name());
    fs::write(&text_path, record.to_string())
        .with_context(|| format!("writing {}", text_path.display()))?;
    println!("Saved {}", text_path.display());

    match record.photo_file_name() {
        Some(_) if record.photo.is_empty() => println!("! no photo data"),
        Some(photo_name) => {
            let photo_path = out_dir.join(photo_name);
            fs::write(&photo_path, record.photo.as_bytes())
                .with_context(|| format!("writing {}", photo_path.display()))?;
            println!("Saved {}", photo_path.display());
        }
        None => println!("! citizen id missing, photo not saved"),
    }
    Ok(())
}
