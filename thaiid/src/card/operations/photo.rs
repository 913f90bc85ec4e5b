//! Photo reassembly from the fixed segment table.
use log::{debug, warn};

use crate::card::{PhotoBuffer, SegmentFailure};
use crate::catalog::PHOTO_SEGMENTS;
use crate::constants::PHOTO_SEGMENT_LEN;
use crate::error::ProtocolError;
use crate::protocol::read_field;
use crate::transport::CardChannel;
use crate::types::ProtocolVariant;

/// What to do when one photo segment cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentFailurePolicy {
    /// Log and record the failure, skip the segment and keep reading. The
    /// image is then truncated but the rest of the scan is unaffected.
    #[default]
    Salvage,
    /// Stop at the first failed segment and return its error.
    Abort,
}

/// Read the 20 photo segments in ascending order and concatenate them.
///
/// With `Abort` the first failure is returned as the error; with `Salvage`
/// failures are listed in the returned buffer.
pub fn read_photo(
    channel: &mut dyn CardChannel,
    variant: ProtocolVariant,
    policy: SegmentFailurePolicy,
) -> Result<PhotoBuffer, ProtocolError> {
    let photo = assemble_photo(channel, variant, policy);
    if policy == SegmentFailurePolicy::Abort {
        if let Some(failure) = photo.failed_segments.first() {
            return Err(failure.error.clone());
        }
    }
    Ok(photo)
}

/// Like `read_photo` but never fails: under `Abort` a failed segment
/// discards the partial image and is reported in `failed_segments`.
pub fn assemble_photo(
    channel: &mut dyn CardChannel,
    variant: ProtocolVariant,
    policy: SegmentFailurePolicy,
) -> PhotoBuffer {
    let mut photo = PhotoBuffer {
        bytes: Vec::with_capacity(PHOTO_SEGMENTS.len() * PHOTO_SEGMENT_LEN as usize),
        failed_segments: Vec::new(),
    };

    for (i, template) in PHOTO_SEGMENTS.iter().enumerate() {
        let segment = i + 1;
        match read_field(channel, template, variant) {
            Ok(payload) => photo.bytes.extend_from_slice(&payload),
            Err(error) => {
                warn!("photo segment {} failed: {}", segment, error);
                photo.failed_segments.push(SegmentFailure { segment, error });
                if policy == SegmentFailurePolicy::Abort {
                    photo.bytes.clear();
                    break;
                }
            }
        }
    }

    debug!(
        "photo: {} bytes, {} failed segments",
        photo.bytes.len(),
        photo.failed_segments.len()
    );
    photo
}
