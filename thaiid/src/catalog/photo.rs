// thaiid/src/catalog/photo.rs

use crate::catalog::fields::{FieldDescriptor, FieldKind};
use crate::constants::{PHOTO_FIRST_OFFSET, PHOTO_SEGMENT_COUNT, PHOTO_SEGMENT_LEN};
use crate::types::CommandTemplate;

const fn segment(index: usize) -> CommandTemplate {
    CommandTemplate::new(
        PHOTO_FIRST_OFFSET + (index as u16) * (PHOTO_SEGMENT_LEN as u16),
        PHOTO_SEGMENT_LEN,
    )
}

/// Photo segment templates in concatenation order (segment 1 first).
pub const PHOTO_SEGMENTS: [CommandTemplate; PHOTO_SEGMENT_COUNT] = [
    segment(0),
    segment(1),
    segment(2),
    segment(3),
    segment(4),
    segment(5),
    segment(6),
    segment(7),
    segment(8),
    segment(9),
    segment(10),
    segment(11),
    segment(12),
    segment(13),
    segment(14),
    segment(15),
    segment(16),
    segment(17),
    segment(18),
    segment(19),
];

/// Descriptor for 1-based photo segment `n`, or `None` if out of range.
pub fn photo_segment(n: usize) -> Option<FieldDescriptor> {
    let template = *PHOTO_SEGMENTS.get(n.checked_sub(1)?)?;
    Some(FieldDescriptor {
        label: "photo",
        template,
        kind: FieldKind::Binary,
    })
}
