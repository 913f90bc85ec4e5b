// thaiid/src/catalog/mod.rs
//! Static table of the card's data objects.
//!
//! Text fields are listed in the order the session reads and reports them.
//! Photo segments follow the card layout: twenty 0xFF-byte chunks laid out
//! back to back from 0x017B. Segments carry no length or index of their
//! own, so the declared length of each template is authoritative.

mod fields;
mod photo;

pub use fields::{FieldDescriptor, FieldId, FieldKind, TEXT_FIELDS};
pub use photo::{PHOTO_SEGMENTS, photo_segment};

use crate::constants::SELECT_THAI_ID_APPLET;

/// Applet selection command sent once before any field read.
pub const fn select_applet_command() -> &'static [u8] {
    &SELECT_THAI_ID_APPLET
}

/// Look up the descriptor for a text field.
pub fn descriptor(id: FieldId) -> &'static FieldDescriptor {
    // TEXT_FIELDS is indexed by declaration order of FieldId
    &TEXT_FIELDS[id as usize]
}

/// All descriptors the session reads, text fields first then photo segments.
pub fn all_descriptors() -> impl Iterator<Item = FieldDescriptor> {
    TEXT_FIELDS
        .iter()
        .copied()
        .chain((1..=PHOTO_SEGMENTS.len()).filter_map(photo_segment))
}
