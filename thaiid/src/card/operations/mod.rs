//! Card read operations built on the frame codec.
pub mod photo;
pub mod read;

// Re-export commonly used functions/types at the operations root so callers
// can use `crate::card::operations::read_photo(...)`.
pub use photo::{SegmentFailurePolicy, assemble_photo, read_photo};
pub use read::{read_text_field, read_text_fields};
