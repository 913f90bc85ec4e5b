// thaiid/src/lib.rs

//! thaiid
//!
//! Pure Rust reader for Thai national ID smart cards: APDU driver, Thai
//! codepage decoding and photo reassembly over any `CardChannel` (PC/SC
//! with the `pcsc` feature).
#![warn(missing_docs)]

pub mod card;
pub mod catalog;
pub mod charset;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
