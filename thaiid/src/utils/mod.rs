// thaiid/src/utils/mod.rs
//! Small helpers shared across the crate, mostly for APDU trace logging.

pub mod hex;

pub use self::hex::*;
