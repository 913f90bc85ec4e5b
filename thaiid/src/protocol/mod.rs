// thaiid/src/protocol/mod.rs
//! APDU layer: command composition, status trailer handling and the
//! two-phase field read.

pub mod apdu;
pub mod codec;
pub mod frame;

pub use apdu::{get_response_command, locate_command};
pub use codec::{exchange_command, read_field, read_response};
pub use frame::{split_trailer, strip_trailer};
