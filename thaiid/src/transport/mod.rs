// thaiid/src/transport/mod.rs
//! Card channel abstraction and its implementations.

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "pcsc")]
pub use self::pcsc::PcscTransport;
pub use traits::CardChannel;
