// thaiid/src/session/mod.rs
//! Card sessions: configuration, builder and the type-state handle.

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::SessionBuilder;
pub use config::SessionConfig;
pub use handle::{AppletSelected, Connected, Session, read_card};
