// Shared helpers for integration tests. Every aggregator includes this
// module through #[path], so not every crate uses every helper.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
