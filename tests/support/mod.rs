// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every helper.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
