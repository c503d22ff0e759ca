// pn5180-rs/pn5180/src/utils/mod.rs

//! Small helpers shared across the crate: hex rendering for logs and UIDs,
//! and millisecond durations.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
