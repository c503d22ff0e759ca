// pn5180-rs/pn5180/src/sfd/mod.rs

//! Secure Firmware Download session.
//!
//! The chip enters download mode when the request line is held high across
//! a reset. While the mode is active it answers [`SecureMessage`]s instead of
//! register commands.
//!
//! [`SecureMessage`]: crate::protocol::SecureMessage

pub mod session;

pub use session::{SfdMode, SfdSession};
