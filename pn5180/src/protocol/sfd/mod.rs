// pn5180-rs/pn5180/src/protocol/sfd/mod.rs

//! Secure Firmware Download message codec. Pure encode/decode, no I/O.

pub mod frame;
pub mod header;
pub mod message;

pub use frame::{ReceiveFrame, SendFrame};
pub use header::Header;
pub use message::{Frame, SecureMessage};
