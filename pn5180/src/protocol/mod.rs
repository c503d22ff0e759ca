// pn5180-rs/pn5180/src/protocol/mod.rs

pub mod commands;
pub mod crc;
pub mod parser;
pub mod sfd;

pub use commands::Command;
pub use crc::crc16;
pub use sfd::{Frame, Header, ReceiveFrame, SecureMessage, SendFrame};
