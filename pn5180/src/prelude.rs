// pn5180-rs/pn5180/src/prelude.rs

pub use crate::config::DriverConfig;
pub use crate::device::{Pn5180, Pn5180Builder};
pub use crate::pins::PinConfig;
pub use crate::protocol::{Command, ReceiveFrame, SecureMessage, SendFrame};
pub use crate::sfd::{SfdMode, SfdSession};
pub use crate::transport::{PinController, SpiBus};
pub use crate::{
    CommandOpcode, Error, FirmwareVersion, Level, PinRole, RegisterAddress, Result, SfdOpcode,
    SfdState, TransceiverState, Uid,
};

// Small utilities
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
