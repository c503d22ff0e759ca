// pn5180-rs/pn5180/src/error.rs

use thiserror::Error;

use crate::types::{PinRole, SfdState};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("operation timed out waiting for the busy line")]
    Timeout,

    #[error("secure firmware download mode is not active")]
    ModeNotActive,

    #[error("missing pin: {0}")]
    MissingPin(PinRole),

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("unrecognized {kind} value {value:#04x}")]
    Decode { kind: &'static str, value: u8 },

    #[error("frame too large: max {max} bytes, got {actual}")]
    FrameTooLarge { max: usize, actual: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("sfd error: state={0}")]
    SfdStatus(SfdState),

    // SPI/GPIO 実装を差し替えられるように文字列でも受け取る
    #[error("bus error: {0}")]
    Bus(String),

    #[cfg(feature = "rpi")]
    #[error("spi error: {0}")]
    Spi(#[from] rppal::spi::Error),

    #[cfg(feature = "rpi")]
    #[error("gpio error: {0}")]
    Gpio(#[from] rppal::gpio::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
