// pn5180-rs/pn5180/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Implements `TryFrom<u8>` for a fieldless `#[repr(u8)]` enum by listing
/// its variants once. Unlisted values become `Error::Decode`.
macro_rules! byte_enum {
    ($name:ident, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                $(
                    if value == $name::$variant as u8 {
                        return Ok($name::$variant);
                    }
                )+
                Err(Error::Decode { kind: $kind, value })
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }
    };
}

/// PN5180 register addresses (datasheet constants).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RegisterAddress {
    SystemConfig = 0x00,
    IrqEnable = 0x01,
    IrqStatus = 0x02,
    IrqClear = 0x03,
    TransceiveControl = 0x04,
    Timer1Reload = 0x0C,
    Timer1Config = 0x0F,
    RxWaitConfig = 0x11,
    CrcRxConfig = 0x12,
    RxStatus = 0x13,
    TxWaitConfig = 0x17,
    TxConfig = 0x18,
    CrcTxConfig = 0x19,
    RfStatus = 0x1D,
    SystemStatus = 0x24,
    TempControl = 0x25,
    AgcRefConfig = 0x26,
}

byte_enum!(
    RegisterAddress,
    "register address",
    [
        SystemConfig,
        IrqEnable,
        IrqStatus,
        IrqClear,
        TransceiveControl,
        Timer1Reload,
        Timer1Config,
        RxWaitConfig,
        CrcRxConfig,
        RxStatus,
        TxWaitConfig,
        TxConfig,
        CrcTxConfig,
        RfStatus,
        SystemStatus,
        TempControl,
        AgcRefConfig,
    ]
);

/// Host command opcodes, the first byte of every register-level frame.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommandOpcode {
    WriteRegister = 0x00,
    WriteRegisterOrMask = 0x01,
    WriteRegisterAndMask = 0x02,
    WriteRegisterMultiple = 0x03,
    ReadRegister = 0x04,
    ReadRegisterMultiple = 0x05,
    WriteEeprom = 0x06,
    ReadEeprom = 0x07,
    WriteTxData = 0x08,
    SendData = 0x09,
    ReadData = 0x0A,
    SwitchMode = 0x0B,
    MifareAuthenticate = 0x0C,
    LoadRfConfig = 0x11,
    UpdateRfConfig = 0x12,
    RetrieveRfConfigSize = 0x13,
    RetrieveRfConfig = 0x14,
    RfOn = 0x16,
    RfOff = 0x17,
}

byte_enum!(
    CommandOpcode,
    "command opcode",
    [
        WriteRegister,
        WriteRegisterOrMask,
        WriteRegisterAndMask,
        WriteRegisterMultiple,
        ReadRegister,
        ReadRegisterMultiple,
        WriteEeprom,
        ReadEeprom,
        WriteTxData,
        SendData,
        ReadData,
        SwitchMode,
        MifareAuthenticate,
        LoadRfConfig,
        UpdateRfConfig,
        RetrieveRfConfigSize,
        RetrieveRfConfig,
        RfOn,
        RfOff,
    ]
);

/// Transceiver state, bits 24..=26 of `RF_STATUS`. Code 7 is reserved and
/// has no variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransceiverState {
    Idle = 0x00,
    WaitTransmit = 0x01,
    Transmitting = 0x02,
    WaitReceive = 0x03,
    WaitForData = 0x04,
    Receiving = 0x05,
    Loopback = 0x06,
}

byte_enum!(
    TransceiverState,
    "transceiver state",
    [
        Idle,
        WaitTransmit,
        Transmitting,
        WaitReceive,
        WaitForData,
        Receiving,
        Loopback,
    ]
);

/// Secure firmware download opcodes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SfdOpcode {
    Default = 0x00,
    Reset = 0xF0,
    GetVersion = 0xF1,
    GetSessionState = 0xF2,
    GetDieId = 0xF4,
    CheckIntegrity = 0xE0,
    SecureWrite = 0xC0,
    Read = 0xA2,
}

byte_enum!(
    SfdOpcode,
    "sfd opcode",
    [
        Default,
        Reset,
        GetVersion,
        GetSessionState,
        GetDieId,
        CheckIntegrity,
        SecureWrite,
        Read,
    ]
);

/// Status byte leading every SFD response frame.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SfdState {
    Ok = 0x00,
    InvalidAddr = 0x01,
    UnknownCmd = 0x0B,
    AbortedCmd = 0x0C,
    PllError = 0x0D,
    AddrRangeOverflow = 0x1E,
    BufferOverflow = 0x1F,
    MemoryBusy = 0x20,
    SignatureError = 0x21,
    FirmwareVersionError = 0x24,
    ProtocolError = 0x28,
    SfwuDegraded = 0x2A,
    DownloadFirstChunk = 0x2D,
    DownloadNextChunk = 0x2E,
    InternalError5 = 0xC5,
    Default = 0xFF,
}

byte_enum!(
    SfdState,
    "sfd state",
    [
        Ok,
        InvalidAddr,
        UnknownCmd,
        AbortedCmd,
        PllError,
        AddrRangeOverflow,
        BufferOverflow,
        MemoryBusy,
        SignatureError,
        FirmwareVersionError,
        ProtocolError,
        SfwuDegraded,
        DownloadFirstChunk,
        DownloadNextChunk,
        InternalError5,
        Default,
    ]
);

/// Direction byte leading every SFD message.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Send = 0x7F,
    Receive = 0xFF,
}

byte_enum!(Direction, "sfd direction", [Send, Receive]);

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    Low,
    High,
}

/// Signal edge to wait for on an input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Edge {
    Rising,
    Falling,
}

/// Which role a configured pin plays for the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinRole {
    #[display(fmt = "chip-select")]
    ChipSelect,
    #[display(fmt = "reset")]
    Reset,
    #[display(fmt = "busy")]
    Busy,
    #[display(fmt = "request")]
    Request,
}

/// ISO15693 UID as received from the reception buffer (LSB first).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Readable form: bytes reversed (MSB first), lowercase hex, no separator.
    pub fn to_hex(&self) -> String {
        let reversed: Vec<u8> = self.0.iter().rev().copied().collect();
        crate::utils::bytes_to_hex(&reversed)
    }
}

impl From<Vec<u8>> for Uid {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Uid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Firmware version reported by `GET_VERSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}.{}", major, minor)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl FirmwareVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// The 3-byte form used in the send frame's version field.
    pub fn to_field(self) -> [u8; 3] {
        [0x00, self.major, self.minor]
    }
}

impl std::str::FromStr for FirmwareVersion {
    type Err = Error;

    /// Parse `"major.minor"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| Error::InvalidArgument(format!("bad firmware version '{}'", s)))?;
        let parse = |p: &str| {
            p.trim()
                .parse::<u8>()
                .map_err(|e| Error::InvalidArgument(format!("bad firmware version '{}': {}", s, e)))
        };
        Ok(Self::new(parse(major)?, parse(minor)?))
    }
}
