// pn5180-rs/pn5180/src/protocol/commands.rs

use crate::constants::{EEPROM_MAX_ADDRESS, SEND_DATA_MAX_LEN};
use crate::types::{CommandOpcode, RegisterAddress};
use crate::{Error, Result};

/// Register-level host command. `encode` yields the exact bytes written in
/// one SPI frame; `response_len` says how many bytes the follow-up read
/// fetches (0 = no read).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    WriteRegister {
        address: RegisterAddress,
        value: [u8; 4],
    },
    WriteRegisterOrMask {
        address: RegisterAddress,
        mask: u32,
    },
    WriteRegisterAndMask {
        address: RegisterAddress,
        mask: u32,
    },
    ReadRegister {
        address: RegisterAddress,
        len: usize,
    },
    WriteEeprom {
        address: u8,
        data: Vec<u8>,
    },
    ReadEeprom {
        address: u8,
        len: u8,
    },
    WriteTxData {
        data: Vec<u8>,
    },
    SendData {
        valid_bits: u8,
        data: Vec<u8>,
    },
    ReadData {
        len: usize,
    },
    LoadRfConfig {
        tx: u8,
        rx: u8,
    },
    RfOn {
        control: u8,
    },
    RfOff {
        control: u8,
    },
}

impl Command {
    pub fn opcode(&self) -> CommandOpcode {
        match self {
            Self::WriteRegister { .. } => CommandOpcode::WriteRegister,
            Self::WriteRegisterOrMask { .. } => CommandOpcode::WriteRegisterOrMask,
            Self::WriteRegisterAndMask { .. } => CommandOpcode::WriteRegisterAndMask,
            Self::ReadRegister { .. } => CommandOpcode::ReadRegister,
            Self::WriteEeprom { .. } => CommandOpcode::WriteEeprom,
            Self::ReadEeprom { .. } => CommandOpcode::ReadEeprom,
            Self::WriteTxData { .. } => CommandOpcode::WriteTxData,
            Self::SendData { .. } => CommandOpcode::SendData,
            Self::ReadData { .. } => CommandOpcode::ReadData,
            Self::LoadRfConfig { .. } => CommandOpcode::LoadRfConfig,
            Self::RfOn { .. } => CommandOpcode::RfOn,
            Self::RfOff { .. } => CommandOpcode::RfOff,
        }
    }

    /// Number of bytes to read back after the command frame.
    pub fn response_len(&self) -> usize {
        match self {
            Self::ReadRegister { len, .. } => *len,
            Self::ReadEeprom { len, .. } => *len as usize,
            Self::ReadData { len } => *len,
            _ => 0,
        }
    }

    /// Reject arguments the chip cannot address.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::WriteEeprom { address, .. } if *address > EEPROM_MAX_ADDRESS => {
                Err(Error::InvalidArgument(format!(
                    "eeprom write at {} beyond address {}",
                    address, EEPROM_MAX_ADDRESS
                )))
            }
            Self::ReadEeprom { address, len }
                if *address > EEPROM_MAX_ADDRESS
                    || *address as usize + *len as usize > EEPROM_MAX_ADDRESS as usize =>
            {
                Err(Error::InvalidArgument(format!(
                    "eeprom read of {} bytes at {} beyond address {}",
                    len, address, EEPROM_MAX_ADDRESS
                )))
            }
            Self::SendData { data, .. } if data.len() > SEND_DATA_MAX_LEN => {
                Err(Error::InvalidArgument(format!(
                    "send_data payload of {} bytes exceeds {}",
                    data.len(),
                    SEND_DATA_MAX_LEN
                )))
            }
            _ => Ok(()),
        }
    }

    /// Encode the command into the raw frame (opcode + params).
    pub fn encode(&self) -> Vec<u8> {
        let op = self.opcode() as u8;
        match self {
            Self::WriteRegister { address, value } => frame(op, *address as u8, value),
            Self::WriteRegisterOrMask { address, mask }
            | Self::WriteRegisterAndMask { address, mask } => {
                frame(op, *address as u8, &mask.to_le_bytes())
            }
            Self::ReadRegister { address, .. } => vec![op, *address as u8],
            Self::WriteEeprom { address, data } => frame(op, *address, data),
            Self::ReadEeprom { address, len } => vec![op, *address, *len],
            Self::WriteTxData { data } => {
                let mut v = Vec::with_capacity(1 + data.len());
                v.push(op);
                v.extend_from_slice(data);
                v
            }
            Self::SendData { valid_bits, data } => frame(op, *valid_bits, data),
            Self::ReadData { .. } => vec![op, 0x00],
            Self::LoadRfConfig { tx, rx } => vec![op, *tx, *rx],
            Self::RfOn { control } | Self::RfOff { control } => vec![op, *control],
        }
    }
}

/// `[opcode, address] ++ content`, the layout shared by most commands.
pub fn frame(opcode: u8, address: u8, content: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(2 + content.len());
    v.push(opcode);
    v.push(address);
    v.extend_from_slice(content);
    v
}
