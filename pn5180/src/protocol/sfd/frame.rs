// pn5180-rs/pn5180/src/protocol/sfd/frame.rs

use crate::protocol::parser::byte_at;
use crate::types::{FirmwareVersion, SfdOpcode, SfdState};
use crate::Result;

/// Host-to-chip frame: `opcode ++ [version(3)] ++ payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendFrame {
    pub opcode: SfdOpcode,
    pub firmware_version: Option<[u8; 3]>,
    pub payload: Vec<u8>,
}

impl SendFrame {
    pub fn new(opcode: SfdOpcode, payload: Vec<u8>) -> Self {
        Self {
            opcode,
            firmware_version: None,
            payload,
        }
    }

    /// Frame whose version field is a zero placeholder, as version queries
    /// expect.
    pub fn version_query(opcode: SfdOpcode) -> Self {
        Self {
            opcode,
            firmware_version: Some([0x00; 3]),
            payload: Vec::new(),
        }
    }

    pub fn with_firmware_version(mut self, version: FirmwareVersion) -> Self {
        self.firmware_version = Some(version.to_field());
        self
    }

    pub fn len(&self) -> usize {
        1 + self.firmware_version.map_or(0, |v| v.len()) + self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.opcode as u8);
        if let Some(v) = &self.firmware_version {
            out.extend_from_slice(v);
        }
        out.extend_from_slice(&self.payload);
        out
    }

    /// Parse `opcode ++ payload`. A version field cannot be told apart
    /// from payload on the wire, so it stays inside `payload`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let opcode = SfdOpcode::try_from(byte_at(data, 0)?)?;
        Ok(Self::new(opcode, data[1..].to_vec()))
    }
}

/// Chip-to-host frame: `state ++ payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveFrame {
    pub state: SfdState,
    pub payload: Vec<u8>,
}

impl ReceiveFrame {
    pub fn new(state: SfdState, payload: Vec<u8>) -> Self {
        Self { state, payload }
    }

    pub fn len(&self) -> usize {
        1 + self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.state as u8);
        out.extend_from_slice(&self.payload);
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let state = SfdState::try_from(byte_at(data, 0)?)?;
        Ok(Self::new(state, data[1..].to_vec()))
    }
}
