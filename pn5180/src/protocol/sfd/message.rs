// pn5180-rs/pn5180/src/protocol/sfd/message.rs

use super::frame::{ReceiveFrame, SendFrame};
use super::header::Header;
use crate::constants::{SFD_CRC_LEN, SFD_MAX_FRAME_LEN, SFD_PREFIX_LEN};
use crate::protocol::crc::crc16_parts;
use crate::protocol::parser::{be_u16_at, byte_at, ensure_len};
use crate::types::Direction;
use crate::{Error, Result};

/// Frame body of an SFD message, tagged by direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Send(SendFrame),
    Receive(ReceiveFrame),
}

impl Frame {
    pub fn direction(&self) -> Direction {
        match self {
            Frame::Send(_) => Direction::Send,
            Frame::Receive(_) => Direction::Receive,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frame::Send(f) => f.len(),
            Frame::Receive(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Frame::Send(f) => f.encode(),
            Frame::Receive(f) => f.encode(),
        }
    }
}

impl From<SendFrame> for Frame {
    fn from(f: SendFrame) -> Self {
        Frame::Send(f)
    }
}

impl From<ReceiveFrame> for Frame {
    fn from(f: ReceiveFrame) -> Self {
        Frame::Receive(f)
    }
}

/// One complete SFD message:
/// `direction(1) ++ header(2) ++ frame(pkg_length) ++ crc16(2, big-endian)`.
///
/// Values are immutable once built; the header always agrees with the frame
/// length and the CRC is derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecureMessage {
    header: Header,
    frame: Frame,
}

impl SecureMessage {
    /// Single-chunk request.
    pub fn send(frame: SendFrame) -> Result<Self> {
        Self::build(Frame::Send(frame), false)
    }

    /// Request chunk with an explicit continuation flag.
    pub fn send_chunk(frame: SendFrame, continuation: bool) -> Result<Self> {
        Self::build(Frame::Send(frame), continuation)
    }

    pub fn receive(frame: ReceiveFrame) -> Result<Self> {
        Self::build(Frame::Receive(frame), false)
    }

    fn build(frame: Frame, continuation: bool) -> Result<Self> {
        let header = Header::for_frame(frame.len(), continuation)?;
        Ok(Self { header, frame })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn direction(&self) -> Direction {
        self.frame.direction()
    }

    pub fn as_send(&self) -> Option<&SendFrame> {
        match &self.frame {
            Frame::Send(f) => Some(f),
            Frame::Receive(_) => None,
        }
    }

    pub fn as_receive(&self) -> Option<&ReceiveFrame> {
        match &self.frame {
            Frame::Receive(f) => Some(f),
            Frame::Send(_) => None,
        }
    }

    /// CRC16 over the emitted `header ++ frame`.
    pub fn crc(&self) -> u16 {
        crc16_parts(&[&self.wire_header(), &self.frame.encode()])
    }

    /// Header bytes as sent. RFU bits kept from a decoded header are
    /// emitted as 0.
    fn wire_header(&self) -> [u8; 2] {
        self.header.with_rfu_cleared().to_bytes()
    }

    /// Total encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        SFD_PREFIX_LEN + self.frame.len() + SFD_CRC_LEN
    }

    pub fn encode(&self) -> Vec<u8> {
        let body = self.frame.encode();
        let header = self.wire_header();
        let crc = crc16_parts(&[&header, &body]);

        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.direction() as u8);
        out.extend_from_slice(&header);
        out.extend_from_slice(&body);
        out.extend_from_slice(&crc.to_be_bytes());
        out
    }

    /// Decode a full message. The opcode/state byte is looked at only after
    /// the CRC has been verified.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let direction = Direction::try_from(byte_at(data, 0)?)?;
        ensure_len(data, SFD_PREFIX_LEN + SFD_CRC_LEN)?;
        let header = Header::from_bytes([data[1], data[2]]);

        let frame_len = data.len() - SFD_PREFIX_LEN - SFD_CRC_LEN;
        if frame_len > SFD_MAX_FRAME_LEN {
            return Err(Error::FrameTooLarge {
                max: SFD_MAX_FRAME_LEN,
                actual: frame_len,
            });
        }
        if usize::from(header.pkg_length()) != frame_len {
            return Err(Error::InvalidLength {
                expected: SFD_PREFIX_LEN + usize::from(header.pkg_length()) + SFD_CRC_LEN,
                actual: data.len(),
            });
        }

        let crc_at = data.len() - SFD_CRC_LEN;
        let received = be_u16_at(data, crc_at)?;
        let computed = crc16_parts(&[&data[1..SFD_PREFIX_LEN], &data[SFD_PREFIX_LEN..crc_at]]);
        if received != computed {
            return Err(Error::ChecksumMismatch {
                expected: computed,
                actual: received,
            });
        }

        let body = &data[SFD_PREFIX_LEN..crc_at];
        let frame = match direction {
            Direction::Send => Frame::Send(SendFrame::decode(body)?),
            Direction::Receive => Frame::Receive(ReceiveFrame::decode(body)?),
        };
        Ok(Self { header, frame })
    }
}
