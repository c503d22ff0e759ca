// pn5180-rs/pn5180/src/protocol/sfd/header.rs

use crate::constants::{SFD_MAX_FRAME_LEN, SFD_PKG_LENGTH_MAX, SFD_RFU_MAX};
use crate::{Error, Result};

/// Two-byte SFD header, packed big-endian as
/// `rfu(5) | ch(1) | pkg_length(10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Header {
    rfu: u8,
    continuation: bool,
    pkg_length: u16,
}

impl Header {
    /// Header for an outgoing frame of `frame_len` bytes. RFU is always 0.
    pub fn for_frame(frame_len: usize, continuation: bool) -> Result<Self> {
        if frame_len > SFD_MAX_FRAME_LEN {
            return Err(Error::FrameTooLarge {
                max: SFD_MAX_FRAME_LEN,
                actual: frame_len,
            });
        }
        Ok(Self {
            rfu: 0,
            continuation,
            pkg_length: frame_len as u16,
        })
    }

    /// Build from raw fields, checking only the bit widths.
    pub fn from_parts(rfu: u8, continuation: bool, pkg_length: u16) -> Result<Self> {
        if rfu > SFD_RFU_MAX {
            return Err(Error::InvalidArgument(format!(
                "rfu {} does not fit in 5 bits",
                rfu
            )));
        }
        if pkg_length > SFD_PKG_LENGTH_MAX {
            return Err(Error::InvalidArgument(format!(
                "pkg_length {} does not fit in 10 bits",
                pkg_length
            )));
        }
        Ok(Self {
            rfu,
            continuation,
            pkg_length,
        })
    }

    pub fn rfu(&self) -> u8 {
        self.rfu
    }

    /// The `ch` bit: more chunks follow this one.
    pub fn continuation(&self) -> bool {
        self.continuation
    }

    pub fn pkg_length(&self) -> u16 {
        self.pkg_length
    }

    pub(crate) fn with_rfu_cleared(self) -> Self {
        Self { rfu: 0, ..self }
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        let packed = (u16::from(self.rfu) << 11)
            | (u16::from(self.continuation) << 10)
            | self.pkg_length;
        packed.to_be_bytes()
    }

    /// Unpack a received header. RFU is kept as-is, not validated.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        let packed = u16::from_be_bytes(bytes);
        Self {
            rfu: (packed >> 11) as u8,
            continuation: packed & (1 << 10) != 0,
            pkg_length: packed & SFD_PKG_LENGTH_MAX,
        }
    }
}
