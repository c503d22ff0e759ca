// pn5180-rs/pn5180/src/sfd/session.rs

use std::time::Duration;

use log::{debug, info, warn};

use crate::constants::{
    SFD_CRC_LEN, SFD_MAX_FRAME_LEN, SFD_PREFIX_LEN, SFD_RELEASE_SETTLE_MS,
    SFD_REQUEST_SETTLE_MS, SFD_RESET_SETTLE_MS, SFD_VERSION_MAJOR_OFFSET,
    SFD_VERSION_MINOR_OFFSET,
};
use crate::device::Pn5180;
use crate::protocol::parser::byte_at;
use crate::protocol::sfd::{Header, ReceiveFrame, SecureMessage, SendFrame};
use crate::types::{Direction, FirmwareVersion, Level, PinRole, SfdOpcode, SfdState};
use crate::{Error, Result};

/// Whether the chip is currently in download mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SfdMode {
    #[default]
    Inactive,
    Active,
}

/// Scoped SFD session borrowing the driver.
///
/// Dropping an active session runs [`stop_mode`](Self::stop_mode); errors on
/// that path are only logged.
pub struct SfdSession<'a> {
    driver: &'a mut Pn5180,
    mode: SfdMode,
}

impl Pn5180 {
    /// Open an inactive SFD session on this driver.
    pub fn sfd(&mut self) -> SfdSession<'_> {
        SfdSession {
            driver: self,
            mode: SfdMode::Inactive,
        }
    }
}

impl SfdSession<'_> {
    pub fn mode(&self) -> SfdMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode == SfdMode::Active
    }

    /// Reset the chip with the request line high so it boots into download
    /// mode.
    pub fn start_mode(&mut self) -> Result<()> {
        self.toggle_request(Level::High)?;
        self.mode = SfdMode::Active;
        info!("sfd mode started");
        Ok(())
    }

    /// Reset the chip with the request line low, back to normal operation.
    pub fn stop_mode(&mut self) -> Result<()> {
        self.toggle_request(Level::Low)?;
        self.mode = SfdMode::Inactive;
        info!("sfd mode stopped");
        Ok(())
    }

    fn toggle_request(&mut self, request: Level) -> Result<()> {
        let t = self.driver.transport();
        t.pin_config().require(PinRole::Request)?;
        t.pin_config().require(PinRole::Reset)?;

        t.set_pin(PinRole::Reset, Level::High)?;
        t.delay(Duration::from_millis(SFD_RESET_SETTLE_MS));
        t.set_pin(PinRole::Request, request)?;
        t.delay(Duration::from_millis(SFD_REQUEST_SETTLE_MS));
        t.set_pin(PinRole::Reset, Level::Low)?;
        t.delay(Duration::from_millis(SFD_RELEASE_SETTLE_MS));
        Ok(())
    }

    /// Send one request and read the reply.
    ///
    /// A RESET request gets no reply and yields `None`. Otherwise the
    /// direction byte and header are read first, then `pkg_length` frame
    /// bytes plus the CRC. The session mode is left as it was on any error.
    pub fn secure_transceive(&mut self, request: &SecureMessage) -> Result<Option<SecureMessage>> {
        if !self.is_active() {
            return Err(Error::ModeNotActive);
        }
        let opcode = request
            .as_send()
            .map(|f| f.opcode)
            .ok_or_else(|| Error::InvalidArgument("only send messages can be issued".into()))?;

        let t = self.driver.transport();
        t.send_secure(&request.encode())?;
        if opcode == SfdOpcode::Reset {
            debug!("sfd reset issued, no reply expected");
            return Ok(None);
        }

        let mut raw = t.read_secure(SFD_PREFIX_LEN)?;
        let header = Header::from_bytes([raw[1], raw[2]]);
        let frame_len = usize::from(header.pkg_length());
        if frame_len > SFD_MAX_FRAME_LEN {
            return Err(Error::FrameTooLarge {
                max: SFD_MAX_FRAME_LEN,
                actual: frame_len,
            });
        }
        raw.extend(t.read_secure(frame_len + SFD_CRC_LEN)?);

        let reply = SecureMessage::decode(&raw)?;
        if reply.direction() != Direction::Receive {
            return Err(Error::Decode {
                kind: "sfd direction",
                value: Direction::Send as u8,
            });
        }
        Ok(Some(reply))
    }

    /// Issue `frame` and require an OK reply.
    fn request(&mut self, frame: SendFrame) -> Result<ReceiveFrame> {
        let msg = SecureMessage::send(frame)?;
        let reply = self
            .secure_transceive(&msg)?
            .and_then(|m| m.as_receive().cloned())
            .ok_or_else(|| Error::InvalidArgument("request produced no reply".into()))?;
        debug!("sfd reply state {}", reply.state);
        if reply.state != SfdState::Ok {
            return Err(Error::SfdStatus(reply.state));
        }
        Ok(reply)
    }

    /// Firmware version, read from payload offsets 8 and 9 of the reply.
    pub fn get_version(&mut self) -> Result<FirmwareVersion> {
        let reply = self.request(SendFrame::version_query(SfdOpcode::GetVersion))?;
        let major = byte_at(&reply.payload, SFD_VERSION_MAJOR_OFFSET)?;
        let minor = byte_at(&reply.payload, SFD_VERSION_MINOR_OFFSET)?;
        info!("sfd firmware version {}.{}", major, minor);
        Ok(FirmwareVersion::new(major, minor))
    }

    /// Raw die identifier payload.
    pub fn get_die_id(&mut self) -> Result<Vec<u8>> {
        Ok(self
            .request(SendFrame::version_query(SfdOpcode::GetDieId))?
            .payload)
    }

    pub fn get_session_state(&mut self) -> Result<Vec<u8>> {
        Ok(self
            .request(SendFrame::version_query(SfdOpcode::GetSessionState))?
            .payload)
    }

    /// Ask the download firmware to reset. No reply is read.
    pub fn reset_chip(&mut self) -> Result<()> {
        let msg = SecureMessage::send(SendFrame::new(SfdOpcode::Reset, Vec::new()))?;
        self.secure_transceive(&msg).map(|_| ())
    }
}

impl Drop for SfdSession<'_> {
    fn drop(&mut self) {
        if self.is_active() {
            if let Err(e) = self.stop_mode() {
                warn!("failed to leave sfd mode: {}", e);
            }
        }
    }
}
