// pn5180-rs/pn5180/src/transport/handshake.rs

use std::time::Duration;

use log::{debug, trace, warn};

use crate::config::DriverConfig;
use crate::pins::PinConfig;
use crate::transport::traits::{PinController, SpiBus};
use crate::types::{Edge, Level, PinRole};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Busy-gated SPI exchange shared by every PN5180 operation.
///
/// Owns the bus, the pin controller and the pin assignment for the whole
/// driver lifetime. Output pins go back to input when this is dropped.
pub struct Handshake {
    bus: Box<dyn SpiBus>,
    pins: Box<dyn PinController>,
    pin_config: PinConfig,
    config: DriverConfig,
    busy: u8,
}

impl Handshake {
    /// Validate the pin assignment and put every pin into its idle state:
    /// busy as input, chip-select and reset high, request low.
    pub fn new(
        bus: Box<dyn SpiBus>,
        mut pins: Box<dyn PinController>,
        pin_config: PinConfig,
        config: DriverConfig,
    ) -> Result<Self> {
        pin_config.validate(config.software_chip_select)?;
        let busy = pin_config.require(PinRole::Busy)?;

        pins.setup_input(busy)?;
        if let Some(cs) = pin_config.chip_select {
            pins.setup_output(cs, Level::High)?;
        }
        if let Some(reset) = pin_config.reset {
            pins.setup_output(reset, Level::High)?;
        }
        if let Some(req) = pin_config.request {
            pins.setup_output(req, Level::Low)?;
        }

        Ok(Self {
            bus,
            pins,
            pin_config,
            config,
            busy,
        })
    }

    pub fn pin_config(&self) -> &PinConfig {
        &self.pin_config
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Block until the busy line is low.
    pub fn wait_ready(&mut self) -> Result<()> {
        self.wait_busy_level(Level::Low)
    }

    /// Block until the busy line is high. The SFD read path uses this: the
    /// chip raises busy once a response is waiting.
    pub fn wait_response(&mut self) -> Result<()> {
        self.wait_busy_level(Level::High)
    }

    fn wait_busy_level(&mut self, target: Level) -> Result<()> {
        let current = self.pins.read_level(self.busy)?;
        if current == target {
            return Ok(());
        }
        debug!("busy line {}, waiting for {}", current, target);
        let edge = match target {
            Level::Low => Edge::Falling,
            Level::High => Edge::Rising,
        };
        if self
            .pins
            .wait_for_edge(self.busy, edge, self.config.busy_timeout)?
        {
            return Ok(());
        }
        // A missed edge still counts when the line has reached the level.
        if self.pins.read_level(self.busy)? == target {
            debug!("busy edge missed, line already {}", target);
            return Ok(());
        }
        Err(Error::Timeout)
    }

    fn chip_select(&self) -> Option<u8> {
        if self.config.software_chip_select {
            self.pin_config.chip_select
        } else {
            None
        }
    }

    /// Run one bus operation, framed by chip-select when the driver owns
    /// it. Chip-select is released even when the operation fails.
    fn framed<T>(&mut self, op: impl FnOnce(&mut dyn SpiBus) -> Result<T>) -> Result<T> {
        let Some(cs) = self.chip_select() else {
            return op(&mut *self.bus);
        };
        self.pins.set_level(cs, Level::Low)?;
        let result = op(&mut *self.bus);
        let released = self.pins.set_level(cs, Level::High);
        let value = result?;
        released?;
        Ok(value)
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        self.framed(|bus| bus.write(data))?;
        trace!("sent buffer: {}", bytes_to_hex_spaced(data));
        Ok(())
    }

    fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        let buf = self.framed(|bus| bus.read(len))?;
        if buf.len() != len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: buf.len(),
            });
        }
        trace!("read buffer: {}", bytes_to_hex_spaced(&buf));
        Ok(buf)
    }

    /// Write one buffer, waiting for readiness before and after.
    pub fn send(&mut self, data: &[u8]) -> Result<()> {
        self.wait_ready()?;
        self.write_raw(data)?;
        self.wait_ready()
    }

    /// Read `len` bytes, waiting for readiness before and after.
    pub fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        self.wait_ready()?;
        let buf = self.read_raw(len)?;
        self.wait_ready()?;
        Ok(buf)
    }

    /// Write `data`, then read `read_len` bytes when non-zero.
    pub fn exchange(&mut self, data: &[u8], read_len: usize) -> Result<Option<Vec<u8>>> {
        self.send(data)?;
        if read_len == 0 {
            return Ok(None);
        }
        self.read(read_len).map(Some)
    }

    /// SFD write: readiness is checked before the write only.
    pub fn send_secure(&mut self, data: &[u8]) -> Result<()> {
        self.wait_ready()?;
        self.write_raw(data)
    }

    /// SFD read: waits for the response-pending busy level before the read
    /// only.
    pub fn read_secure(&mut self, len: usize) -> Result<Vec<u8>> {
        self.wait_response()?;
        self.read_raw(len)
    }

    /// Drive the pin assigned to `role`.
    pub fn set_pin(&mut self, role: PinRole, level: Level) -> Result<()> {
        let pin = self.pin_config.require(role)?;
        self.pins.set_level(pin, level)
    }

    pub fn delay(&mut self, duration: Duration) {
        self.pins.delay(duration);
    }
}

impl Drop for Handshake {
    fn drop(&mut self) {
        let outputs: Vec<u8> = self.pin_config.outputs().collect();
        for pin in outputs {
            if let Err(e) = self.pins.release(pin) {
                warn!("failed to release pin {}: {}", pin, e);
            }
        }
    }
}
