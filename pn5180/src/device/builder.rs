// pn5180-rs/pn5180/src/device/builder.rs

use crate::config::DriverConfig;
use crate::device::handle::Pn5180;
use crate::pins::PinConfig;
use crate::transport::{PinController, SpiBus};
use crate::types::PinRole;
use crate::{Error, Result};

/// Helper to construct a [`Pn5180`] from its collaborators.
///
/// An unset chip-select pin is filled from the (bus, device) table of the
/// configuration before the pins are validated.
#[derive(Default)]
pub struct Pn5180Builder {
    bus: Option<Box<dyn SpiBus>>,
    pins: Option<(Box<dyn PinController>, PinConfig)>,
    config: DriverConfig,
}

impl Pn5180Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-opened bus (e.g. `MockBus`).
    pub fn with_bus(mut self, bus: Box<dyn SpiBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn with_pins(mut self, controller: Box<dyn PinController>, pins: PinConfig) -> Self {
        self.pins = Some((controller, pins));
        self
    }

    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. A missing bus is an `InvalidArgument`; missing
    /// pins report the busy pin, the only mandatory one.
    pub fn build(self) -> Result<Pn5180> {
        let bus = self
            .bus
            .ok_or_else(|| Error::InvalidArgument("no SPI bus provided".into()))?;
        let (controller, pins) = self.pins.ok_or(Error::MissingPin(PinRole::Busy))?;
        let pins = pins.resolve_chip_select(self.config.bus, self.config.device);
        Pn5180::new(bus, controller, pins, self.config)
    }
}
