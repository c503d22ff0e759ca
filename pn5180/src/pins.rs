// pn5180-rs/pn5180/src/pins.rs

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::PinRole;
use crate::{Error, Result};

/// Chip-select pins wired to each (bus, device) pair on the reference board.
const CHIP_SELECT_TABLE: [((u8, u8), u8); 3] = [((0, 0), 8), ((0, 1), 7), ((1, 0), 26)];

/// Look up the chip-select pin for a (bus, device) pair.
pub fn chip_select_for(bus: u8, device: u8) -> Option<u8> {
    CHIP_SELECT_TABLE
        .iter()
        .find(|(key, _)| *key == (bus, device))
        .map(|(_, pin)| *pin)
}

/// Digital pins used by the driver. Only `busy` is mandatory; an unset pin
/// disables the operations that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    pub chip_select: Option<u8>,
    pub reset: Option<u8>,
    pub busy: Option<u8>,
    pub request: Option<u8>,
}

impl PinConfig {
    pub fn new(busy: u8) -> Self {
        Self {
            busy: Some(busy),
            ..Self::default()
        }
    }

    pub fn with_chip_select(mut self, pin: u8) -> Self {
        self.chip_select = Some(pin);
        self
    }

    pub fn with_reset(mut self, pin: u8) -> Self {
        self.reset = Some(pin);
        self
    }

    pub fn with_request(mut self, pin: u8) -> Self {
        self.request = Some(pin);
        self
    }

    /// Fill an unset chip-select from the board table. An explicit pin wins.
    pub fn resolve_chip_select(mut self, bus: u8, device: u8) -> Self {
        if self.chip_select.is_none() {
            self.chip_select = chip_select_for(bus, device);
        }
        self
    }

    /// Pin for `role`, or `MissingPin`.
    pub fn require(&self, role: PinRole) -> Result<u8> {
        let pin = match role {
            PinRole::ChipSelect => self.chip_select,
            PinRole::Reset => self.reset,
            PinRole::Busy => self.busy,
            PinRole::Request => self.request,
        };
        pin.ok_or(Error::MissingPin(role))
    }

    /// Output pins the driver drives, in setup order.
    pub(crate) fn outputs(&self) -> impl Iterator<Item = u8> + '_ {
        [self.chip_select, self.reset, self.request]
            .into_iter()
            .flatten()
    }

    pub(crate) fn validate(&self, software_chip_select: bool) -> Result<()> {
        let busy = self.require(PinRole::Busy)?;
        if software_chip_select {
            self.require(PinRole::ChipSelect)?;
        }
        let all = [self.chip_select, self.reset, self.request];
        for (i, pin) in all.iter().enumerate() {
            let Some(pin) = pin else { continue };
            if *pin == busy || all[i + 1..].contains(&Some(*pin)) {
                return Err(Error::InvalidArgument(format!(
                    "pin {} is assigned to more than one role",
                    pin
                )));
            }
        }
        Ok(())
    }
}
