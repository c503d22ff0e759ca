// pn5180-rs/pn5180/src/config.rs
//! Driver configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::SPI_CLOCK_HZ;
use crate::utils::default_busy_timeout;

/// Bus-level settings for one PN5180 instance.
///
/// `software_chip_select` means the SPI controller does not drive NSS and
/// the driver toggles the chip-select pin around each transfer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    pub bus: u8,
    pub device: u8,
    pub clock_hz: u32,
    pub software_chip_select: bool,
    pub busy_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            bus: 0,
            device: 0,
            clock_hz: SPI_CLOCK_HZ,
            software_chip_select: true,
            busy_timeout: default_busy_timeout(),
        }
    }
}

impl DriverConfig {
    pub fn new(bus: u8, device: u8) -> Self {
        Self {
            bus,
            device,
            ..Self::default()
        }
    }

    pub fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    pub fn with_software_chip_select(mut self, enabled: bool) -> Self {
        self.software_chip_select = enabled;
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}
