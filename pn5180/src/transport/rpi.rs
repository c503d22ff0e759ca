// pn5180-rs/pn5180/src/transport/rpi.rs

#![cfg(feature = "rpi")]

use std::collections::HashMap;
use std::time::Duration;

use rppal::gpio::{Gpio, InputPin, OutputPin, Trigger};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

use crate::config::DriverConfig;
use crate::constants::READ_FILLER;
use crate::transport::traits::{PinController, SpiBus};
use crate::types::{Edge, Level};
use crate::{Error, Result};

/// SPI bus on a Raspberry Pi via `/dev/spidevB.D`.
pub struct RppalBus {
    spi: Spi,
}

impl RppalBus {
    /// Open the bus/device from `config` in SPI mode 0.
    pub fn open(config: &DriverConfig) -> Result<Self> {
        let bus = match config.bus {
            0 => Bus::Spi0,
            1 => Bus::Spi1,
            2 => Bus::Spi2,
            other => {
                return Err(Error::InvalidArgument(format!("unsupported spi bus {}", other)));
            }
        };
        let ss = match config.device {
            0 => SlaveSelect::Ss0,
            1 => SlaveSelect::Ss1,
            2 => SlaveSelect::Ss2,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unsupported spi device {}",
                    other
                )));
            }
        };
        let spi = Spi::new(bus, ss, config.clock_hz, Mode::Mode0)?;
        Ok(Self { spi })
    }
}

impl SpiBus for RppalBus {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let written = self.spi.write(data)?;
        if written != data.len() {
            return Err(Error::InvalidLength {
                expected: data.len(),
                actual: written,
            });
        }
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        // The chip expects 0xFF on MOSI while it shifts data out.
        let filler = vec![READ_FILLER; len];
        let mut buf = vec![0u8; len];
        let n = self.spi.transfer(&mut buf, &filler)?;
        buf.truncate(n);
        Ok(buf)
    }
}

enum PinHandle {
    Input(InputPin),
    Output(OutputPin),
}

/// BCM-numbered GPIO pins on a Raspberry Pi.
pub struct RppalPins {
    gpio: Gpio,
    pins: HashMap<u8, PinHandle>,
}

impl RppalPins {
    pub fn open() -> Result<Self> {
        Ok(Self {
            gpio: Gpio::new()?,
            pins: HashMap::new(),
        })
    }

    fn take(&mut self, pin: u8) -> Result<rppal::gpio::Pin> {
        // Dropping a previous handle first so `get` does not report the pin busy
        self.pins.remove(&pin);
        Ok(self.gpio.get(pin)?)
    }
}

impl PinController for RppalPins {
    fn setup_input(&mut self, pin: u8) -> Result<()> {
        let input = self.take(pin)?.into_input();
        self.pins.insert(pin, PinHandle::Input(input));
        Ok(())
    }

    fn setup_output(&mut self, pin: u8, initial: Level) -> Result<()> {
        let mut output = match initial {
            Level::High => self.take(pin)?.into_output_high(),
            Level::Low => self.take(pin)?.into_output_low(),
        };
        output.set_reset_on_drop(false);
        self.pins.insert(pin, PinHandle::Output(output));
        Ok(())
    }

    fn set_level(&mut self, pin: u8, level: Level) -> Result<()> {
        match self.pins.get_mut(&pin) {
            Some(PinHandle::Output(out)) => {
                match level {
                    Level::High => out.set_high(),
                    Level::Low => out.set_low(),
                }
                Ok(())
            }
            _ => Err(Error::InvalidArgument(format!(
                "pin {} is not configured as output",
                pin
            ))),
        }
    }

    fn read_level(&mut self, pin: u8) -> Result<Level> {
        let high = match self.pins.get(&pin) {
            Some(PinHandle::Input(input)) => input.is_high(),
            Some(PinHandle::Output(out)) => out.is_set_high(),
            None => {
                return Err(Error::InvalidArgument(format!(
                    "pin {} is not configured",
                    pin
                )));
            }
        };
        Ok(if high { Level::High } else { Level::Low })
    }

    fn wait_for_edge(&mut self, pin: u8, edge: Edge, timeout: Duration) -> Result<bool> {
        let Some(PinHandle::Input(input)) = self.pins.get_mut(&pin) else {
            return Err(Error::InvalidArgument(format!(
                "pin {} is not configured as input",
                pin
            )));
        };
        let (trigger, target_high) = match edge {
            Edge::Rising => (Trigger::RisingEdge, true),
            Edge::Falling => (Trigger::FallingEdge, false),
        };
        input.set_interrupt(trigger, None)?;
        // The edge may have passed before the interrupt was armed.
        if input.is_high() == target_high {
            input.clear_interrupt()?;
            return Ok(true);
        }
        // Keep events queued since arming.
        let event = input.poll_interrupt(false, Some(timeout));
        let cleared = input.clear_interrupt();
        let seen = event?.is_some();
        cleared?;
        Ok(seen)
    }

    fn release(&mut self, pin: u8) -> Result<()> {
        let mut input = self.take(pin)?.into_input();
        input.set_reset_on_drop(false);
        Ok(())
    }
}
