// pn5180-rs/pn5180/src/transport/traits.rs

use std::time::Duration;

use crate::Result;
use crate::types::{Edge, Level};

/// SPI bus abstraction. The driver never sees the concrete controller.
pub trait SpiBus {
    /// Clock `data` out to the device.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Clock `len` bytes in from the device.
    fn read(&mut self, len: usize) -> Result<Vec<u8>>;
}

/// Digital pin controller abstraction (configure, drive, sample, wait).
pub trait PinController {
    /// Configure `pin` as an input.
    fn setup_input(&mut self, pin: u8) -> Result<()>;

    /// Configure `pin` as an output driven to `initial`.
    fn setup_output(&mut self, pin: u8, initial: Level) -> Result<()>;

    /// Drive an output pin.
    fn set_level(&mut self, pin: u8, level: Level) -> Result<()>;

    /// Sample a pin.
    fn read_level(&mut self, pin: u8) -> Result<Level>;

    /// Block until `edge` is seen on `pin` or `timeout` elapses. Returns
    /// `Ok(false)` on timeout.
    fn wait_for_edge(&mut self, pin: u8, edge: Edge, timeout: Duration) -> Result<bool>;

    /// Return `pin` to the high-impedance input state. Default falls back
    /// to `setup_input`.
    fn release(&mut self, pin: u8) -> Result<()> {
        self.setup_input(pin)
    }

    /// Sleep between pin transitions. Test doubles override this so timed
    /// sequences run instantly.
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
