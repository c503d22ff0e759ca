// pn5180-rs/pn5180/src/transport/mod.rs

pub mod handshake;
pub mod mock;
#[cfg(feature = "rpi")]
pub mod rpi;
pub mod traits;

pub use handshake::Handshake;
pub use mock::{MockBus, MockPins, PinEvent};
#[cfg(feature = "rpi")]
pub use rpi::{RppalBus, RppalPins};
pub use traits::{PinController, SpiBus};
