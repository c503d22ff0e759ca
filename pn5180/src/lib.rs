// pn5180-rs/pn5180/src/lib.rs

//! pn5180
//!
//! Pure Rust driver for the NXP PN5180 NFC frontend: busy-gated SPI
//! transport, register command layer, ISO15693 inventory and the Secure
//! Firmware Download (SFD) protocol.
//!
//! Hardware access goes through the [`SpiBus`](transport::SpiBus) and
//! [`PinController`](transport::PinController) traits. Enable the `rpi`
//! feature for a Raspberry Pi backend built on `rppal`.

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod pins;
pub mod prelude;
pub mod protocol;
pub mod sfd;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the enumerations in `types` are available to consumers and to the
// `prelude`.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
