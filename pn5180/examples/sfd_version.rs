// Read the PN5180 firmware version through Secure Firmware Download mode.
//
// Usage:
//   cargo run -p pn5180 --example sfd_version --features rpi
//
// Needs the request line wired (GPIO24 here) in addition to busy and reset.

use anyhow::Context;
use pn5180::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pins = PinConfig::new(25).with_reset(7).with_request(24);
    let mut reader = Pn5180::open_rpi(pins, DriverConfig::default())?;

    let mut session = reader.sfd();
    session.start_mode().context("entering download mode")?;
    let version = session.get_version().context("GET_VERSION")?;
    println!("firmware version: {}", version);
    match session.get_die_id() {
        Ok(id) => println!("die id: {}", bytes_to_hex(&id)),
        Err(e) => println!("die id unavailable: {}", e),
    }
    session.stop_mode()?;
    Ok(())
}
