// ISO15693 inventory loop on a Raspberry Pi.
//
// Usage:
//   cargo run -p pn5180 --example inventory_loop --features rpi -- [-v]
//
// Wiring: SPI0.0, busy on GPIO25, reset on GPIO7. `-v` turns on debug logs.

use std::time::Duration;

use anyhow::Context;
use pn5180::prelude::*;

fn main() -> anyhow::Result<()> {
    let verbose = std::env::args().nth(1).as_deref() == Some("-v");
    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let pins = PinConfig::new(25).with_reset(7);
    let mut reader =
        Pn5180::open_rpi(pins, DriverConfig::new(0, 0)).context("opening PN5180 on SPI0.0")?;
    reader.reset()?;

    loop {
        let cards = reader.inventory()?;
        println!("{} card(s) detected: {}", cards.len(), cards.join(" - "));
        std::thread::sleep(Duration::from_millis(400));
    }
}
