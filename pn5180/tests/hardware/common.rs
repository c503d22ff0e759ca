#![cfg(feature = "rpi")]

//! 共通: 実機テスト用ヘルパー
//!
//! 配線は環境変数で上書きできる (PN5180_BUSY / PN5180_RST / PN5180_REQ)。
//! 既定値はリファレンスボードの配線。

use pn5180::{DriverConfig, PinConfig, Pn5180, Result};

fn pin_from_env(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub fn board_pins() -> PinConfig {
    PinConfig::new(pin_from_env("PN5180_BUSY", 25))
        .with_reset(pin_from_env("PN5180_RST", 7))
        .with_request(pin_from_env("PN5180_REQ", 24))
}

/// Open the reader on SPI0.0 and pulse reset once.
pub fn open_reader() -> Result<Pn5180> {
    let mut reader = Pn5180::open_rpi(board_pins(), DriverConfig::default())?;
    reader.reset()?;
    Ok(reader)
}
