// pn5180-rs/pn5180/src/constants.rs
//! Common protocol constants used across the crate

/// Highest addressable EEPROM byte.
pub const EEPROM_MAX_ADDRESS: u8 = 254;

/// Maximum payload accepted by `SEND_DATA`.
pub const SEND_DATA_MAX_LEN: usize = 260;

/// Maximum SFD frame (opcode/state + payload) length.
pub const SFD_MAX_FRAME_LEN: usize = 256;

/// Largest value the 10-bit SFD length field can carry.
pub const SFD_PKG_LENGTH_MAX: u16 = 0x3FF;

/// Largest value of the 5-bit SFD RFU field.
pub const SFD_RFU_MAX: u8 = 0x1F;

/// Direction byte + 2-byte header.
pub const SFD_PREFIX_LEN: usize = 3;

/// Trailing CRC16 length.
pub const SFD_CRC_LEN: usize = 2;

/// Default SPI clock.
pub const SPI_CLOCK_HZ: u32 = 7_000_000;

/// Busy-line edge wait bound in milliseconds.
pub const BUSY_TIMEOUT_MS: u64 = 10;

/// Filler clocked out on MOSI while reading.
pub const READ_FILLER: u8 = 0xFF;

/// SFD mode entry/exit timing (milliseconds).
pub const SFD_RESET_SETTLE_MS: u64 = 1000;
pub const SFD_REQUEST_SETTLE_MS: u64 = 200;
pub const SFD_RELEASE_SETTLE_MS: u64 = 500;

/// Hardware reset pulse timing (milliseconds).
pub const RESET_LOW_MS: u64 = 1000;
pub const RESET_RECOVER_MS: u64 = 500;

/// Offsets of major/minor inside the `GET_VERSION` response payload.
pub const SFD_VERSION_MAJOR_OFFSET: usize = 8;
pub const SFD_VERSION_MINOR_OFFSET: usize = 9;

/// Bits 24..=26 of `RF_STATUS` hold the transceiver state.
pub const RF_STATUS_TRANSCEIVE_STATE_SHIFT: u32 = 24;
pub const RF_STATUS_TRANSCEIVE_STATE_MASK: u32 = 0x07;

/// `SYSTEM_CONFIG` AND mask forcing the idle command (clears bits 0..=2).
pub const SYSTEM_CONFIG_IDLE_AND_MASK: u32 = 0xFFFF_FFF8;

/// `SYSTEM_CONFIG` OR mask starting the transceive routine (`0b011`).
pub const SYSTEM_CONFIG_TRANSCEIVE_OR_MASK: u32 = 0x0000_0003;

/// Clears every `IRQ_STATUS` bit.
pub const IRQ_CLEAR_ALL: u32 = 0x000F_FFFF;

/// RF configuration indices for ISO15693 (TX, RX).
pub const ISO15693_RF_CONFIG_TX: u8 = 0x0D;
pub const ISO15693_RF_CONFIG_RX: u8 = 0x8D;

/// `TX_CONFIG` AND mask: next transmission sends only EOF, no data.
pub const ISO15693_TX_CONFIG_EOF_ONLY_AND_MASK: u32 = 0xFFFF_FB3F;

/// Inventory request with 16 slots: flags, command, mask length.
pub const ISO15693_INVENTORY_16_SLOTS: [u8; 3] = [0x06, 0x01, 0x00];

/// Number of anti-collision slots per sweep.
pub const ISO15693_SLOT_COUNT: usize = 16;
