// pn5180-rs/pn5180/src/device/handle.rs

use std::time::Duration;

use log::debug;

use crate::config::DriverConfig;
use crate::constants::{
    IRQ_CLEAR_ALL, RESET_LOW_MS, RESET_RECOVER_MS, RF_STATUS_TRANSCEIVE_STATE_MASK,
    RF_STATUS_TRANSCEIVE_STATE_SHIFT, SYSTEM_CONFIG_IDLE_AND_MASK,
    SYSTEM_CONFIG_TRANSCEIVE_OR_MASK,
};
use crate::device::builder::Pn5180Builder;
use crate::pins::PinConfig;
use crate::protocol::commands::{frame, Command};
use crate::protocol::parser::le_u32_at;
use crate::transport::{Handshake, PinController, SpiBus};
use crate::types::{CommandOpcode, Level, PinRole, RegisterAddress, TransceiverState};
use crate::Result;

/// PN5180 driver handle.
///
/// Every method issues its bytes through one busy-gated [`Handshake`], so
/// operations on a single handle never interleave on the bus. Share a
/// handle across threads only behind your own lock.
pub struct Pn5180 {
    transport: Handshake,
}

impl Pn5180 {
    /// Build a driver from explicit collaborators. The pin assignment is
    /// validated and the pins are put in their idle state.
    pub fn new(
        bus: Box<dyn SpiBus>,
        pins: Box<dyn PinController>,
        pin_config: PinConfig,
        config: DriverConfig,
    ) -> Result<Self> {
        let transport = Handshake::new(bus, pins, pin_config, config)?;
        Ok(Self { transport })
    }

    pub fn builder() -> Pn5180Builder {
        Pn5180Builder::new()
    }

    /// Open the Raspberry Pi SPI bus and GPIO block described by `config`.
    #[cfg(feature = "rpi")]
    pub fn open_rpi(pins: PinConfig, config: DriverConfig) -> Result<Self> {
        use crate::transport::{RppalBus, RppalPins};

        let bus = RppalBus::open(&config)?;
        let gpio = RppalPins::open()?;
        Self::builder()
            .with_bus(Box::new(bus))
            .with_pins(Box::new(gpio), pins)
            .with_config(config)
            .build()
    }

    pub fn config(&self) -> &DriverConfig {
        self.transport.config()
    }

    pub fn pin_config(&self) -> &PinConfig {
        self.transport.pin_config()
    }

    pub(crate) fn transport(&mut self) -> &mut Handshake {
        &mut self.transport
    }

    /// Validate and issue a register-level command.
    pub fn execute(&mut self, cmd: &Command) -> Result<Option<Vec<u8>>> {
        cmd.validate()?;
        self.transport.exchange(&cmd.encode(), cmd.response_len())
    }

    /// Write `[opcode, address] ++ content`, then read `response_len` bytes
    /// when non-zero.
    pub fn transceive(
        &mut self,
        opcode: CommandOpcode,
        address: u8,
        content: &[u8],
        response_len: usize,
    ) -> Result<Option<Vec<u8>>> {
        self.transport
            .exchange(&frame(opcode as u8, address, content), response_len)
    }

    /// Raw buffer exchange with no command framing.
    pub fn exchange(&mut self, data: &[u8], read_len: usize) -> Result<Option<Vec<u8>>> {
        self.transport.exchange(data, read_len)
    }

    /// Like [`exchange`](Self::exchange), returning an empty buffer when
    /// nothing is read.
    pub fn transceive_buffer(&mut self, data: &[u8], read_len: usize) -> Result<Vec<u8>> {
        Ok(self.exchange(data, read_len)?.unwrap_or_default())
    }

    fn run(&mut self, cmd: Command) -> Result<()> {
        self.execute(&cmd).map(|_| ())
    }

    fn fetch(&mut self, cmd: Command) -> Result<Vec<u8>> {
        Ok(self.execute(&cmd)?.unwrap_or_default())
    }

    pub fn write_register(&mut self, address: RegisterAddress, value: [u8; 4]) -> Result<()> {
        self.run(Command::WriteRegister { address, value })
    }

    pub fn write_register_or_mask(&mut self, address: RegisterAddress, mask: u32) -> Result<()> {
        self.run(Command::WriteRegisterOrMask { address, mask })
    }

    pub fn write_register_and_mask(&mut self, address: RegisterAddress, mask: u32) -> Result<()> {
        self.run(Command::WriteRegisterAndMask { address, mask })
    }

    pub fn read_register(&mut self, address: RegisterAddress, len: usize) -> Result<Vec<u8>> {
        self.fetch(Command::ReadRegister { address, len })
    }

    /// Read a full 32-bit register, least-significant byte first on the wire.
    pub fn read_register_u32(&mut self, address: RegisterAddress) -> Result<u32> {
        let raw = self.read_register(address, 4)?;
        le_u32_at(&raw, 0)
    }

    /// Fails with `InvalidArgument` for addresses above 254.
    pub fn write_eeprom(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.run(Command::WriteEeprom {
            address,
            data: data.to_vec(),
        })
    }

    /// Fails with `InvalidArgument` when `address + len` runs past 254.
    pub fn read_eeprom(&mut self, address: u8, len: u8) -> Result<Vec<u8>> {
        self.fetch(Command::ReadEeprom { address, len })
    }

    pub fn write_tx_data(&mut self, data: &[u8]) -> Result<()> {
        self.run(Command::WriteTxData {
            data: data.to_vec(),
        })
    }

    /// Leave any running transaction, enter transceive mode and send
    /// `data` with `valid_bits` in the last byte.
    pub fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()> {
        let cmd = Command::SendData {
            valid_bits,
            data: data.to_vec(),
        };
        cmd.validate()?;
        self.enter_transceive()?;
        self.run(cmd)
    }

    /// Idle the transceiver, then start the transceive routine.
    pub fn enter_transceive(&mut self) -> Result<()> {
        self.write_register_and_mask(RegisterAddress::SystemConfig, SYSTEM_CONFIG_IDLE_AND_MASK)?;
        self.write_register_or_mask(
            RegisterAddress::SystemConfig,
            SYSTEM_CONFIG_TRANSCEIVE_OR_MASK,
        )
    }

    pub fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        self.fetch(Command::ReadData { len })
    }

    pub fn load_rf_config(&mut self, tx: u8, rx: u8) -> Result<()> {
        self.run(Command::LoadRfConfig { tx, rx })
    }

    pub fn rf_on(&mut self) -> Result<()> {
        self.run(Command::RfOn { control: 0x00 })
    }

    pub fn rf_off(&mut self) -> Result<()> {
        self.run(Command::RfOff { control: 0x00 })
    }

    /// Clear the IRQ status bits set in `mask`.
    pub fn clear_irq_status(&mut self, mask: u32) -> Result<()> {
        self.write_register(RegisterAddress::IrqClear, mask.to_le_bytes())
    }

    pub fn clear_all_irqs(&mut self) -> Result<()> {
        self.clear_irq_status(IRQ_CLEAR_ALL)
    }

    /// Decode bits 24..=26 of RF_STATUS.
    pub fn get_transceiver_state(&mut self) -> Result<TransceiverState> {
        let status = self.read_register_u32(RegisterAddress::RfStatus)?;
        let code = (status >> RF_STATUS_TRANSCEIVE_STATE_SHIFT) & RF_STATUS_TRANSCEIVE_STATE_MASK;
        TransceiverState::try_from(code as u8)
    }

    /// Pulse the reset line: low for 1 s, then high and 0.5 s to recover.
    pub fn reset(&mut self) -> Result<()> {
        debug!("resetting pn5180");
        self.transport.set_pin(PinRole::Reset, Level::Low)?;
        self.transport.delay(Duration::from_millis(RESET_LOW_MS));
        self.transport.set_pin(PinRole::Reset, Level::High)?;
        self.transport.delay(Duration::from_millis(RESET_RECOVER_MS));
        Ok(())
    }
}
