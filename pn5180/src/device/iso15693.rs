// pn5180-rs/pn5180/src/device/iso15693.rs

//! ISO15693 16-slot inventory.
//!
//! The sweep follows the reader sequence of NXP AN12650: load the ISO15693
//! RF configuration, switch the field on, send one 16-slot INVENTORY and
//! then step through the slots with end-of-frame pulses, collecting every
//! slot where the RX status reports received bytes.

use log::debug;

use crate::constants::{
    ISO15693_INVENTORY_16_SLOTS, ISO15693_RF_CONFIG_RX, ISO15693_RF_CONFIG_TX,
    ISO15693_SLOT_COUNT, ISO15693_TX_CONFIG_EOF_ONLY_AND_MASK,
};
use crate::device::handle::Pn5180;
use crate::protocol::commands::Command;
use crate::types::{RegisterAddress, Uid};
use crate::Result;

impl Pn5180 {
    /// Run one inventory sweep and return the raw UID buffers, LSB first as
    /// received, in slot order. Any bus failure aborts the whole sweep.
    pub fn inventory_raw(&mut self) -> Result<Vec<Uid>> {
        self.load_rf_config(ISO15693_RF_CONFIG_TX, ISO15693_RF_CONFIG_RX)?;
        self.rf_on()?;
        self.clear_all_irqs()?;
        self.enter_transceive()?;
        self.trigger_slot(&ISO15693_INVENTORY_16_SLOTS)?;

        let mut uids = Vec::new();
        for slot in 0..ISO15693_SLOT_COUNT {
            if let Some(uid) = self.collect_slot(slot)? {
                uids.push(uid);
            }
            // Next slot: EOF only, no data.
            self.write_register_and_mask(
                RegisterAddress::TxConfig,
                ISO15693_TX_CONFIG_EOF_ONLY_AND_MASK,
            )?;
            self.enter_transceive()?;
            self.clear_all_irqs()?;
            self.trigger_slot(&[])?;
        }

        self.rf_off()?;
        Ok(uids)
    }

    /// Inventory with each UID rendered MSB first as lowercase hex.
    pub fn inventory(&mut self) -> Result<Vec<String>> {
        Ok(self.inventory_raw()?.iter().map(Uid::to_hex).collect())
    }

    fn collect_slot(&mut self, slot: usize) -> Result<Option<Uid>> {
        let status = self.read_register(RegisterAddress::RxStatus, 4)?;
        let count = status.first().copied().unwrap_or(0);
        if count == 0 {
            return Ok(None);
        }
        let buf = self.read_data(usize::from(count))?;
        debug!(
            "slot {}: {} byte(s) {}",
            slot,
            count,
            crate::utils::bytes_to_hex(&buf)
        );
        Ok(Some(Uid::from_bytes(buf)))
    }

    /// SEND_DATA without the idle/transceive preamble; the sweep sets the
    /// mode itself.
    fn trigger_slot(&mut self, data: &[u8]) -> Result<()> {
        self.execute(&Command::SendData {
            valid_bits: 0,
            data: data.to_vec(),
        })
        .map(|_| ())
    }
}
