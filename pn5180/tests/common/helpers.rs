// helpers.rs: drivers wired to mock collaborators

use pn5180::transport::{MockBus, MockPins};
use pn5180::{DriverConfig, PinConfig, Pn5180, Result};

/// Driver on mocks, built through the public builder. The returned mocks
/// share state with the ones inside the driver.
pub fn mock_driver(pins: PinConfig, config: DriverConfig) -> Result<(Pn5180, MockBus, MockPins)> {
    let bus = MockBus::new();
    let gpio = MockPins::new();
    let driver = Pn5180::builder()
        .with_bus(Box::new(bus.clone()))
        .with_pins(Box::new(gpio.clone()), pins)
        .with_config(config)
        .build()?;
    Ok((driver, bus, gpio))
}

/// Queue one inventory sweep: every slot gets an RX status, and slots
/// listed in `responding` also get their UID buffer.
pub fn seed_inventory(bus: &mut MockBus, responding: &[(usize, Vec<u8>)]) {
    for slot in 0..16 {
        match responding.iter().find(|(s, _)| *s == slot) {
            Some((_, uid)) => {
                bus.push_response(super::fixtures::rx_status(uid.len() as u8));
                bus.push_response(uid.clone());
            }
            None => bus.push_response(super::fixtures::rx_status(0)),
        }
    }
}

/// Split an encoded reply the way the SFD read path fetches it.
pub fn seed_sfd_reply(bus: &mut MockBus, reply: &[u8]) {
    bus.push_response(reply[..3].to_vec());
    bus.push_response(reply[3..].to_vec());
}
