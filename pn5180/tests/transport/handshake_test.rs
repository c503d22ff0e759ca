#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{full_pins, BUSY, CHIP_SELECT};
use common::helpers::mock_driver;
use pn5180::transport::PinEvent;
use pn5180::{DriverConfig, Edge, Level};

#[test]
fn every_transfer_is_framed_by_chip_select() {
    let (mut d, mut bus, mut pins) = mock_driver(full_pins(), DriverConfig::default()).unwrap();
    pins.clear_events();
    bus.push_response(vec![0x00; 4]);

    d.read_register(pn5180::RegisterAddress::RxStatus, 4).unwrap();
    let cs: Vec<_> = pins
        .events()
        .into_iter()
        .filter(|e| matches!(e, PinEvent::Set(pin, _) if *pin == CHIP_SELECT))
        .collect();
    // one write, one read
    assert_eq!(
        cs,
        vec![
            PinEvent::Set(CHIP_SELECT, Level::Low),
            PinEvent::Set(CHIP_SELECT, Level::High),
            PinEvent::Set(CHIP_SELECT, Level::Low),
            PinEvent::Set(CHIP_SELECT, Level::High),
        ]
    );
}

#[test]
fn busy_waits_around_each_transfer() {
    let (mut d, _, mut pins) = mock_driver(full_pins(), DriverConfig::default()).unwrap();
    pins.clear_events();
    pins.script_levels(BUSY, vec![Level::High, Level::High]);

    d.rf_off().unwrap();
    let ev = pins.events();
    assert_eq!(ev.first(), Some(&PinEvent::WaitEdge(BUSY, Edge::Falling)));
    assert_eq!(ev.last(), Some(&PinEvent::WaitEdge(BUSY, Edge::Falling)));
    assert_eq!(ev.len(), 4);
}

#[test]
fn ready_chip_needs_no_wait() {
    let (mut d, _, mut pins) = mock_driver(full_pins(), DriverConfig::default()).unwrap();
    pins.clear_events();

    d.rf_on().unwrap();
    assert!(!pins
        .events()
        .iter()
        .any(|e| matches!(e, PinEvent::WaitEdge(..))));
}

#[test]
fn configured_timeout_is_kept() {
    let config = DriverConfig::default().with_busy_timeout(std::time::Duration::from_millis(25));
    let (d, _, _) = mock_driver(full_pins(), config).unwrap();
    assert_eq!(d.config().busy_timeout.as_millis(), 25);
}
