use pn5180::transport::{MockBus, MockPins, PinController, PinEvent, SpiBus};
use pn5180::Level;

#[test]
fn bus_clones_share_recordings() {
    let mut bus = MockBus::new();
    let mut handle: Box<dyn SpiBus> = Box::new(bus.clone());
    bus.push_response(vec![0x10, 0x20]);

    handle.write(&[0x04, 0x13]).unwrap();
    assert_eq!(handle.read(2).unwrap(), vec![0x10, 0x20]);
    assert_eq!(bus.sent(), vec![vec![0x04, 0x13]]);
    assert_eq!(bus.read_lengths(), vec![2]);
    assert_eq!(bus.pending_responses(), 0);
}

#[test]
fn pins_track_driven_levels() {
    let pins = MockPins::new();
    let mut handle: Box<dyn PinController> = Box::new(pins.clone());

    handle.setup_output(8, Level::High).unwrap();
    handle.set_level(8, Level::Low).unwrap();
    assert_eq!(pins.level(8), Some(Level::Low));
    assert_eq!(handle.read_level(8).unwrap(), Level::Low);

    handle.release(8).unwrap();
    assert_eq!(pins.level(8), None);
    assert_eq!(
        pins.events(),
        vec![
            PinEvent::Output(8, Level::High),
            PinEvent::Set(8, Level::Low),
            PinEvent::Release(8),
        ]
    );
}
