#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use common::fixtures::{
    full_pins, get_version_request, state_reply, version_reply, BUSY, REQUEST, RESET,
};
use common::helpers::{mock_driver, seed_sfd_reply};
use pn5180::transport::PinEvent;
use pn5180::{
    DriverConfig, Edge, Error, FirmwareVersion, Level, PinConfig, PinRole, SecureMessage,
    SendFrame, SfdMode, SfdOpcode, SfdState,
};

fn hw_cs() -> DriverConfig {
    DriverConfig::default().with_software_chip_select(false)
}

#[test]
fn get_version_round_trip() {
    let (mut d, mut bus, _) = mock_driver(full_pins(), hw_cs()).unwrap();
    seed_sfd_reply(&mut bus, &version_reply());

    let mut s = d.sfd();
    s.start_mode().unwrap();
    assert_eq!(s.get_version().unwrap(), FirmwareVersion::new(3, 5));
    drop(s);

    assert_eq!(bus.sent(), vec![get_version_request()]);
    assert_eq!(bus.read_lengths(), vec![3, 13]);
}

#[test]
fn reads_wait_for_busy_high_writes_for_low() {
    let (mut d, mut bus, mut pins) = mock_driver(full_pins(), hw_cs()).unwrap();
    seed_sfd_reply(&mut bus, &version_reply());

    let mut s = d.sfd();
    s.start_mode().unwrap();
    pins.clear_events();
    // Busy high at the write, low at both reads.
    pins.script_levels(BUSY, vec![Level::High, Level::Low, Level::Low]);
    s.get_version().unwrap();

    let waits: Vec<_> = pins
        .events()
        .into_iter()
        .filter(|e| matches!(e, PinEvent::WaitEdge(..)))
        .collect();
    assert_eq!(
        waits,
        vec![
            PinEvent::WaitEdge(BUSY, Edge::Falling),
            PinEvent::WaitEdge(BUSY, Edge::Rising),
            PinEvent::WaitEdge(BUSY, Edge::Rising),
        ]
    );
}

#[test]
fn inactive_session_rejects_without_io() {
    let (mut d, bus, pins) = mock_driver(full_pins(), hw_cs()).unwrap();
    let before = pins.events().len();
    let msg = SecureMessage::send(SendFrame::version_query(SfdOpcode::GetVersion)).unwrap();

    let mut s = d.sfd();
    assert_eq!(s.mode(), SfdMode::Inactive);
    assert!(matches!(s.secure_transceive(&msg), Err(Error::ModeNotActive)));
    assert!(matches!(s.get_version(), Err(Error::ModeNotActive)));
    drop(s);

    assert!(bus.is_untouched());
    assert_eq!(pins.events().len(), before);
}

#[test]
fn corrupted_crc_keeps_session_active() {
    let (mut d, mut bus, _) = mock_driver(full_pins(), hw_cs()).unwrap();
    let mut reply = version_reply();
    let last = reply.len() - 1;
    reply[last] ^= 0xFF;
    seed_sfd_reply(&mut bus, &reply);

    let mut s = d.sfd();
    s.start_mode().unwrap();
    assert!(matches!(s.get_version(), Err(Error::ChecksumMismatch { .. })));
    assert_eq!(s.mode(), SfdMode::Active);
}

#[test]
fn error_state_is_reported() {
    let (mut d, mut bus, _) = mock_driver(full_pins(), hw_cs()).unwrap();
    seed_sfd_reply(&mut bus, &state_reply(0x0B));

    let mut s = d.sfd();
    s.start_mode().unwrap();
    match s.get_die_id() {
        Err(Error::SfdStatus(state)) => assert_eq!(state, SfdState::UnknownCmd),
        other => panic!("expected SfdStatus, got {:?}", other),
    }
}

#[test]
fn oversized_reply_header_stops_before_second_read() {
    let (mut d, mut bus, _) = mock_driver(full_pins(), hw_cs()).unwrap();
    // pkg_length 0x101 = 257
    bus.push_response(vec![0xFF, 0x01, 0x01]);

    let mut s = d.sfd();
    s.start_mode().unwrap();
    assert!(matches!(
        s.get_session_state(),
        Err(Error::FrameTooLarge { max: 256, actual: 257 })
    ));
    drop(s);
    assert_eq!(bus.read_lengths(), vec![3]);
}

#[test]
fn session_state_payload() {
    let (mut d, mut bus, _) = mock_driver(full_pins(), hw_cs()).unwrap();
    let reply = SecureMessage::receive(pn5180::ReceiveFrame::new(SfdState::Ok, vec![0x01, 0x02]))
        .unwrap()
        .encode();
    seed_sfd_reply(&mut bus, &reply);

    let mut s = d.sfd();
    s.start_mode().unwrap();
    assert_eq!(s.get_session_state().unwrap(), vec![0x01, 0x02]);
    drop(s);
    assert_eq!(bus.sent()[0][3], 0xF2);
}

#[test]
fn reset_chip_sends_only() {
    let (mut d, bus, _) = mock_driver(full_pins(), hw_cs()).unwrap();

    let mut s = d.sfd();
    s.start_mode().unwrap();
    s.reset_chip().unwrap();
    drop(s);

    assert_eq!(bus.sent().len(), 1);
    assert!(bus.read_lengths().is_empty());
}

#[test]
fn missing_request_pin() {
    let pins = PinConfig::new(BUSY).with_reset(RESET);
    let (mut d, _, _) = mock_driver(pins, hw_cs()).unwrap();

    let mut s = d.sfd();
    assert!(matches!(s.start_mode(), Err(Error::MissingPin(PinRole::Request))));
    assert!(matches!(s.stop_mode(), Err(Error::MissingPin(PinRole::Request))));
}

#[test]
fn scope_exit_leaves_download_mode() {
    let (mut d, _, pins) = mock_driver(full_pins(), hw_cs()).unwrap();
    {
        let mut s = d.sfd();
        s.start_mode().unwrap();
        assert_eq!(pins.level(REQUEST), Some(Level::High));
    }
    assert_eq!(pins.level(REQUEST), Some(Level::Low));
}

#[test]
fn stop_mode_sequence() {
    let (mut d, _, mut pins) = mock_driver(full_pins(), hw_cs()).unwrap();

    let mut s = d.sfd();
    s.start_mode().unwrap();
    pins.clear_events();
    s.stop_mode().unwrap();
    assert_eq!(s.mode(), SfdMode::Inactive);
    assert_eq!(
        pins.events(),
        vec![
            PinEvent::Set(RESET, Level::High),
            PinEvent::Delay(Duration::from_millis(1000)),
            PinEvent::Set(REQUEST, Level::Low),
            PinEvent::Delay(Duration::from_millis(200)),
            PinEvent::Set(RESET, Level::Low),
            PinEvent::Delay(Duration::from_millis(500)),
        ]
    );
}

#[test]
fn reply_timeout_when_busy_never_rises() {
    let (mut d, bus, mut pins) = mock_driver(full_pins(), hw_cs()).unwrap();
    pins.set_input_level(BUSY, Level::Low);
    pins.push_edge_result(false);

    let mut s = d.sfd();
    s.start_mode().unwrap();
    assert!(matches!(s.get_version(), Err(Error::Timeout)));
    assert_eq!(s.mode(), SfdMode::Active);
    drop(s);

    assert_eq!(bus.sent(), vec![get_version_request()]);
    assert!(bus.read_lengths().is_empty());
}
