#[path = "common.rs"]
mod common;

#[test]
#[ignore]
fn inventory_on_real_reader() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut reader = common::open_reader().expect("open PN5180");
    let uids = reader.inventory().expect("inventory");
    println!("{} card(s): {:?}", uids.len(), uids);
}

#[test]
#[ignore]
fn transceiver_state_is_readable() {
    let mut reader = common::open_reader().expect("open PN5180");
    let state = reader.get_transceiver_state().expect("rf status");
    println!("transceiver state: {}", state);
}

#[test]
#[ignore]
fn firmware_version_via_sfd() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut reader = common::open_reader().expect("open PN5180");
    let mut session = reader.sfd();
    session.start_mode().expect("enter sfd");
    let version = session.get_version().expect("get_version");
    println!("firmware {}", version);
}
