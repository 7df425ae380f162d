#[path = "../common/mod.rs"]
mod common;

use libcalypso::card::CalypsoCardBuilder;
use libcalypso::config::ReaderConfig;
use libcalypso::poller::FailReason;
use libcalypso::protocol::StatusKind;
use libcalypso::session::{CardSession, SessionState};
use libcalypso::transport::MockTransport;
use libcalypso::{Application, Error};

use common::fixtures::navigo_card;

#[test]
fn file_not_found_stops_the_session() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.push_ok(&[]);
    mock.push_status(0x6A, 0x82);
    mock.push_ok(&[0x00]); // never consumed

    let config = ReaderConfig::default();
    let mut session = CardSession::new(&mut mock, &config);
    let err = CalypsoCardBuilder::new().build(&mut session).unwrap_err();

    match &err {
        Error::StatusWord { status } => assert_eq!(status.kind(), StatusKind::FileNotFound),
        other => panic!("expected StatusWord, got {:?}", other),
    }
    assert_eq!(session.state(), SessionState::Fail(FailReason::FileNotFound));
    drop(session);
    assert_eq!(mock.sent.len(), 2);
    assert_eq!(mock.remaining(), 1);
}

#[test]
fn failure_mid_contract_scan_surfaces_no_card() {
    let dump = navigo_card(&[0x0001, 0x0002]);
    let mut mock = libcalypso::test_support::mock_replaying(&dump);
    // Drop everything after the first contract read.
    mock.responses.truncate(7);

    let config = ReaderConfig::default();
    let mut session = CardSession::new(&mut mock, &config);
    let result = CalypsoCardBuilder::new().build(&mut session);

    assert!(matches!(result, Err(Error::Timeout)));
    assert_eq!(session.state(), SessionState::Fail(FailReason::Generic));
}

#[test]
fn short_response_is_a_length_error() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0x90]);
    let config = ReaderConfig::default();
    let mut session = CardSession::new(&mut mock, &config);

    use libcalypso::session::FileSource;
    match session.select(Application::Icc) {
        Err(Error::InvalidLength { expected: 2, actual: 1 }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
    assert_eq!(session.state(), SessionState::Fail(FailReason::Generic));
}

#[test]
fn cancel_from_another_thread_stops_before_next_step() {
    let mut mock = MockTransport::new();
    let config = ReaderConfig::default();
    let mut session = CardSession::new(&mut mock, &config);
    let token = session.cancel_token().clone();

    std::thread::spawn(move || token.cancel())
        .join()
        .expect("cancel thread panicked");

    let result = CalypsoCardBuilder::new().build(&mut session);
    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(session.state(), SessionState::Fail(FailReason::Cancelled));
    drop(session);
    assert!(mock.sent.is_empty());
}
