#[path = "../common/mod.rs"]
mod common;

use libcalypso::config::ReaderConfig;
use libcalypso::poller::{FailReason, Poller, PollerEvent};
use libcalypso::session::SessionState;
use libcalypso::test_support::mock_replaying;
use libcalypso::transport::MockTransport;

use common::fixtures::navigo_card;

#[test]
fn poller_reports_success_once() {
    common::init_logger();
    let dump = navigo_card(&[0x0001]);
    let mut mock = mock_replaying(&dump);
    let mut poller = Poller::new(ReaderConfig::default());
    let mut events = Vec::new();

    assert_eq!(poller.on_ready(&mut mock, &mut events), SessionState::Success);
    let terminal: Vec<_> = events
        .iter()
        .filter(|e| !matches!(e, PollerEvent::CardDetected))
        .collect();
    assert_eq!(terminal.len(), 1);
    assert!(matches!(terminal[0], PollerEvent::Success(_)));
    assert_eq!(poller.take_last_dump(), Some(dump));
    assert!(poller.last_dump().is_none());
}

#[test]
fn wrong_card_message() {
    let mut mock = MockTransport::new();
    mock.push_ok(&[]);
    mock.push_ok(&libcalypso::test_support::icc_record(1));
    mock.push_status(0x6A, 0x82);
    let mut events = Vec::new();

    let state = Poller::default().on_ready(&mut mock, &mut events);
    assert_eq!(state, SessionState::Fail(FailReason::FileNotFound));
    assert_eq!(events.last(), Some(&PollerEvent::FileNotFound));
    assert_eq!(FailReason::FileNotFound.message(), "Read Error,\n wrong card");
}

#[test]
fn cancel_token_survives_until_reset() {
    let mut poller = Poller::default();
    let poller_token = poller.cancel_token();
    poller_token.cancel();

    let mut events = Vec::new();
    let mut mock = mock_replaying(&navigo_card(&[]));
    assert_eq!(
        poller.on_ready(&mut mock, &mut events),
        SessionState::Fail(FailReason::Cancelled)
    );

    poller_token.reset();
    events.clear();
    assert_eq!(poller.on_ready(&mut mock, &mut events), SessionState::Success);
}
