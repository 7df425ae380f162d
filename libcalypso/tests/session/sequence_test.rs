#[path = "../common/mod.rs"]
mod common;

use libcalypso::card::CalypsoCardBuilder;
use libcalypso::config::ReaderConfig;
use libcalypso::protocol::ClassByte;
use libcalypso::session::{CardSession, SessionState};
use libcalypso::test_support::mock_replaying;

use common::fixtures::{navigo_card, navigo_command_hex, sent_hex};

#[test]
fn navigo_read_sends_the_fixed_sequence() -> anyhow::Result<()> {
    common::init_logger();
    let dump = navigo_card(&[0x0000, 0x0001]);
    let mut mock = mock_replaying(&dump);
    let config = ReaderConfig::default();

    let mut session = CardSession::new(&mut mock, &config);
    let card = CalypsoCardBuilder::with_config(config).build(&mut session)?;
    session.finish();

    assert_eq!(session.state(), SessionState::Success);
    assert_eq!(card.contract_count, 2);
    // two contracts and the empty record that ends the scan
    assert_eq!(sent_hex(&mock.sent), navigo_command_hex(3, "94"));
    assert_eq!(mock.remaining(), 0);
    Ok(())
}

#[test]
fn iso_class_byte_is_used_throughout() -> anyhow::Result<()> {
    let dump = navigo_card(&[0x0000, 0x0001, 0x0002, 0x0004]);
    let mut mock = mock_replaying(&dump);
    let config = ReaderConfig::builder().class_byte(ClassByte::Iso).build()?;

    let mut session = CardSession::new(&mut mock, &config);
    let card = CalypsoCardBuilder::with_config(config).build(&mut session)?;

    assert_eq!(card.contract_count, 4);
    assert_eq!(sent_hex(&mock.sent), navigo_command_hex(4, "00"));
    Ok(())
}

#[test]
fn commands_are_counted() -> anyhow::Result<()> {
    let dump = navigo_card(&[0x0001]);
    let mut mock = mock_replaying(&dump);
    let config = ReaderConfig::default();
    let mut session = CardSession::new(&mut mock, &config);
    CalypsoCardBuilder::new().build(&mut session)?;

    let sent = session.commands_sent();
    drop(session);
    assert_eq!(sent, mock.sent.len());
    Ok(())
}
