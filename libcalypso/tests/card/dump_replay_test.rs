#[path = "../common/mod.rs"]
mod common;

use libcalypso::card::{CalypsoCardBuilder, CardDump, DumpSource};
use libcalypso::Error;

use common::fixtures::{dump_text, navigo_card, opus_card};

#[test]
fn live_read_and_replay_agree() -> anyhow::Result<()> {
    common::init_logger();
    let expected = navigo_card(&[0x0000, 0x4000, 0x0005]);
    let mut mock = libcalypso::test_support::mock_replaying(&expected);
    let config = libcalypso::config::ReaderConfig::default();
    let session = libcalypso::session::CardSession::new(&mut mock, &config);

    let (live, dump) = CalypsoCardBuilder::new().build_recorded(session)?;
    assert_eq!(dump, expected);
    assert_eq!(CalypsoCardBuilder::from_dump(&dump)?, live);
    Ok(())
}

#[test]
fn text_written_with_hex_crate_parses() -> anyhow::Result<()> {
    let expected = opus_card();
    let parsed: CardDump = dump_text(&expected).parse()?;
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_text().parse::<CardDump>()?, expected);
    Ok(())
}

#[test]
fn replaying_twice_is_deterministic() -> anyhow::Result<()> {
    let dump = navigo_card(&[0x0001]);
    let a = CalypsoCardBuilder::from_dump(&dump)?;
    let b = CalypsoCardBuilder::from_dump(&CardDump::parse(&dump.to_text())?)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn truncated_dump_fails_like_a_card() {
    let mut dump = navigo_card(&[0x0001]);
    dump.events.truncate(1);
    // Default config still asks for three events.
    let result = CalypsoCardBuilder::new().build(&mut DumpSource::new(&dump));
    assert!(matches!(result, Err(Error::StatusWord { .. })));
}

#[cfg(feature = "serde")]
#[test]
fn dump_serde_round_trip() -> anyhow::Result<()> {
    let dump = navigo_card(&[0x0001]);
    let value = serde_json::to_string(&dump)?;
    let back: CardDump = serde_json::from_str(&value)?;
    assert_eq!(back, dump);
    Ok(())
}
