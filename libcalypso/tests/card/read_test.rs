#[path = "../common/mod.rs"]
mod common;

use libcalypso::card::{CalypsoCardBuilder, CardFamily, ContractSlot};
use libcalypso::display::{get_page, next_page, page_count};
use libcalypso::test_support::{mock_replaying, unknown_dump};
use libcalypso::{CardNumber, Dialect};

use common::fixtures::{navigo_card, opus_card, CARD_NUMBER};

fn read(dump: &libcalypso::card::CardDump) -> libcalypso::card::CalypsoCardData {
    let (card, _) = CalypsoCardBuilder::new()
        .build_recorded(libcalypso::card::DumpSource::new(dump))
        .unwrap();
    card
}

#[test]
fn navigo_card_end_to_end() {
    common::init_logger();
    let card = read(&navigo_card(&[0x0000, 0x0002]));

    assert_eq!(card.card_number, CardNumber::new(CARD_NUMBER));
    assert_eq!(card.dialect(), Some(Dialect::Navigo));
    assert_eq!(card.contract_count, 2);
    assert_eq!(card.contracts[2], ContractSlot::Empty);

    assert!(get_page(&card, 1).is_some());
    assert!(get_page(&card, 2).is_some());
    assert_eq!(get_page(&card, 3), None);
    assert_eq!(get_page(&card, 4), None);
    assert_eq!(next_page(&card, 2), 5);
    assert_eq!(page_count(&card), 6);
}

#[test]
fn navigo_event_dates_follow_the_calypso_epoch() {
    let card = read(&navigo_card(&[0x0001]));
    let e = card.events[1].unwrap();
    // 10_010 days after 1997-01-01 is 2024-05-29
    assert_eq!((e.date.year, e.date.month, e.date.day), (2024, 5, 29));
    assert_eq!((e.date.hour, e.date.minute), (18, 45));
    assert_eq!(e.date.unix, 852_073_200 + 10_010 * 86_400 + 3600 + (18 * 60 + 45) * 60);
}

#[test]
fn opus_card_end_to_end() {
    let card = read(&opus_card());
    assert_eq!(card.family, CardFamily::Opus);
    assert_eq!(card.contract_count, 1);
    assert_eq!(card.environment.map(|e| e.country_code), Some(124));
    assert!(card.events.iter().all(Option::is_some));
    assert!(get_page(&card, 0).unwrap().starts_with("Opus "));
}

#[test]
fn unknown_network_shows_label_and_number() {
    let dump = unknown_dump(4_242, 56, 1);
    let mut mock = mock_replaying(&dump);
    let config = libcalypso::config::ReaderConfig::default();
    let mut session = libcalypso::session::CardSession::new(&mut mock, &config);
    let card = CalypsoCardBuilder::new().build(&mut session).unwrap();

    assert_eq!(card.family, CardFamily::Mobib);
    assert_eq!(card.dialect(), None);
    assert_eq!(get_page(&card, 0).as_deref(), Some("Mobib 4242:\n"));
    assert_eq!(page_count(&card), 1);
    drop(session);
    // icc select + read, ticketing, environment select + read
    assert_eq!(mock.sent.len(), 5);
}

#[test]
fn unregistered_network_is_unknown() {
    let card = read(&unknown_dump(1, 999, 999));
    assert_eq!(card.family, CardFamily::Unknown);
    assert_eq!(get_page(&card, 0).as_deref(), Some("Unknown 1:\n"));
}
