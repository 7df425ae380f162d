use libcalypso::Application;
use libcalypso::protocol::{ClassByte, Command};

#[test]
fn select_icc_with_calypso_class() {
    let apdu = Command::select(Application::Icc).encode(ClassByte::Calypso);
    assert_eq!(hex::encode(apdu), "94a4000002000200");
}

#[test]
fn select_icc_with_iso_class() {
    let apdu = Command::select(Application::Icc).encode(ClassByte::Iso);
    assert_eq!(hex::encode(apdu), "00a4000002000200");
}

#[test]
fn every_application_selects_its_path() {
    let expected = [
        (Application::Icc, "0002"),
        (Application::Ticketing, "2000"),
        (Application::Environment, "2001"),
        (Application::Contracts, "2020"),
        (Application::Counters, "2069"),
        (Application::Events, "2010"),
    ];
    for (app, path) in expected {
        let apdu = hex::encode(Command::select(app).encode(ClassByte::Calypso));
        assert_eq!(&apdu[10..14], path, "{:?}", app);
        assert_eq!(apdu.len(), 16);
    }
}

#[test]
fn read_record_encodes_record_number() {
    for record in 1..=4u8 {
        let apdu = Command::ReadRecord { record }.encode(ClassByte::Calypso);
        assert_eq!(apdu, vec![0x94, 0xB2, record, 0x04, 0x1D]);
    }
}

#[test]
fn commands_are_built_fresh() {
    let a = Command::ReadRecord { record: 1 }.encode(ClassByte::Calypso);
    let b = Command::ReadRecord { record: 3 }.encode(ClassByte::Iso);
    let c = Command::ReadRecord { record: 1 }.encode(ClassByte::Calypso);
    assert_eq!(a, c);
    assert_ne!(a, b);
}
