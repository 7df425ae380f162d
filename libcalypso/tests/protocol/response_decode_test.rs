use libcalypso::Error;
use libcalypso::protocol::{Response, StatusKind, StatusWord};

#[test]
fn success_payload_is_stripped() {
    let raw = hex::decode("deadbeef9000").unwrap();
    let payload = Response::decode(&raw).unwrap().into_payload();
    assert_eq!(payload, hex::decode("deadbeef").unwrap());
}

#[test]
fn file_not_found_status() {
    let raw = hex::decode("6a82").unwrap();
    match Response::decode(&raw) {
        Err(Error::StatusWord { status }) => {
            assert_eq!(status, StatusWord::new(0x6A, 0x82));
            assert_eq!(status.kind(), StatusKind::FileNotFound);
        }
        other => panic!("expected StatusWord, got {:?}", other),
    }
}

#[test]
fn security_status() {
    match Response::decode(&[0x69, 0x82]) {
        Err(Error::StatusWord { status }) => {
            assert_eq!(status.kind(), StatusKind::SecurityDenied)
        }
        other => panic!("expected StatusWord, got {:?}", other),
    }
}

#[test]
fn one_byte_response_is_too_short() {
    match Response::decode(&[0x90]) {
        Err(Error::InvalidLength { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected InvalidLength, got {:?}", other),
    }
    assert!(matches!(
        Response::decode(&[]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn status_only_success_has_empty_payload() {
    let r = Response::decode(&[0x90, 0x00]).unwrap();
    assert!(r.payload.is_empty());
    assert!(r.status.is_success());
}
