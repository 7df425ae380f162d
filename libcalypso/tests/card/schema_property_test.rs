use libcalypso::card::RecordDecoder;
use libcalypso::schema::catalog::schema;
use libcalypso::schema::SchemaKind;
use libcalypso::utils::BitView;
use libcalypso::Dialect;
use proptest::prelude::*;

#[test]
fn every_field_fits_when_all_bits_are_set() {
    for kind in SchemaKind::ALL {
        let s = schema(kind);
        let bytes = vec![0xFFu8; s.total_width().div_ceil(8)];
        let layout = s.evaluate(BitView::new(&bytes)).unwrap();
        for spec in s.fields() {
            let end = layout.offset_of(spec.field).unwrap() + spec.width as usize;
            assert!(end <= s.total_width(), "{} {}", kind, spec.field);
        }
    }
}

proptest! {
    #[test]
    fn decoding_arbitrary_records_never_panics(
        bytes in prop::collection::vec(any::<u8>(), 0..40),
        slot in 0u8..4,
    ) {
        for dialect in [Dialect::Navigo, Dialect::Opus] {
            let d = RecordDecoder::for_dialect(dialect);
            let _ = d.decode_environment(&bytes);
            let _ = d.decode_contract(slot, &bytes);
            let _ = d.decode_event(slot.min(2), &bytes);
        }
        let _ = RecordDecoder::decode_counters(&bytes);
    }

    #[test]
    fn decoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 29)) {
        let d = RecordDecoder::for_dialect(Dialect::Navigo);
        prop_assert_eq!(d.decode_event(0, &bytes), d.decode_event(0, &bytes));
        prop_assert_eq!(d.decode_contract(0, &bytes), d.decode_contract(0, &bytes));
    }
}
