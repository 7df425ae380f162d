use criterion::{Criterion, black_box, criterion_group, criterion_main};
use libcalypso::card::{CalypsoCardBuilder, RecordDecoder};
use libcalypso::test_support::{navigo_contract, navigo_dump, navigo_event, opus_dump};
use libcalypso::Dialect;

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_decode");
    let decoder = RecordDecoder::for_dialect(Dialect::Navigo);
    let contract = navigo_contract(0x0002, 8_680, 0b1_1111);
    let event = navigo_event(10_010, 482, 0x31, 0x0520);

    group.bench_function("navigo_contract", |b| {
        b.iter(|| black_box(decoder.decode_contract(0, black_box(&contract))))
    });
    group.bench_function("navigo_event", |b| {
        b.iter(|| black_box(decoder.decode_event(0, black_box(&event))))
    });
    group.finish();
}

fn bench_full_card(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_card");
    let builder = CalypsoCardBuilder::new();
    let navigo = navigo_dump(1, &[0x0000, 0x0001, 0x0002, 0x0004]);
    let opus = opus_dump(1);

    group.bench_function("navigo_replay", |b| {
        b.iter(|| black_box(builder.replay(black_box(&navigo)).expect("replay")))
    });
    group.bench_function("opus_replay", |b| {
        b.iter(|| black_box(builder.replay(black_box(&opus)).expect("replay")))
    });
    group.bench_function("dump_text_parse", |b| {
        let text = navigo.to_text();
        b.iter(|| black_box(text.parse::<libcalypso::card::CardDump>().expect("parse")))
    });
    group.finish();
}

criterion_group!(benches, bench_records, bench_full_card);
criterion_main!(benches);
