//! Test support helpers intended for use by unit tests, the integration
//! tests under tests/ and the benches.
//!
//! These helpers build EN1545 records bit by bit and assemble whole card
//! dumps, so every test exercises the decoder with the same sample cards.
#![allow(dead_code)]

use crate::card::{CardDump, NetworkId};
use crate::constants::ICC_CARD_NUMBER_BITS;
use crate::transport::MockTransport;

/// Length of one Calypso record (the `Le` of the read command)
pub const RECORD_LEN: usize = 29;

/// MSB-first bit writer.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct RecordWriter {
    bytes: Vec<u8>,
    pos: usize,
}

impl RecordWriter {
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0; len],
            pos: 0,
        }
    }

    /// A writer sized like a card record.
    pub fn record() -> Self {
        Self::new(RECORD_LEN)
    }

    /// Append the low `width` bits of `value`. Widths past 64 are padded
    /// with leading zeros.
    pub fn push(&mut self, value: u64, width: usize) -> &mut Self {
        for i in 0..width {
            let shift = width - 1 - i;
            if shift < 64 && (value >> shift) & 1 == 1 {
                let bit = self.pos + i;
                self.bytes[bit / 8] |= 0x80 >> (bit % 8);
            }
        }
        self.pos += width;
        self
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn finish(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

#[doc(hidden)]
pub fn icc_record(card_number: u32) -> Vec<u8> {
    let mut w = RecordWriter::record();
    w.push(0, ICC_CARD_NUMBER_BITS.0).push(card_number as u64, 32);
    w.finish()
}

#[doc(hidden)]
pub fn empty_record() -> Vec<u8> {
    vec![0; RECORD_LEN]
}

/// Navigo environment: network id, validity end, holder card status and
/// commercial id present.
#[doc(hidden)]
pub fn navigo_environment(country: u16, network: u16, card_status: u8) -> Vec<u8> {
    let mut w = RecordWriter::record();
    w.push(1, 6)
        .push(0b000_0101, 7)
        .push(NetworkId::from_codes(country, network).as_u32() as u64, 24)
        .push(11_323, 14)
        .push(0b1000_0000, 8)
        .push(0b0000_0000_1001, 12)
        .push(card_status as u64, 4)
        .push(0x15, 6);
    w.finish()
}

#[doc(hidden)]
pub fn opus_environment(country: u16, network: u16) -> Vec<u8> {
    let mut w = RecordWriter::record();
    w.push(1, 6)
        .push(0b000_0101, 7)
        .push(NetworkId::from_codes(country, network).as_u32() as u64, 24)
        .push(10_957, 14)
        .push(0b010, 3)
        .push(0b11, 2)
        .push(1, 4)
        .push(0x07, 6);
    w.finish()
}

/// Navigo contract with tariff, price, validity (start, end, zones) and sale
/// data (date, agent).
#[doc(hidden)]
pub fn navigo_contract(tariff: u16, price_centimes: u16, zones: u8) -> Vec<u8> {
    let mut w = RecordWriter::record();
    w.push(1 << 2 | 1 << 10 | 1 << 13 | 1 << 15, 20)
        .push(tariff as u64, 16)
        .push(price_centimes as u64, 16)
        .push(0b0_0100_0101, 9)
        .push(10_000, 14)
        .push(10_030, 14)
        .push(zones as u64, 8)
        .push(0b0101, 4)
        .push(9_999, 14)
        .push(42, 8);
    w.finish()
}

#[doc(hidden)]
pub fn opus_contract(tariff: u16) -> Vec<u8> {
    let mut w = RecordWriter::record();
    w.push(0b000_1110, 7)
        .push(tariff as u64, 16)
        .push(0b11, 2)
        .push(9_000, 14)
        .push(9_030, 14)
        .push(0b0101, 4)
        .push(8_999, 14)
        .push(17, 8);
    w.finish()
}

/// Navigo event with code, provider, location and contract pointer.
#[doc(hidden)]
pub fn navigo_event(days: u16, minutes: u16, code: u8, location: u16) -> Vec<u8> {
    let mut w = RecordWriter::record();
    w.push(days as u64, 14)
        .push(minutes as u64, 11)
        .push(1 << 2 | 1 << 4 | 1 << 8 | 1 << 25, 28)
        .push(code as u64, 8)
        .push(3, 8)
        .push(location as u64, 16)
        .push(1, 5);
    w.finish()
}

/// Opus event with code, provider and route number.
#[doc(hidden)]
pub fn opus_event(days: u16, minutes: u16, code: u8, route: u16) -> Vec<u8> {
    let mut w = RecordWriter::record();
    w.push(days as u64, 14)
        .push(minutes as u64, 11)
        .push(0b0_0001_0101, 9)
        .push(code as u64, 8)
        .push(2, 8)
        .push(route as u64, 16);
    w.finish()
}

/// Counters record from (count, relative first stamp) pairs.
#[doc(hidden)]
pub fn counters_record(entries: &[(u8, u32)]) -> Vec<u8> {
    let mut w = RecordWriter::record();
    for (count, stamp) in entries {
        w.push(*count as u64, 6).push(*stamp as u64, 18);
    }
    w.finish()
}

/// A Navigo card holding one contract per tariff. When fewer than four
/// tariffs are given the scan ends on an empty record.
#[doc(hidden)]
pub fn navigo_dump(card_number: u32, tariffs: &[u16]) -> CardDump {
    let mut contracts: Vec<Vec<u8>> = tariffs
        .iter()
        .map(|t| navigo_contract(*t, 8_680, 0b0001_1111))
        .collect();
    if contracts.len() < 4 {
        contracts.push(empty_record());
    }
    CardDump {
        icc: Some(icc_record(card_number)),
        environment: Some(navigo_environment(250, 901, 0)),
        contracts,
        counters: Some(counters_record(&[(10, 96), (0, 0), (3, 4), (0, 0)])),
        events: vec![
            navigo_event(10_010, 8 * 60 + 2, 0x31, 0x0520),
            navigo_event(10_010, 18 * 60 + 45, 0x32, 0x0a10),
            navigo_event(10_011, 7 * 60 + 58, 0x11, 0x0040),
        ],
    }
}

#[doc(hidden)]
pub fn opus_dump(card_number: u32) -> CardDump {
    CardDump {
        icc: Some(icc_record(card_number)),
        environment: Some(opus_environment(124, 1)),
        contracts: vec![opus_contract(0x0101), empty_record()],
        counters: None,
        events: vec![
            opus_event(9_010, 600, 0x11, 24),
            opus_event(9_010, 630, 0x12, 24),
            opus_event(9_011, 480, 0x31, 0),
        ],
    }
}

/// Card from a network without a decoding dialect.
#[doc(hidden)]
pub fn unknown_dump(card_number: u32, country: u16, network: u16) -> CardDump {
    CardDump {
        icc: Some(icc_record(card_number)),
        environment: Some(navigo_environment(country, network, 0)),
        ..CardDump::default()
    }
}

/// A MockTransport answering the full read sequence of `dump` with
/// successful responses, in the order the card builder sends commands.
#[doc(hidden)]
pub fn mock_replaying(dump: &CardDump) -> MockTransport {
    fn file(mock: &mut MockTransport, records: &[Vec<u8>]) {
        mock.push_ok(&[]);
        for r in records {
            mock.push_ok(r);
        }
    }

    let mut mock = MockTransport::new();
    file(&mut mock, dump.icc.as_slice());
    mock.push_ok(&[]); // ticketing
    file(&mut mock, dump.environment.as_slice());
    if !dump.contracts.is_empty() {
        file(&mut mock, &dump.contracts);
    }
    if let Some(counters) = &dump.counters {
        file(&mut mock, std::slice::from_ref(counters));
    }
    if !dump.events.is_empty() {
        file(&mut mock, &dump.events);
    }
    mock
}
