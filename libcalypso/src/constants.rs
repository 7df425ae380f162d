// libcalypso/src/constants.rs
//! Common protocol constants used across the crate

/// Calypso class byte (CLA).
pub const CALYPSO_CLA: u8 = 0x94;

/// ISO 7816-4 class byte accepted by most Calypso revisions.
pub const ISO_CLA: u8 = 0x00;

/// SELECT FILE instruction
pub const INS_SELECT: u8 = 0xA4;

/// READ RECORD instruction
pub const INS_READ_RECORD: u8 = 0xB2;

/// Select template: [CLA, INS, P1, P2, Lc, dir, app, Le]. Bytes 5 and 6 are
/// substituted per call.
pub const SELECT_TEMPLATE: [u8; 8] = [CALYPSO_CLA, INS_SELECT, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];

/// Read template: [CLA, INS, record, P2, Le]. Byte 2 is substituted per call.
pub const READ_RECORD_TEMPLATE: [u8; 5] = [CALYPSO_CLA, INS_READ_RECORD, 0x00, 0x04, 0x1D];

/// Status word length appended to every response
pub const STATUS_WORD_LEN: usize = 2;

/// Calypso date epoch (1997-01-01 00:00 UTC
/// minus one hour).
pub const CALYPSO_EPOCH: i64 = 852_073_200;

/// Offset added on top of `CALYPSO_EPOCH` when converting a day count.
pub const CALYPSO_EPOCH_SHIFT: i64 = 3600;

/// Seconds in one day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Maximum number of contract records on a card
pub const MAX_CONTRACTS: usize = 4;

/// Maximum number of event records on a card
pub const MAX_EVENTS: usize = 3;

/// Card number location inside the ICC record (bits, inclusive)
pub const ICC_CARD_NUMBER_BITS: (usize, usize) = (128, 159);

/// Bit offset of the 24-bit network id in an Intercode environment record
pub const INTERCODE_NETWORK_ID_OFFSET: usize = 13;

/// Bit offset of the network id in Ravkav-style environment records
pub const ALTERNATE_NETWORK_ID_OFFSET: usize = 3;

/// Width of one Navigo counter entry in the counters record
pub const COUNTER_ENTRY_BITS: usize = 24;
