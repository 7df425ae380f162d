// libcalypso/src/schema/catalog.rs

//! Lookup of the static record schemas.

use super::intercode::{NAVIGO_CONTRACT, NAVIGO_ENVIRONMENT, NAVIGO_EVENT};
use super::opus::{OPUS_CONTRACT, OPUS_ENVIRONMENT, OPUS_EVENT};
use super::{FieldSchema, SchemaKind};
use crate::constants::{COUNTER_ENTRY_BITS, MAX_CONTRACTS};
use crate::types::Dialect;

pub fn navigo_environment() -> &'static FieldSchema {
    &NAVIGO_ENVIRONMENT
}

pub fn navigo_contract() -> &'static FieldSchema {
    &NAVIGO_CONTRACT
}

pub fn navigo_event() -> &'static FieldSchema {
    &NAVIGO_EVENT
}

pub fn opus_environment() -> &'static FieldSchema {
    &OPUS_ENVIRONMENT
}

pub fn opus_contract() -> &'static FieldSchema {
    &OPUS_CONTRACT
}

pub fn opus_event() -> &'static FieldSchema {
    &OPUS_EVENT
}

pub fn schema(kind: SchemaKind) -> &'static FieldSchema {
    match kind {
        SchemaKind::NavigoEnvironment => navigo_environment(),
        SchemaKind::NavigoContract => navigo_contract(),
        SchemaKind::NavigoEvent => navigo_event(),
        SchemaKind::OpusEnvironment => opus_environment(),
        SchemaKind::OpusContract => opus_contract(),
        SchemaKind::OpusEvent => opus_event(),
    }
}

/// The three schemas of one dialect.
#[derive(Debug, Clone, Copy)]
pub struct SchemaSet {
    pub dialect: Dialect,
    pub environment: &'static FieldSchema,
    pub contract: &'static FieldSchema,
    pub event: &'static FieldSchema,
}

static NAVIGO: SchemaSet = SchemaSet {
    dialect: Dialect::Navigo,
    environment: &NAVIGO_ENVIRONMENT,
    contract: &NAVIGO_CONTRACT,
    event: &NAVIGO_EVENT,
};

static OPUS: SchemaSet = SchemaSet {
    dialect: Dialect::Opus,
    environment: &OPUS_ENVIRONMENT,
    contract: &OPUS_CONTRACT,
    event: &OPUS_EVENT,
};

impl SchemaSet {
    pub fn for_dialect(dialect: Dialect) -> &'static SchemaSet {
        match dialect {
            Dialect::Navigo => &NAVIGO,
            Dialect::Opus => &OPUS,
        }
    }

    pub fn schemas(&self) -> [&'static FieldSchema; 3] {
        [self.environment, self.contract, self.event]
    }
}

/// Fixed layout of the Navigo counters record: one entry per contract slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub entry_bits: usize,
    pub count_bits: usize,
    pub stamp_bits: usize,
    pub entries: usize,
}

impl CounterLayout {
    pub const NAVIGO: CounterLayout = CounterLayout {
        entry_bits: COUNTER_ENTRY_BITS,
        count_bits: 6,
        stamp_bits: 18,
        entries: MAX_CONTRACTS,
    };

    /// (offset, width) of the count of entry `i`
    pub fn count_at(&self, i: usize) -> (usize, usize) {
        (self.entry_bits * i, self.count_bits)
    }

    /// (offset, width) of the relative first stamp of entry `i`
    pub fn stamp_at(&self, i: usize) -> (usize, usize) {
        (self.entry_bits * i + self.count_bits, self.stamp_bits)
    }
}
