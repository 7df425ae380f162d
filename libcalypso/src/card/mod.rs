// libcalypso/src/card/mod.rs

//! Decoded card model and the pipeline that produces it.

pub mod builder;
pub mod classifier;
pub mod decoder;
pub mod dump;
pub mod labels;

pub use builder::CalypsoCardBuilder;
pub use classifier::{CardFamily, Classification, NetworkId};
pub use decoder::RecordDecoder;
pub use dump::{CardDump, DumpSource, Recorder};

use crate::constants::{MAX_CONTRACTS, MAX_EVENTS};
use crate::types::{CardNumber, Dialect, Timestamp};

/// Environment (and holder) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    pub country_code: u16,
    pub network_code: u16,
    pub app_version: u8,
    pub validity_end: Timestamp,
    pub holder_card_status: u8,
    pub holder_commercial_id: u16,
}

/// Navigo ticket counter attached to a contract slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter {
    pub count: u8,
    pub relative_first_stamp_15mn: u32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contract {
    pub tariff: u16,
    pub provider: Option<u8>,
    pub serial_number: Option<u32>,
    pub pay_method: Option<u16>,
    /// Currency units (centimes / 100)
    pub price_amount: Option<f32>,
    pub validity_start: Option<Timestamp>,
    pub validity_end: Option<Timestamp>,
    /// `zones[k]` is zone k+1
    pub zones: Option<[bool; 5]>,
    pub sale_date: Option<Timestamp>,
    pub sale_agent: u32,
    pub sale_device: Option<u32>,
    pub status: Option<u16>,
    pub authenticator: Option<u32>,
    pub counter: Option<Counter>,
}

/// State of one contract record on the card.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractSlot {
    Present(Contract),
    /// Zero leading bitmap, or never read because the scan stopped earlier
    #[default]
    Empty,
    /// Record too short for its schema
    Unavailable,
}

impl ContractSlot {
    pub fn contract(&self) -> Option<&Contract> {
        match self {
            Self::Present(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub transport_type: u8,
    pub transition: u8,
    pub service_provider: u16,
    pub station_group_id: Option<u16>,
    pub station_id: Option<u8>,
    pub location_gate: Option<u16>,
    pub device: Option<u16>,
    pub door: Option<u8>,
    pub side: Option<u8>,
    pub route_number: Option<u16>,
    pub mission: Option<u16>,
    pub vehicle_id: Option<u32>,
    pub used_contract: Option<u8>,
    pub date: Timestamp,
    pub first_stamp: Option<Timestamp>,
}

/// Everything read from one card.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalypsoCardData {
    pub card_number: CardNumber,
    pub family: CardFamily,
    pub environment: Option<Environment>,
    pub contracts: [ContractSlot; MAX_CONTRACTS],
    pub events: [Option<Event>; MAX_EVENTS],
    pub contract_count: u8,
}

impl CalypsoCardData {
    /// Card with only its identity, as surfaced for unknown networks.
    pub fn unidentified(card_number: CardNumber, family: CardFamily) -> Self {
        Self {
            card_number,
            family,
            environment: None,
            contracts: Default::default(),
            events: [None; MAX_EVENTS],
            contract_count: 0,
        }
    }

    pub fn dialect(&self) -> Option<Dialect> {
        self.family.dialect()
    }

    /// Contract at slot `index` (0-based), if present.
    pub fn contract(&self, index: usize) -> Option<&Contract> {
        self.contracts.get(index).and_then(ContractSlot::contract)
    }

    pub fn present_contracts(&self) -> impl Iterator<Item = (usize, &Contract)> {
        self.contracts
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.contract().map(|c| (i, c)))
    }
}
